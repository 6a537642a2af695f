/// Host capabilities the popup depends on, and their chrome.* implementation
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::PopupError;
use crate::message::{ContentRequest, ContentResponse};
use crate::tab_data::TabRef;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendTabMessage(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;
}

/// Finds the focused tab of the current window
#[allow(async_fn_in_trait)]
pub trait TabLocator {
    async fn active_tab(&self) -> Result<Option<TabRef>, PopupError>;
}

/// One-shot request/response to a tab's content script
#[allow(async_fn_in_trait)]
pub trait MessageChannel {
    /// `Ok(None)` means the content script answered with nothing usable.
    async fn send(
        &self,
        tab_id: i32,
        request: &ContentRequest,
    ) -> Result<Option<ContentResponse>, PopupError>;
}

/// chrome.tabs, reached through popup.js
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChromeTabs;

impl TabLocator for ChromeTabs {
    async fn active_tab(&self) -> Result<Option<TabRef>, PopupError> {
        let tab_js = queryActiveTab()
            .await
            .map_err(|e| PopupError::TabQuery(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value::<Option<TabRef>>(tab_js)
            .map_err(|e| PopupError::TabQuery(format!("Failed to parse tab: {}", e)))
    }
}

impl MessageChannel for ChromeTabs {
    async fn send(
        &self,
        tab_id: i32,
        request: &ContentRequest,
    ) -> Result<Option<ContentResponse>, PopupError> {
        let message = serde_wasm_bindgen::to_value(request)
            .map_err(|e| PopupError::Delivery(format!("Failed to serialize: {}", e)))?;

        let response_js = sendTabMessage(tab_id, message)
            .await
            .map_err(|e| PopupError::Delivery(js_error_message(&e)))?;

        match serde_wasm_bindgen::from_value::<Option<ContentResponse>>(response_js) {
            Ok(response) => Ok(response),
            Err(e) => {
                log::warn!("Unreadable response from content script: {}", e);
                Ok(None)
            }
        }
    }
}

/// Message of a rejected promise: Error.message, a thrown string, or the debug form
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
