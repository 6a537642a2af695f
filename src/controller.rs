/// The download-click workflow, independent of the browser
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::error::PopupError;
use crate::host::{MessageChannel, TabLocator};
use crate::message::{ContentRequest, interpret_response};
use crate::schedule::{self, Scheduler};
use crate::state::{Followup, PopupAction};

pub struct PopupController<L, C> {
    locator: L,
    channel: C,
    // Set when a click is accepted, cleared only by the error reset.
    // Success never clears it: the popup is about to close.
    in_flight: Cell<bool>,
}

impl<L: TabLocator, C: MessageChannel> PopupController<L, C> {
    pub fn new(locator: L, channel: C) -> Self {
        PopupController {
            locator,
            channel,
            in_flight: Cell::new(false),
        }
    }

    /// Runs one click. Start is dispatched right here, before the returned
    /// future is ever polled; the future then dispatches exactly one of
    /// Succeeded / Failed once the attempt settles.
    ///
    /// A click arriving before the previous attempt was reset is ignored:
    /// nothing is dispatched and the future resolves to `None`.
    pub fn handle_download_click<D>(
        self: Rc<Self>,
        dispatch: D,
    ) -> impl Future<Output = Option<Result<(), PopupError>>>
    where
        D: Fn(PopupAction),
    {
        let accepted = !self.in_flight.replace(true);
        if accepted {
            dispatch(PopupAction::Start);
        } else {
            log::debug!("Download already started, ignoring click");
        }

        async move {
            if !accepted {
                return None;
            }

            let result = self.dispatch_to_content_script().await;
            match &result {
                Ok(()) => dispatch(PopupAction::Succeeded),
                Err(e) => {
                    log::error!("Popup error: {}", e);
                    dispatch(PopupAction::Failed(e.to_string()));
                }
            }
            Some(result)
        }
    }

    /// Accept clicks again
    pub fn rearm(&self) {
        self.in_flight.set(false);
    }

    /// Schedule what a terminal state asks for. The error reset re-arms the
    /// controller before dispatching Reset, so the next click is accepted.
    pub fn arm_followup<S, D, W>(
        self: &Rc<Self>,
        scheduler: &S,
        followup: Followup,
        dispatch: D,
        close: W,
    ) -> S::Handle
    where
        S: Scheduler,
        D: Fn(PopupAction) + 'static,
        W: FnOnce() + 'static,
        L: 'static,
        C: 'static,
    {
        let controller = Rc::clone(self);
        schedule::arm_followup(scheduler, followup, close, move || {
            controller.rearm();
            dispatch(PopupAction::Reset);
        })
    }

    async fn dispatch_to_content_script(&self) -> Result<(), PopupError> {
        let tab = self
            .locator
            .active_tab()
            .await?
            .ok_or(PopupError::NoActiveTab)?;

        if !tab.is_gmail() {
            return Err(PopupError::WrongSite);
        }

        log::info!("Sending message to tab: {}", tab.id);
        let response = self
            .channel
            .send(tab.id, &ContentRequest::process_email())
            .await?;
        log::debug!("Response from content script: {:?}", response);

        interpret_response(response.as_ref())
    }
}
