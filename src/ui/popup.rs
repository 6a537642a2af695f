/// Popup UI for the image downloader

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::TRIGGER_ID;
use crate::controller::PopupController;
use crate::host::ChromeTabs;
use crate::schedule::{BrowserScheduler, PendingTimeout};
use crate::state::UiState;
use crate::ui::components::{ErrorNotice, TriggerButton};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(UiState::default);
    let controller = use_memo((), |_| PopupController::new(ChromeTabs, ChromeTabs));
    // Latest close/reset timer; dropped (and so cancelled) with the popup
    let pending = use_mut_ref(|| None::<PendingTimeout>);

    // Arm the delayed close or reset whenever a terminal state is reached
    {
        let dispatcher = state.dispatcher();
        let controller = controller.clone();
        let pending = pending.clone();
        use_effect_with(state.followup(), move |followup| {
            if let Some(followup) = *followup {
                let handle = controller.arm_followup(
                    &BrowserScheduler,
                    followup,
                    move |action| dispatcher.dispatch(action),
                    close_popup,
                );
                *pending.borrow_mut() = Some(handle);
            }
            || ()
        });
    }

    let on_download = {
        let dispatcher = state.dispatcher();
        let controller = controller.clone();

        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let attempt = controller
                .clone()
                .handle_download_click(move |action| dispatcher.dispatch(action));

            spawn_local(async move {
                // Outcome already reached the UI through the dispatcher
                let _ = attempt.await;
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Cassidy Image Downloader"}</h1>

            <TriggerButton
                id={TRIGGER_ID}
                label={state.button_label()}
                onclick={on_download}
                disabled={state.is_busy()}
            />

            if let Some(message) = state.notice() {
                <ErrorNotice message={message.to_string()} />
            }
        </div>
    }
}

fn close_popup() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.close() {
                log::error!("Failed to close popup: {:?}", e);
            }
        }
        None => log::error!("No window to close"),
    }
}
