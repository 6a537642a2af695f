/// Popup UI state machine
use std::rc::Rc;

use yew::prelude::*;

use crate::config::{
    CLOSE_DELAY_MS, ERROR_LABEL, IDLE_LABEL, PROCESSING_LABEL, RESET_DELAY_MS, SUCCESS_LABEL,
};

/// Idle -> Processing -> Success (terminal) | Error -> Idle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Processing,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Start,
    Succeeded,
    Failed(String),
    Reset,
}

/// Delayed task a terminal state asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Followup {
    ClosePopup { after_ms: u32 },
    ResetToIdle { after_ms: u32 },
}

impl UiState {
    /// Transitions outside the state machine leave the state untouched.
    pub fn next(&self, action: PopupAction) -> Option<UiState> {
        match (self, action) {
            (UiState::Idle, PopupAction::Start) => Some(UiState::Processing),
            (UiState::Processing, PopupAction::Succeeded) => Some(UiState::Success),
            (UiState::Processing, PopupAction::Failed(message)) => Some(UiState::Error(message)),
            (UiState::Error(_), PopupAction::Reset) => Some(UiState::Idle),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            UiState::Idle => IDLE_LABEL,
            UiState::Processing => PROCESSING_LABEL,
            UiState::Success => SUCCESS_LABEL,
            UiState::Error(_) => ERROR_LABEL,
        }
    }

    /// Button is disabled for everything but Idle
    pub fn is_busy(&self) -> bool {
        !matches!(self, UiState::Idle)
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn followup(&self) -> Option<Followup> {
        match self {
            UiState::Success => Some(Followup::ClosePopup {
                after_ms: CLOSE_DELAY_MS,
            }),
            UiState::Error(_) => Some(Followup::ResetToIdle {
                after_ms: RESET_DELAY_MS,
            }),
            UiState::Idle | UiState::Processing => None,
        }
    }
}

impl Reducible for UiState {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action.clone()) {
            Some(next) => Rc::new(next),
            None => {
                log::debug!("Ignoring {:?} while {:?}", action, self);
                self
            }
        }
    }
}
