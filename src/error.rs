/// Failures of a single download attempt
use thiserror::Error;

use crate::config::DEFAULT_CONTENT_ERROR;

/// Every variant is shown to the user the same way; only the message differs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopupError {
    #[error("No active tab found")]
    NoActiveTab,

    #[error("Please open a Gmail tab first")]
    WrongSite,

    /// The tab query itself was rejected or returned something unreadable
    #[error("{0}")]
    TabQuery(String),

    /// sendMessage rejected, usually because nothing listens in the tab
    #[error("{0}")]
    Delivery(String),

    #[error("{0}")]
    ContentScript(String),
}

impl PopupError {
    /// Content script failure, falling back to the default text when the
    /// script gave no (or an empty) reason.
    pub fn content_script(reason: Option<&str>) -> PopupError {
        match reason {
            Some(reason) if !reason.is_empty() => PopupError::ContentScript(reason.to_string()),
            _ => PopupError::ContentScript(DEFAULT_CONTENT_ERROR.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages() {
        assert_eq!(PopupError::NoActiveTab.to_string(), "No active tab found");
        assert_eq!(PopupError::WrongSite.to_string(), "Please open a Gmail tab first");
    }

    #[test]
    fn test_content_script_reason() {
        assert_eq!(
            PopupError::content_script(Some("No email open")).to_string(),
            "No email open"
        );
    }

    #[test]
    fn test_content_script_default() {
        assert_eq!(
            PopupError::content_script(None).to_string(),
            "Unknown error from content script"
        );
        assert_eq!(
            PopupError::content_script(Some("")).to_string(),
            "Unknown error from content script"
        );
    }

    #[test]
    fn test_delivery_message_passthrough() {
        let err = PopupError::Delivery(
            "Could not establish connection. Receiving end does not exist.".to_string(),
        );
        assert_eq!(
            err.to_string(),
            "Could not establish connection. Receiving end does not exist."
        );
    }
}
