/// Data structures for the active browser tab
use serde::{Deserialize, Serialize};

use crate::config::GMAIL_HOST;

/// The parts of a browser tab the popup reads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabRef {
    pub id: i32,
    /// Empty when the host withholds the URL (no host permission)
    #[serde(default)]
    pub url: String,
}

impl TabRef {
    pub fn new(id: i32, url: String) -> TabRef {
        TabRef { id, url }
    }

    /// Plain substring match, so any URL mentioning the Gmail host passes
    pub fn is_gmail(&self) -> bool {
        self.url.contains(GMAIL_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ref_creation() {
        let tab = TabRef::new(42, "https://mail.google.com/mail/u/0".to_string());

        assert_eq!(tab.id, 42);
        assert_eq!(tab.url, "https://mail.google.com/mail/u/0");
    }

    #[test]
    fn test_is_gmail() {
        assert!(TabRef::new(1, "https://mail.google.com/mail/u/0/#inbox".to_string()).is_gmail());
        assert!(TabRef::new(2, "http://mail.google.com".to_string()).is_gmail());
        assert!(!TabRef::new(3, "https://example.com".to_string()).is_gmail());
        assert!(!TabRef::new(4, "https://www.google.com/search".to_string()).is_gmail());
        assert!(!TabRef::new(5, String::new()).is_gmail());
    }

    #[test]
    fn test_missing_url_deserializes_empty() {
        let tab: TabRef = serde_json::from_str(r#"{"id": 9}"#).unwrap();

        assert_eq!(tab.id, 9);
        assert_eq!(tab.url, "");
        assert!(!tab.is_gmail());
    }

    #[test]
    fn test_extra_tab_fields_ignored() {
        let json = r#"{"id": 3, "url": "https://mail.google.com", "title": "Inbox", "pinned": false, "index": 0}"#;
        let tab: TabRef = serde_json::from_str(json).unwrap();

        assert_eq!(tab, TabRef::new(3, "https://mail.google.com".to_string()));
    }
}
