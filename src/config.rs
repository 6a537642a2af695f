// Fixed behaviour of the popup: host pattern, message action, delays, labels

/// Substring a tab URL must contain to count as a Gmail tab
pub const GMAIL_HOST: &str = "mail.google.com";

/// Action name the content script listens for
pub const PROCESS_ACTION: &str = "processCassidyEmail";

/// Delay before the popup closes after a successful dispatch
pub const CLOSE_DELAY_MS: u32 = 2_000;

/// Delay before the button re-arms after an error
pub const RESET_DELAY_MS: u32 = 3_000;

pub const TRIGGER_ID: &str = "downloadBtn";

pub const IDLE_LABEL: &str = "Download Images from Current Email";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const SUCCESS_LABEL: &str = "✅ Processing Started!";
pub const ERROR_LABEL: &str = "Error - Try Again";

pub const DEFAULT_CONTENT_ERROR: &str = "Unknown error from content script";
