//! Transient messages shown above a form or as floating notifications.

use std::time::Duration;

/// How long a form banner stays visible; also the submission guard window.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

/// How long a floating notification stays before fading.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

/// Fade-out duration before a notification is removed from the document.
pub const NOTIFICATION_FADE: Duration = Duration::from_millis(300);

pub const NETWORK_FAILURE: &str = "Network error. Check if backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    /// CSS class used by the stylesheet for this kind.
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
            BannerKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(BannerKind::Info, text)
    }
}
