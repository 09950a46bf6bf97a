use alloc::string::String;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// A single-slot notice queue.
///
/// Showing a notice replaces any existing one; notices auto-dismiss after
/// the configured delay via `tick`, or earlier through `dismiss`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notifications {
    dismiss_after_ms: u64,
    current: Option<(Notice, u64)>,
}

impl Notifications {
    pub const DEFAULT_DISMISS_AFTER_MS: u64 = 5_000;

    pub fn new() -> Self {
        Self {
            dismiss_after_ms: Self::DEFAULT_DISMISS_AFTER_MS,
            current: None,
        }
    }

    pub fn with_dismiss_after_ms(mut self, dismiss_after_ms: u64) -> Self {
        self.dismiss_after_ms = dismiss_after_ms;
        self
    }

    /// Shows a notice, replacing whatever is on screen.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind, now_ms: u64) {
        let notice = Notice {
            message: message.into(),
            kind,
        };
        let expires_ms = now_ms.saturating_add(self.dismiss_after_ms);
        self.current = Some((notice, expires_ms));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Expires the current notice; returns `true` when one was dismissed
    /// by this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match &self.current {
            Some((_, expires_ms)) if now_ms >= *expires_ms => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
