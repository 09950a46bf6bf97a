/// A deadline-based repeating autoplay driver.
///
/// The driver owns nothing but the next fire deadline; the host's
/// timer/frame callback polls it with `now_ms`. Arming always schedules a
/// full fresh interval — there is no resume-from-partial-elapsed, so a
/// carousel un-pausing waits the whole interval before its next advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Autoplay {
    interval_ms: u64,
    deadline_ms: Option<u64>,
}

impl Autoplay {
    pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            deadline_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Schedules the next fire a full interval from `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn disarm(&mut self) {
        self.deadline_ms = None;
    }

    /// Returns `true` when the deadline has passed, re-arming for the next
    /// full interval from `now_ms`.
    pub fn fire_due(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = Some(now_ms.saturating_add(self.interval_ms));
                true
            }
            _ => false,
        }
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS)
    }
}
