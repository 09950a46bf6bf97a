/// Whether a rendered slot is a canonical item or an edge clone.
///
/// Clones exist only to mask the seam at the wrap point. Trailing clones
/// duplicate the last `visible` items and sit before the first real item;
/// leading clones duplicate the first `visible` items and sit after the
/// last real item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotKind {
    TrailingClone,
    Real,
    LeadingClone,
}

/// One entry of the rendered track: `[trailing clones][real][leading clones]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// Index of the real item this slot displays.
    pub item: usize,
    pub kind: SlotKind,
}

impl Slot {
    pub fn is_clone(&self) -> bool {
        !matches!(self.kind, SlotKind::Real)
    }
}

/// Viewport-width breakpoints mapping to a visible item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Widths up to and including this show `narrow` items.
    pub narrow_max_width: u32,
    /// Widths up to and including this (and above `narrow_max_width`) show `medium` items.
    pub medium_max_width: u32,
    pub narrow: usize,
    pub medium: usize,
    pub wide: usize,
}

impl Breakpoints {
    pub fn visible_for_width(&self, width: u32) -> usize {
        if width <= self.narrow_max_width {
            self.narrow
        } else if width <= self.medium_max_width {
            self.medium
        } else {
            self.wide
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_max_width: 480,
            medium_max_width: 900,
            narrow: 1,
            medium: 2,
            wide: 4,
        }
    }
}

/// A fresh item measurement reported by the host layer.
///
/// `gap` is the track's inter-item spacing; `None` means the layout does
/// not declare one and the engine's configured fallback applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetrics {
    pub width: u32,
    pub gap: Option<u32>,
}

impl ItemMetrics {
    pub fn new(width: u32) -> Self {
        Self { width, gap: None }
    }

    pub fn with_gap(width: u32, gap: u32) -> Self {
        Self {
            width,
            gap: Some(gap),
        }
    }
}

/// A track movement the host should apply.
///
/// `offset` is the leftward translation magnitude of the track; a DOM host
/// renders it as `translateX(-offset px)`. When `animate` is false the host
/// must reposition instantly (transition suppressed), which is how wrap
/// resets and resize repositions stay invisible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub offset: u64,
    pub animate: bool,
}
