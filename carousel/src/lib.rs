//! A headless infinite-loop carousel engine.
//!
//! For adapter-level utilities (autoplay driving, resize debouncing, pause
//! tracking), see the `carousel-adapter` crate.
//!
//! This crate focuses on the state and math needed to present a finite item
//! sequence as an apparently infinite, seamlessly wrapping horizontal strip:
//! cloned edge slots masking the wrap seam, breakpoint-derived visible
//! counts, track offsets, and a single-resolution transition state machine
//! with a safety deadline for missed completion signals.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport width (debounced resize events)
//! - freshly measured item widths on demand
//! - transition-completion signals (or `now_ms` polls as a fallback)
//!
//! The engine answers with [`Motion`] values: a track offset plus a flag
//! saying whether the host should animate there or snap instantly.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod state;
mod track;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use options::{CarouselOptions, MeasureItem, OnChangeCallback};
pub use state::CarouselState;
pub use types::{Breakpoints, ItemMetrics, Motion, Slot, SlotKind};
