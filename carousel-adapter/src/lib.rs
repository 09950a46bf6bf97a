//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by page adapters:
//!
//! - A deadline-based autoplay driver (pause on hover/focus, fresh
//!   interval on resume)
//! - Trailing-edge debouncing for raw resize events
//! - A [`Controller`] composing both over one engine instance
//!
//! It also hosts the sibling page behaviors an image carousel typically
//! ships with on a marketing site, each rendered headless: the persisted
//! theme store, gallery category filtering, a lightbox, a single-slot
//! notification queue, and the contact-form handler.
//!
//! This crate is intentionally framework-agnostic (no DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod autoplay;
mod controller;
mod debounce;
mod filter;
#[cfg(feature = "std")]
mod form;
mod lightbox;
mod notify;
mod theme;


pub use autoplay::Autoplay;
pub use controller::Controller;
pub use debounce::Debounce;
pub use filter::{
    DEFAULT_CATEGORY, auto_category, matches_filter, resolve_category, split_categories,
};
#[cfg(feature = "std")]
pub use form::{ContactMessage, FormError};
pub use lightbox::{Lightbox, LightboxKey};
pub use notify::{Notice, NoticeKind, Notifications};
pub use theme::{
    ACCENT_KEY, PRIMARY_KEY, PrefStore, SECONDARY_KEY, THEME_KEY, Theme, ThemePrefs, toggle_theme,
};
