use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Breakpoints, ItemMetrics};

/// A callback fired when a carousel state update occurs.
///
/// The second argument is `is_transitioning`.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel, bool) + Send + Sync>;

/// A callback measuring one rendered item.
///
/// The engine calls this on every navigation and on every resize settle,
/// never caching the result across those events: fonts, layout, and
/// viewport changes can all move the item width under the track.
pub type MeasureItem = Arc<dyn Fn() -> ItemMetrics + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: heavy fields are stored in
/// `Arc`s so adapters can update a few fields and call
/// `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions {
    /// Number of real items in the track.
    pub count: usize,
    pub measure_item: MeasureItem,
    pub breakpoints: Breakpoints,

    /// Enables/disables the engine. When disabled, operations no-op and the
    /// slot sequence is empty.
    pub enabled: bool,

    /// The host platform's reduced-motion preference, read once at init.
    ///
    /// When set, the engine never activates: the surrounding layout keeps a
    /// static, non-animating strip.
    pub reduced_motion: bool,

    /// Initial viewport width, when the host knows it at construction time.
    ///
    /// `None` is treated as the narrowest breakpoint until the host reports
    /// a width.
    pub initial_width: Option<u32>,

    /// Inter-item spacing applied when a measurement carries no gap.
    pub gap_fallback: u32,

    /// How long to wait for the host's transition-completion signal before
    /// forcing completion. Must comfortably exceed the host's declared
    /// transition duration.
    pub transition_fallback_ms: u64,

    /// Optional callback fired when the engine's state changes.
    ///
    /// The second argument indicates whether a transition is in flight.
    pub on_change: Option<OnChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            measure_item: Arc::clone(&self.measure_item),
            breakpoints: self.breakpoints,
            enabled: self.enabled,
            reduced_motion: self.reduced_motion,
            initial_width: self.initial_width,
            gap_fallback: self.gap_fallback,
            transition_fallback_ms: self.transition_fallback_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    /// Creates options for a track of `count` real items.
    ///
    /// `measure_item()` should return the current rendered width of one item
    /// (plus the track gap, when the layout declares one).
    pub fn new(count: usize, measure_item: impl Fn() -> ItemMetrics + Send + Sync + 'static) -> Self {
        Self {
            count,
            measure_item: Arc::new(measure_item),
            breakpoints: Breakpoints::default(),
            enabled: true,
            reduced_motion: false,
            initial_width: None,
            gap_fallback: 16,
            transition_fallback_ms: 900,
            on_change: None,
        }
    }

    /// Creates options for a fixed item stride, for hosts with static layout.
    pub fn with_fixed_metrics(count: usize, metrics: ItemMetrics) -> Self {
        Self::new(count, move || metrics)
    }

    pub fn with_measure_item(
        mut self,
        measure_item: impl Fn() -> ItemMetrics + Send + Sync + 'static,
    ) -> Self {
        self.measure_item = Arc::new(measure_item);
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_initial_width(mut self, initial_width: Option<u32>) -> Self {
        self.initial_width = initial_width;
        self
    }

    pub fn with_gap_fallback(mut self, gap_fallback: u32) -> Self {
        self.gap_fallback = gap_fallback;
        self
    }

    pub fn with_transition_fallback_ms(mut self, transition_fallback_ms: u64) -> Self {
        self.transition_fallback_ms = transition_fallback_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("breakpoints", &self.breakpoints)
            .field("enabled", &self.enabled)
            .field("reduced_motion", &self.reduced_motion)
            .field("initial_width", &self.initial_width)
            .field("gap_fallback", &self.gap_fallback)
            .field("transition_fallback_ms", &self.transition_fallback_ms)
            .finish_non_exhaustive()
    }
}
