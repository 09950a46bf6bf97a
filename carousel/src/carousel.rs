use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::track;
use crate::{Breakpoints, CarouselOptions, CarouselState, ItemMetrics, Motion, Slot};

/// A transition currently in flight.
///
/// `target` may be transiently out of `[0, count)`; the wrap resolution in
/// `complete_transition` brings the settled position back in range. The
/// deadline recovers from a host that never delivers its completion signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Flight {
    target: i64,
    deadline_ms: u64,
}

/// A headless infinite-loop carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it with viewport widths, navigation requests,
///   completion signals, and `now_ms` timestamps.
/// - Track movements come back as [`Motion`] values for the host to apply.
///
/// For autoplay driving, resize debouncing, and pause tracking, see the
/// `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    viewport_width: u32,
    visible: usize,
    slots: Vec<Slot>,
    stride: u32,
    position: usize,
    flight: Option<Flight>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a new carousel engine from options.
    ///
    /// The engine does not activate when the track is empty, when the host
    /// signaled a reduced-motion preference, or when `options.enabled` is
    /// false: every operation no-ops and the slot sequence stays empty.
    pub fn new(options: CarouselOptions) -> Self {
        let viewport_width = options.initial_width.unwrap_or(0);
        cdebug!(
            count = options.count,
            enabled = options.enabled,
            reduced_motion = options.reduced_motion,
            "Carousel::new"
        );
        let mut c = Self {
            viewport_width,
            visible: options.breakpoints.visible_for_width(viewport_width),
            slots: Vec::new(),
            stride: 0,
            position: 0,
            flight: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        if c.is_active() {
            c.slots = track::build_slots(c.options.count, c.visible);
            c.measure_stride();
        }
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Whether the engine is activated: enabled, at least one item, and no
    /// reduced-motion preference.
    pub fn is_active(&self) -> bool {
        self.options.enabled && !self.options.reduced_motion && self.options.count > 0
    }

    fn reset_inactive(&mut self) {
        self.slots.clear();
        self.position = 0;
        self.flight = None;
    }

    fn reset_to_initial(&mut self) {
        self.position = 0;
        self.flight = None;
        self.refresh_layout();
    }

    fn refresh_layout(&mut self) {
        self.visible = self.options.breakpoints.visible_for_width(self.viewport_width);
        self.slots = track::build_slots(self.options.count, self.visible);
        self.measure_stride();
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        let prev_count = self.options.count;
        let prev_breakpoints = self.options.breakpoints;
        let was_active = self.is_active();
        self.options = options;
        ctrace!(
            count = self.options.count,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );

        if !self.is_active() {
            self.reset_inactive();
        } else if !was_active {
            self.reset_to_initial();
        } else if self.options.count != prev_count || self.options.breakpoints != prev_breakpoints {
            self.position = self.position.min(self.options.count - 1);
            self.refresh_layout();
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    ///
    /// This is useful when you want to update multiple options at once while
    /// letting the engine decide what needs to be rebuilt.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.flight.is_some());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when a host event touches several pieces of state at
    /// once (e.g. restoring a snapshot) and `on_change` drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        let was_active = self.is_active();
        self.options.enabled = enabled;
        if !self.is_active() {
            self.reset_inactive();
        } else if !was_active {
            self.reset_to_initial();
        }
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        let was_active = self.is_active();
        self.options.count = count;
        if !self.is_active() {
            self.reset_inactive();
        } else if !was_active {
            self.reset_to_initial();
        } else {
            self.position = self.position.min(count - 1);
            self.refresh_layout();
        }
        self.notify();
    }

    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        if self.options.breakpoints == breakpoints {
            return;
        }
        self.options.breakpoints = breakpoints;
        if self.is_active() {
            self.refresh_layout();
        }
        self.notify();
    }

    pub fn set_gap_fallback(&mut self, gap_fallback: u32) {
        self.options.gap_fallback = gap_fallback;
        self.notify();
    }

    pub fn set_transition_fallback_ms(&mut self, transition_fallback_ms: u64) {
        self.options.transition_fallback_ms = transition_fallback_ms;
        self.notify();
    }

    pub fn set_measure_item(
        &mut self,
        measure_item: impl Fn() -> ItemMetrics + Send + Sync + 'static,
    ) {
        self.options.measure_item = Arc::new(measure_item);
        self.notify();
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Number of items shown simultaneously at the current viewport width.
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Index of the left-most visible real item, once settled.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Last measured item stride (item width + inter-item gap).
    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn is_transitioning(&self) -> bool {
        self.flight.is_some()
    }

    /// Target index of the in-flight transition, if any.
    ///
    /// May be transiently out of `[0, count)` while running into clone
    /// territory at either edge.
    pub fn transition_target(&self) -> Option<i64> {
        self.flight.map(|f| f.target)
    }

    /// Rendered track length: `count + 2 * visible_count` when active.
    pub fn rendered_len(&self) -> usize {
        self.slots.len()
    }

    /// The rendered slot sequence: `[trailing clones][real][leading clones]`.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn for_each_slot(&self, mut f: impl FnMut(Slot)) {
        for slot in &self.slots {
            f(*slot);
        }
    }

    /// Collects the rendered slots into `out` (clears `out` first).
    pub fn collect_slots(&self, out: &mut Vec<Slot>) {
        out.clear();
        out.extend_from_slice(&self.slots);
    }

    /// Settled track offset for the current position.
    pub fn offset(&self) -> u64 {
        if !self.is_active() {
            return 0;
        }
        track::offset_for(self.position as i64, self.visible, self.stride)
    }

    /// Track offset of the in-flight transition's target, if any.
    pub fn target_offset(&self) -> Option<u64> {
        let flight = self.flight?;
        Some(track::offset_for(flight.target, self.visible, self.stride))
    }

    fn measure_stride(&mut self) {
        let metrics = (self.options.measure_item)();
        let gap = metrics.gap.unwrap_or(self.options.gap_fallback);
        self.stride = metrics.width.saturating_add(gap);
        ctrace!(
            width = metrics.width,
            gap,
            stride = self.stride,
            "measure_stride"
        );
    }

    fn snap_motion(&self) -> Motion {
        Motion {
            offset: self.offset(),
            animate: false,
        }
    }

    /// Requests an animated move to `target` (an index into the real item
    /// sequence; one step past either edge runs into clone territory).
    ///
    /// Returns `None` — the request is dropped, not queued — while a
    /// transition is already in flight, or when the engine is inactive.
    /// Otherwise the item stride is measured afresh and the returned motion
    /// carries the animated target offset; the transition stays in flight
    /// until [`Self::complete_transition`] or the safety deadline polled by
    /// [`Self::update_transition`].
    pub fn go_to(&mut self, target: i64, now_ms: u64) -> Option<Motion> {
        if !self.is_active() {
            return None;
        }
        if self.flight.is_some() {
            ctrace!(target, "go_to dropped: transition in flight");
            return None;
        }
        self.measure_stride();
        self.flight = Some(Flight {
            target,
            deadline_ms: now_ms.saturating_add(self.options.transition_fallback_ms),
        });
        let motion = Motion {
            offset: track::offset_for(target, self.visible, self.stride),
            animate: true,
        };
        self.notify();
        Some(motion)
    }

    pub fn advance(&mut self, now_ms: u64) -> Option<Motion> {
        self.go_to(self.position as i64 + 1, now_ms)
    }

    pub fn retreat(&mut self, now_ms: u64) -> Option<Motion> {
        self.go_to(self.position as i64 - 1, now_ms)
    }

    /// Resolves the in-flight transition (the host's transition-end signal).
    ///
    /// A target that ran past either edge snaps to its true in-range
    /// position: the returned non-animated motion repositions the track
    /// from the clone it stopped on to the equivalent real offset, which is
    /// what makes the wrap seamless. In-range targets just commit the
    /// position; the track is already where it should be.
    ///
    /// Completion is single-resolution: once this runs, the stale safety
    /// deadline is gone with the flight record and cannot fire again.
    pub fn complete_transition(&mut self) -> Option<Motion> {
        let flight = self.flight.take()?;
        let count = self.options.count as i64;
        let motion = if flight.target >= count {
            self.position = 0;
            Some(self.snap_motion())
        } else if flight.target < 0 {
            self.position = (count - 1) as usize;
            Some(self.snap_motion())
        } else {
            self.position = flight.target as usize;
            None
        };
        self.notify();
        motion
    }

    /// Polls the safety deadline for a missed completion signal.
    ///
    /// Hosts should call this from their timer/frame callback; when the
    /// deadline has passed it forces the same resolution as
    /// [`Self::complete_transition`].
    pub fn update_transition(&mut self, now_ms: u64) -> Option<Motion> {
        match self.flight {
            Some(flight) if now_ms >= flight.deadline_ms => {
                cwarn!(
                    target = flight.target,
                    "transition-end signal missed; forcing completion"
                );
                self.complete_transition()
            }
            _ => None,
        }
    }

    /// Applies a settled viewport width (debounce raw resize events in the
    /// adapter).
    ///
    /// Recomputes the visible count, rebuilds the slot sequence when it
    /// changed, re-measures the item stride, and returns an instant
    /// reposition to the current position's offset. The position itself is
    /// never reset. Any in-flight transition is cancelled: the snap
    /// supersedes it.
    pub fn set_viewport_width(&mut self, width: u32) -> Option<Motion> {
        self.viewport_width = width;
        if !self.is_active() {
            return None;
        }
        let visible = self.options.breakpoints.visible_for_width(width);
        ctrace!(width, visible, "set_viewport_width");
        if visible != self.visible {
            self.visible = visible;
            self.slots = track::build_slots(self.options.count, visible);
        }
        self.flight = None;
        self.measure_stride();
        let motion = self.snap_motion();
        self.notify();
        Some(motion)
    }

    /// Re-measures the item stride and returns an instant reposition to the
    /// current position (initial placement, font swaps, ...).
    pub fn reposition(&mut self) -> Option<Motion> {
        if !self.is_active() {
            return None;
        }
        self.measure_stride();
        let motion = self.snap_motion();
        self.notify();
        Some(motion)
    }

    /// Returns a lightweight snapshot of the engine's restorable state.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            viewport_width: self.viewport_width,
            position: self.position,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The position is clamped to the current item count. Returns the
    /// instant reposition the host should apply.
    pub fn restore_state(&mut self, state: CarouselState) -> Option<Motion> {
        let mut motion = None;
        self.batch_update(|c| {
            if c.options.count > 0 {
                c.position = state.position.min(c.options.count - 1);
            }
            motion = c.set_viewport_width(state.viewport_width);
        });
        motion
    }
}
