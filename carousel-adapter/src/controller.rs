use carousel::{Carousel, CarouselOptions, Motion};

use crate::{Autoplay, Debounce};

/// A framework-neutral controller that wraps a `carousel::Carousel` and
/// provides the page-level workflows: autoplay with hover/focus pausing,
/// manual prev/next handling, and debounced resize application.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pointer_enter`/`on_pointer_leave` and `on_focus_in`/`on_focus_out`
/// - `on_resize(width, now_ms)` for every raw resize event
/// - `on_transition_end(now?)` when the track animation completes
/// - `tick(now_ms)` each frame/timer tick
///
/// Every returned [`Motion`] is applied by the host to the real track.
/// Missing prev/next controls simply mean the host never calls
/// `prev`/`next`; autoplay and the rest keep working.
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    autoplay: Autoplay,
    resize: Debounce<u32>,
    hovered: bool,
    focused: bool,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            autoplay: Autoplay::default(),
            resize: Debounce::default(),
            hovered: false,
            focused: false,
        }
    }

    pub fn with_autoplay(mut self, autoplay: Autoplay) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_resize_debounce(mut self, resize: Debounce<u32>) -> Self {
        self.resize = resize;
        self
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Whether a pointer or focus is currently holding autoplay off.
    pub fn is_paused(&self) -> bool {
        self.hovered || self.focused
    }

    /// Arms autoplay a full interval from `now_ms` (no-op while inactive).
    pub fn start_autoplay(&mut self, now_ms: u64) {
        if self.carousel.is_active() {
            self.autoplay.arm(now_ms);
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.disarm();
    }

    fn resume_if_unpaused(&mut self, now_ms: u64) {
        if !self.is_paused() {
            self.start_autoplay(now_ms);
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.stop_autoplay();
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        self.hovered = false;
        self.resume_if_unpaused(now_ms);
    }

    pub fn on_focus_in(&mut self) {
        self.focused = true;
        self.stop_autoplay();
    }

    pub fn on_focus_out(&mut self, now_ms: u64) {
        self.focused = false;
        self.resume_if_unpaused(now_ms);
    }

    /// Notes a raw resize event; it settles in `tick` after the quiet window.
    pub fn on_resize(&mut self, width: u32, now_ms: u64) {
        self.resize.note(width, now_ms);
    }

    /// Forwards the host's transition-end signal.
    pub fn on_transition_end(&mut self) -> Option<Motion> {
        self.carousel.complete_transition()
    }

    /// Manual next control: pause, move, then re-arm autoplay so the manual
    /// action does not race the next auto-tick.
    pub fn next(&mut self, now_ms: u64) -> Option<Motion> {
        self.stop_autoplay();
        let motion = self.carousel.advance(now_ms);
        self.start_autoplay(now_ms);
        motion
    }

    /// Manual previous control; see [`Self::next`].
    pub fn prev(&mut self, now_ms: u64) -> Option<Motion> {
        self.stop_autoplay();
        let motion = self.carousel.retreat(now_ms);
        self.start_autoplay(now_ms);
        motion
    }

    /// Advances one step without touching the autoplay deadline.
    ///
    /// Part of the externally invocable debug surface, together with
    /// [`Self::retreat`], [`Self::start_autoplay`], and
    /// [`Self::stop_autoplay`].
    pub fn advance(&mut self, now_ms: u64) -> Option<Motion> {
        self.carousel.advance(now_ms)
    }

    pub fn retreat(&mut self, now_ms: u64) -> Option<Motion> {
        self.carousel.retreat(now_ms)
    }

    /// Advances the controller.
    ///
    /// Settles due resizes, runs the transition safety deadline, and fires
    /// due autoplay advances (which the engine drops if a transition is
    /// still in flight). Returns the motion the host should apply, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<Motion> {
        if let Some(width) = self.resize.settle(now_ms) {
            if let Some(motion) = self.carousel.set_viewport_width(width) {
                return Some(motion);
            }
        }

        if let Some(motion) = self.carousel.update_transition(now_ms) {
            return Some(motion);
        }

        if self.autoplay.fire_due(now_ms) {
            return self.carousel.advance(now_ms);
        }

        None
    }
}
