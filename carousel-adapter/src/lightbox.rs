/// Keyboard input the lightbox responds to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightboxKey {
    Escape,
    ArrowRight,
    ArrowLeft,
}

/// Headless state for the gallery lightbox.
///
/// At most one image is open at a time; next/prev wrap modulo the gallery
/// length. Out-of-range opens are ignored, and keys only act while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lightbox {
    count: usize,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: None,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the gallery length, closing when the open image is gone.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if matches!(self.current, Some(i) if i >= count) {
            self.current = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index of the open image, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Opens the image at `index`; out-of-range requests are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.current = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Steps to the next image, wrapping past the end. No-op while closed.
    pub fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let next = (current + 1) % self.count;
        self.current = Some(next);
        Some(next)
    }

    /// Steps to the previous image, wrapping before the start.
    pub fn prev(&mut self) -> Option<usize> {
        let current = self.current?;
        let prev = (current + self.count - 1) % self.count;
        self.current = Some(prev);
        Some(prev)
    }

    /// Handles a key press; returns whether the lightbox consumed it.
    pub fn on_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => {
                self.next();
            }
            LightboxKey::ArrowLeft => {
                self.prev();
            }
        }
        true
    }
}
