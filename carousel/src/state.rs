/// A lightweight, serializable snapshot of the engine's restorable state.
///
/// Visible count, slots, and stride are all derived, so the snapshot only
/// carries the viewport width and the settled position. In-flight
/// transitions are deliberately not captured; a restored carousel starts
/// settled. With `feature = "serde"`, this type implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub viewport_width: u32,
    pub position: usize,
}
