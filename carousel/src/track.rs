use alloc::vec::Vec;

use crate::{Slot, SlotKind};

/// Builds the rendered slot sequence for `count` real items and `visible`
/// simultaneously shown items.
///
/// Layout: `[trailing clones × visible][real × count][leading clones × visible]`.
/// Trailing clones duplicate the last `visible` items with their natural
/// order preserved; leading clones duplicate the first `visible` items.
/// When `visible > count` the clone blocks wrap cyclically around the real
/// sequence, so the rendered length is `count + 2 * visible` for every
/// `count >= 1`.
pub(crate) fn build_slots(count: usize, visible: usize) -> Vec<Slot> {
    let mut slots = Vec::new();
    if count == 0 {
        return slots;
    }
    slots.reserve_exact(count + 2 * visible);

    let n = count as i64;
    for j in 0..visible {
        let item = (n - visible as i64 + j as i64).rem_euclid(n) as usize;
        slots.push(Slot {
            item,
            kind: SlotKind::TrailingClone,
        });
    }
    for item in 0..count {
        slots.push(Slot {
            item,
            kind: SlotKind::Real,
        });
    }
    for j in 0..visible {
        slots.push(Slot {
            item: j % count,
            kind: SlotKind::LeadingClone,
        });
    }
    slots
}

/// Leftward track translation for a (possibly transient, out-of-range)
/// target index.
///
/// The real items begin after the trailing-clone block, so the offset is
/// `(target + visible) * stride`. Targets below `-visible` would point
/// before the rendered track; they clamp to zero.
pub(crate) fn offset_for(target: i64, visible: usize, stride: u32) -> u64 {
    let slots_before = target.saturating_add(visible as i64);
    if slots_before <= 0 {
        return 0;
    }
    (slots_before as u64).saturating_mul(stride as u64)
}
