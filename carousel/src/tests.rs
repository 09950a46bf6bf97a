use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }
}

const ITEM_WIDTH: u32 = 104;
const STRIDE: u64 = (ITEM_WIDTH + 16) as u64; // default gap fallback

fn opts(count: usize) -> CarouselOptions {
    CarouselOptions::new(count, || ItemMetrics::new(ITEM_WIDTH))
}

fn wide(count: usize) -> Carousel {
    Carousel::new(opts(count).with_initial_width(Some(1200)))
}

/// Reads the trailing-clone block the way the layout defines it: the last
/// `visible` entries of the periodically extended item sequence, in order.
fn expected_trailing_items(count: usize, visible: usize) -> Vec<usize> {
    (1..=visible)
        .rev()
        .map(|k| {
            let n = count as i64;
            (n - k as i64).rem_euclid(n) as usize
        })
        .collect()
}

fn expected_leading_items(count: usize, visible: usize) -> Vec<usize> {
    (0..visible).map(|j| j % count).collect()
}

#[test]
fn clone_blocks_surround_real_items() {
    // The worked example: 6 real items at the widest breakpoint.
    let c = wide(6);
    assert_eq!(c.visible_count(), 4);
    assert_eq!(c.rendered_len(), 14);
    assert_eq!(c.position(), 0);
    assert_eq!(c.offset(), 4 * STRIDE);

    let slots = c.slots();
    assert!(slots[..4].iter().all(|s| s.kind == SlotKind::TrailingClone));
    assert!(slots[4..10].iter().all(|s| s.kind == SlotKind::Real));
    assert!(slots[10..].iter().all(|s| s.kind == SlotKind::LeadingClone));

    let trailing: Vec<usize> = slots[..4].iter().map(|s| s.item).collect();
    assert_eq!(trailing, [2, 3, 4, 5]);
    let real: Vec<usize> = slots[4..10].iter().map(|s| s.item).collect();
    assert_eq!(real, [0, 1, 2, 3, 4, 5]);
    let leading: Vec<usize> = slots[10..].iter().map(|s| s.item).collect();
    assert_eq!(leading, [0, 1, 2, 3]);
}

#[test]
fn clone_blocks_hold_for_all_counts_and_breakpoints() {
    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let count = rng.gen_range_usize(1, 13);
        let (width, visible) = [(320u32, 1usize), (700, 2), (1200, 4)]
            [rng.gen_range_usize(0, 3)];
        let c = Carousel::new(opts(count).with_initial_width(Some(width)));

        assert_eq!(c.visible_count(), visible);
        assert_eq!(c.rendered_len(), count + 2 * visible);

        let slots = c.slots();
        let trailing: Vec<usize> = slots[..visible].iter().map(|s| s.item).collect();
        assert_eq!(trailing, expected_trailing_items(count, visible));
        assert!(
            slots[..visible]
                .iter()
                .all(|s| s.kind == SlotKind::TrailingClone)
        );

        let real: Vec<usize> = slots[visible..visible + count]
            .iter()
            .map(|s| s.item)
            .collect();
        assert_eq!(real, (0..count).collect::<Vec<_>>());
        assert!(
            slots[visible..visible + count]
                .iter()
                .all(|s| s.kind == SlotKind::Real)
        );

        let leading: Vec<usize> = slots[visible + count..].iter().map(|s| s.item).collect();
        assert_eq!(leading, expected_leading_items(count, visible));
        assert!(
            slots[visible + count..]
                .iter()
                .all(|s| s.kind == SlotKind::LeadingClone && s.is_clone())
        );
    }
}

#[test]
fn breakpoints_map_width_edges() {
    let bp = Breakpoints::default();
    assert_eq!(bp.visible_for_width(0), 1);
    assert_eq!(bp.visible_for_width(480), 1);
    assert_eq!(bp.visible_for_width(481), 2);
    assert_eq!(bp.visible_for_width(900), 2);
    assert_eq!(bp.visible_for_width(901), 4);
}

#[test]
fn navigation_commits_in_range_targets() {
    let mut c = wide(6);
    let motion = c.go_to(3, 0).unwrap();
    assert!(motion.animate);
    assert_eq!(motion.offset, (3 + 4) * STRIDE);
    assert!(c.is_transitioning());
    assert_eq!(c.transition_target(), Some(3));

    // In-range completion needs no reposition.
    assert_eq!(c.complete_transition(), None);
    assert!(!c.is_transitioning());
    assert_eq!(c.position(), 3);
    assert_eq!(c.offset(), (3 + 4) * STRIDE);
}

#[test]
fn second_navigation_during_flight_is_dropped() {
    let mut c = wide(6);
    assert!(c.advance(0).is_some());
    assert!(c.advance(0).is_none());
    assert!(c.retreat(0).is_none());
    assert!(c.go_to(5, 0).is_none());
    assert_eq!(c.position(), 0);
    assert_eq!(c.transition_target(), Some(1));

    // Only the original transition's completion governs the position.
    c.complete_transition();
    assert_eq!(c.position(), 1);
}

#[test]
fn advancing_past_the_end_wraps_to_first() {
    let mut c = wide(6);
    c.go_to(5, 0);
    c.complete_transition();
    assert_eq!(c.position(), 5);

    let motion = c.advance(0).unwrap();
    assert!(motion.animate);
    assert_eq!(motion.offset, (6 + 4) * STRIDE); // into leading-clone territory

    let snap = c.complete_transition().unwrap();
    assert!(!snap.animate);
    assert_eq!(c.position(), 0);
    // The true position-0 offset from the formula, not whatever the clone showed.
    assert_eq!(snap.offset, 4 * STRIDE);
    assert_eq!(c.offset(), snap.offset);
}

#[test]
fn retreating_before_the_start_wraps_to_last() {
    let mut c = wide(6);
    let motion = c.retreat(0).unwrap();
    assert_eq!(motion.offset, 3 * STRIDE); // (-1 + 4) * stride

    let snap = c.complete_transition().unwrap();
    assert!(!snap.animate);
    assert_eq!(c.position(), 5);
    assert_eq!(snap.offset, (5 + 4) * STRIDE);
}

#[test]
fn safety_deadline_forces_missed_completion() {
    let mut c = wide(6);
    c.advance(1_000);
    assert_eq!(c.update_transition(1_899), None);
    assert!(c.is_transitioning());

    let _ = c.update_transition(1_900);
    assert!(!c.is_transitioning());
    assert_eq!(c.position(), 1);

    // Single resolution: the stale deadline cannot fire again.
    assert_eq!(c.update_transition(10_000), None);
    assert_eq!(c.position(), 1);
}

#[test]
fn completion_signal_disarms_the_deadline() {
    let mut c = wide(6);
    c.advance(0);
    c.complete_transition();
    assert_eq!(c.position(), 1);
    assert_eq!(c.update_transition(900), None);
    assert_eq!(c.position(), 1);
}

#[test]
fn resize_rebuilds_clones_only_on_visible_change() {
    let mut c = wide(6);
    assert_eq!(c.rendered_len(), 14);

    let motion = c.set_viewport_width(800).unwrap();
    assert!(!motion.animate);
    assert_eq!(c.visible_count(), 2);
    assert_eq!(c.rendered_len(), 10);
    assert_eq!(c.position(), 0);

    // Same settled width again: same clone set, same position, no drift.
    let before: Vec<Slot> = c.slots().to_vec();
    let again = c.set_viewport_width(800).unwrap();
    assert_eq!(c.slots(), &before[..]);
    assert_eq!(c.position(), 0);
    assert_eq!(again, motion);
}

#[test]
fn resize_repositions_without_resetting_position() {
    let mut c = wide(6);
    c.go_to(2, 0);
    c.complete_transition();
    assert_eq!(c.position(), 2);

    let motion = c.set_viewport_width(400).unwrap();
    assert_eq!(c.visible_count(), 1);
    assert_eq!(c.position(), 2);
    assert_eq!(motion.offset, (2 + 1) * STRIDE);
    assert!(!motion.animate);
}

#[test]
fn resize_supersedes_an_in_flight_transition() {
    let mut c = wide(6);
    c.advance(0);
    assert!(c.is_transitioning());

    c.set_viewport_width(800);
    assert!(!c.is_transitioning());
    assert_eq!(c.complete_transition(), None);
    assert_eq!(c.position(), 0);
}

#[test]
fn stride_is_measured_fresh_on_every_navigation_and_resize() {
    let calls = Arc::new(AtomicUsize::new(0));
    let width = Arc::new(AtomicU32::new(100));
    let (calls2, width2) = (Arc::clone(&calls), Arc::clone(&width));
    let mut c = Carousel::new(
        CarouselOptions::new(6, move || {
            calls2.fetch_add(1, Ordering::SeqCst);
            ItemMetrics::with_gap(width2.load(Ordering::SeqCst), 10)
        })
        .with_initial_width(Some(1200)),
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1); // initial placement
    assert_eq!(c.stride(), 110);

    // Layout shifts under the track; the next navigation sees it.
    width.store(200, Ordering::SeqCst);
    let motion = c.advance(0).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(c.stride(), 210);
    assert_eq!(motion.offset, (1 + 4) * 210);

    c.complete_transition();
    width.store(50, Ordering::SeqCst);
    c.set_viewport_width(1100);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(c.stride(), 60);
}

#[test]
fn gap_fallback_applies_when_layout_declares_none() {
    let c = Carousel::new(
        CarouselOptions::new(3, || ItemMetrics::new(100)).with_initial_width(Some(1200)),
    );
    assert_eq!(c.stride(), 116);

    let c = Carousel::new(
        CarouselOptions::new(3, || ItemMetrics::with_gap(100, 24)).with_initial_width(Some(1200)),
    );
    assert_eq!(c.stride(), 124);
}

#[test]
fn reduced_motion_never_activates() {
    let mut c = Carousel::new(
        opts(6)
            .with_initial_width(Some(1200))
            .with_reduced_motion(true),
    );
    assert!(!c.is_active());
    assert_eq!(c.rendered_len(), 0);
    assert_eq!(c.offset(), 0);
    assert!(c.advance(0).is_none());
    assert!(c.set_viewport_width(800).is_none());
    assert!(c.reposition().is_none());
}

#[test]
fn empty_track_never_activates() {
    let mut c = Carousel::new(opts(0).with_initial_width(Some(1200)));
    assert!(!c.is_active());
    assert_eq!(c.rendered_len(), 0);
    assert!(c.advance(0).is_none());

    // Items showing up later activate the engine from scratch.
    c.set_count(6);
    assert!(c.is_active());
    assert_eq!(c.position(), 0);
    assert_eq!(c.rendered_len(), 14);
}

#[test]
fn set_count_clamps_the_position() {
    let mut c = wide(6);
    c.go_to(5, 0);
    c.complete_transition();

    c.set_count(3);
    assert_eq!(c.position(), 2);
    assert_eq!(c.rendered_len(), 3 + 2 * 4);

    c.set_count(0);
    assert!(!c.is_active());
    assert_eq!(c.rendered_len(), 0);
}

#[test]
fn disabling_clears_track_state() {
    let mut c = wide(6);
    c.advance(0);
    c.set_enabled(false);
    assert!(!c.is_transitioning());
    assert_eq!(c.rendered_len(), 0);

    c.set_enabled(true);
    assert_eq!(c.position(), 0);
    assert_eq!(c.rendered_len(), 14);
}

#[test]
fn on_change_reports_transition_state() {
    let seen = Arc::new(AtomicUsize::new(0));
    let in_flight = Arc::new(AtomicUsize::new(0));
    let (seen2, in_flight2) = (Arc::clone(&seen), Arc::clone(&in_flight));
    let mut c = Carousel::new(opts(6).with_initial_width(Some(1200)).with_on_change(Some(
        move |_c: &Carousel, transitioning: bool| {
            seen2.fetch_add(1, Ordering::SeqCst);
            if transitioning {
                in_flight2.fetch_add(1, Ordering::SeqCst);
            }
        },
    )));

    c.advance(0);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert_eq!(in_flight.load(Ordering::SeqCst), 1);

    c.complete_transition();
    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(in_flight.load(Ordering::SeqCst), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = Arc::clone(&seen);
    let mut c = Carousel::new(opts(6).with_initial_width(Some(1200)).with_on_change(Some(
        move |_c: &Carousel, _| {
            seen2.fetch_add(1, Ordering::SeqCst);
        },
    )));

    c.batch_update(|c| {
        c.set_viewport_width(800);
        c.set_gap_fallback(8);
        c.set_transition_fallback_ms(1_200);
    });
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn update_options_rebuilds_only_when_layout_inputs_change() {
    let mut c = wide(6);
    let before: Vec<Slot> = c.slots().to_vec();

    c.update_options(|o| o.transition_fallback_ms = 1_500);
    assert_eq!(c.slots(), &before[..]);

    c.update_options(|o| o.count = 4);
    assert_eq!(c.rendered_len(), 4 + 2 * 4);
}

#[test]
fn custom_breakpoints_take_effect_immediately() {
    let mut c = Carousel::new(
        CarouselOptions::with_fixed_metrics(6, ItemMetrics::with_gap(100, 20))
            .with_initial_width(Some(1200)),
    );
    assert_eq!(c.visible_count(), 4);
    assert_eq!(c.stride(), 120);

    c.set_breakpoints(Breakpoints {
        narrow_max_width: 600,
        medium_max_width: 1400,
        narrow: 1,
        medium: 3,
        wide: 5,
    });
    assert_eq!(c.visible_count(), 3);
    assert_eq!(c.rendered_len(), 6 + 2 * 3);
    assert_eq!(c.position(), 0);
}

#[test]
fn target_offset_tracks_the_flight() {
    let mut c = wide(6);
    assert_eq!(c.target_offset(), None);

    c.advance(0);
    assert_eq!(c.target_offset(), Some((1 + 4) * STRIDE));

    c.complete_transition();
    assert_eq!(c.target_offset(), None);
}

#[test]
fn on_change_can_be_attached_later() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = Arc::clone(&seen);
    let mut c = wide(6);
    c.advance(0);
    assert_eq!(seen.load(Ordering::SeqCst), 0);

    c.set_on_change(Some(move |_c: &Carousel, _| {
        seen2.fetch_add(1, Ordering::SeqCst);
    }));
    c.complete_transition();
    assert_eq!(seen.load(Ordering::SeqCst), 2); // attach notifies, then completion
}

#[test]
fn state_snapshot_roundtrips() {
    let mut c = wide(6);
    c.set_viewport_width(800);
    c.go_to(3, 0);
    c.complete_transition();

    let state = c.state();
    assert_eq!(
        state,
        CarouselState {
            viewport_width: 800,
            position: 3
        }
    );

    let mut restored = wide(6);
    let motion = restored.restore_state(state).unwrap();
    assert_eq!(restored.position(), 3);
    assert_eq!(restored.visible_count(), 2);
    assert_eq!(restored.offset(), c.offset());
    assert!(!motion.animate);
}

#[test]
fn restore_clamps_position_to_count() {
    let state = CarouselState {
        viewport_width: 1200,
        position: 10,
    };
    let mut c = wide(4);
    c.restore_state(state);
    assert_eq!(c.position(), 3);
}

#[test]
fn for_each_slot_matches_collect() {
    let c = wide(5);
    let mut via_for_each = Vec::new();
    c.for_each_slot(|s| via_for_each.push(s));
    let mut via_collect = Vec::new();
    c.collect_slots(&mut via_collect);
    assert_eq!(via_for_each, via_collect);
    assert_eq!(via_for_each.len(), 13);
}
