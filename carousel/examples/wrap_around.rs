// Example: drive a full loop through the track and watch the wrap resets.
use carousel::{Carousel, CarouselOptions, ItemMetrics};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(6, || ItemMetrics::with_gap(180, 16)).with_initial_width(Some(1200)),
    );

    println!(
        "visible={} rendered={} offset={}",
        c.visible_count(),
        c.rendered_len(),
        c.offset()
    );

    let mut now_ms = 0u64;
    for step in 0..8 {
        now_ms += 1_000;
        let Some(motion) = c.advance(now_ms) else {
            continue;
        };
        println!(
            "step {step}: animate to {} (target {:?})",
            motion.offset,
            c.transition_target()
        );

        // The host's transition-end signal arrives a little later.
        now_ms += 400;
        if let Some(snap) = c.complete_transition() {
            println!("step {step}: wrap — snap to {} without animation", snap.offset);
        }
        println!("step {step}: settled at position {}", c.position());
    }
}
