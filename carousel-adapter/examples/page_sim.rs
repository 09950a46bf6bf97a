// Example: a simulated page driving the controller at 60fps — autoplay,
// a hover pause, a manual click, and a resize burst.
use carousel::{CarouselOptions, ItemMetrics};
use carousel_adapter::Controller;

fn main() {
    let mut c = Controller::new(
        CarouselOptions::new(6, || ItemMetrics::with_gap(180, 16)).with_initial_width(Some(1200)),
    );
    c.start_autoplay(0);

    let mut now_ms = 0u64;
    while now_ms < 18_000 {
        now_ms += 16;

        // Hover over the carousel between 6s and 9s.
        if (6_000..6_000 + 16).contains(&now_ms) {
            println!("t={now_ms}ms pointer enters, autoplay pauses");
            c.on_pointer_enter();
        }
        if (9_000..9_000 + 16).contains(&now_ms) {
            println!("t={now_ms}ms pointer leaves, fresh interval");
            c.on_pointer_leave(now_ms);
        }

        // A manual click on the prev control at 10s.
        if (10_000..10_000 + 16).contains(&now_ms) {
            if let Some(motion) = c.prev(now_ms) {
                println!("t={now_ms}ms manual prev, animate to {}", motion.offset);
            }
        }

        // A resize burst around 12s; only the last width settles.
        if (12_000..12_000 + 16).contains(&now_ms) {
            c.on_resize(1024, now_ms);
            c.on_resize(820, now_ms + 4);
        }

        if let Some(motion) = c.tick(now_ms) {
            let how = if motion.animate { "animate" } else { "snap" };
            println!(
                "t={now_ms}ms {how} to {} (position {}, visible {})",
                motion.offset,
                c.carousel().position(),
                c.carousel().visible_count()
            );
        }

        // The "browser" delivers transition-end 400ms after each move.
        if c.carousel().is_transitioning() {
            let started = now_ms;
            // Simulate the animation running while time advances.
            while now_ms < started + 400 {
                now_ms += 16;
            }
            if let Some(snap) = c.on_transition_end() {
                println!("t={now_ms}ms wrap snap to {}", snap.offset);
            }
            println!("t={now_ms}ms settled at position {}", c.carousel().position());
        }
    }
}
