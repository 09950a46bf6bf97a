// Example: breakpoint-driven clone rebuilds across viewport widths.
use carousel::{Carousel, CarouselOptions, ItemMetrics, SlotKind};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new(5, || ItemMetrics::new(200)).with_initial_width(Some(1280)),
    );

    for width in [1280u32, 900, 800, 480, 320, 1024] {
        let motion = c.set_viewport_width(width);
        let clones = c
            .slots()
            .iter()
            .filter(|s| s.kind != SlotKind::Real)
            .count();
        println!(
            "width={width}: visible={} rendered={} clones={clones} reposition={:?}",
            c.visible_count(),
            c.rendered_len(),
            motion.map(|m| m.offset)
        );
    }
}
