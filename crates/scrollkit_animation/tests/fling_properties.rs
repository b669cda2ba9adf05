//! Property checks for fling trajectories

use proptest::prelude::*;
use scrollkit_animation::{FlingConfig, FlingSimulator, Velocity};
use scrollkit_core::geometry::{ContentBounds, Point};

fn bounds(max_x: i32, max_y: i32) -> ContentBounds {
    ContentBounds::new(Point::ZERO, Point::new(max_x, max_y))
}

proptest! {
    #[test]
    fn trajectory_stays_within_bounds(
        start_x in 0i32..2_000,
        start_y in 0i32..5_000,
        vx in -8_000f32..8_000.0,
        vy in -8_000f32..8_000.0,
        max_x in 0i32..2_000,
        max_y in 0i32..5_000,
    ) {
        let bounds = bounds(max_x, max_y);
        let start = bounds.clamp(Point::new(start_x, start_y));
        let sim = FlingSimulator::new(FlingConfig::default());
        let mut fling = sim.start(start, Velocity::new(vx, vy), bounds, 0);
        prop_assert!(bounds.contains(fling.final_offset()));

        let mut now = 0;
        while !fling.is_finished() {
            now += 16;
            let step = fling.step(now);
            prop_assert!(bounds.contains(step.offset));
            prop_assert!(now <= fling.duration_ms() + 16);
        }
        prop_assert_eq!(fling.current_offset(), fling.final_offset());
    }

    #[test]
    fn distance_grows_with_speed(a in 1f32..8_000.0, b in 1f32..8_000.0) {
        let sim = FlingSimulator::new(FlingConfig::default());
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sim.fling_distance(slow) <= sim.fling_distance(fast));
        prop_assert!(sim.fling_duration_ms(slow) <= sim.fling_duration_ms(fast));
    }

    #[test]
    fn motion_follows_velocity_sign(vy in 200f32..8_000.0, negate in any::<bool>()) {
        let vy = if negate { -vy } else { vy };
        let start = Point::new(0, 2_500);
        let sim = FlingSimulator::new(FlingConfig::default());
        let fling = sim.start(start, Velocity::new(0.0, vy), bounds(0, 5_000), 0);
        let end = fling.final_offset();
        if vy > 0.0 {
            prop_assert!(end.y >= start.y);
        } else {
            prop_assert!(end.y <= start.y);
        }
        prop_assert_eq!(end.x, 0);
    }
}
