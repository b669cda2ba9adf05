//! Property checks for the scroll-limit clamp

use proptest::prelude::*;
use scrollkit_core::geometry::{clamp_axis, ContentBounds, Point};

proptest! {
    #[test]
    fn clamp_is_idempotent(value in -100_000i32..100_000, min in -5_000i32..5_000, max in -5_000i32..50_000) {
        let once = clamp_axis(value, min, max);
        prop_assert_eq!(clamp_axis(once, min, max), once);
    }

    #[test]
    fn clamp_stays_in_range_when_range_is_valid(value in -100_000i32..100_000, min in 0i32..1_000, span in 0i32..50_000) {
        let max = min + span;
        let clamped = clamp_axis(value, min, max);
        prop_assert!(min <= clamped && clamped <= max);
    }

    #[test]
    fn bounds_clamp_is_idempotent(x in -10_000i32..10_000, y in -10_000i32..10_000, max_x in 0i32..5_000, max_y in 0i32..5_000) {
        let bounds = ContentBounds::new(Point::ZERO, Point::new(max_x, max_y));
        let once = bounds.clamp(Point::new(x, y));
        prop_assert_eq!(bounds.clamp(once), once);
        prop_assert!(bounds.contains(once));
    }
}
