//! Angle geometry for circular pickers.
//!
//! Angles are in degrees and follow screen coordinates: 0° points along +x and angles grow
//! clockwise because y grows downward. Every angle is passed through [`normalize`] before it
//! is compared or stored, so nothing else has to special-case the 0°/360° seam.

pub const FULL_CIRCLE: f64 = 360.0;
pub const HALF_CIRCLE: f64 = 180.0;

/// Progress span covered by one full revolution of the seek ring.
pub const PROGRESS_PER_REVOLUTION: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at `radius` from `center` in the direction of `angle` degrees.
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        let rad = angle.to_radians();
        Self::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
    }
}

/// Wraps any finite angle into [0, 360). Angles already in range come back unchanged.
///
/// Tiny negative inputs round up to 360 when shifted; those fold to 0.
pub fn normalize(angle: f64) -> f64 {
    match angle % FULL_CIRCLE {
        wrapped if wrapped < 0.0 => {
            let shifted = wrapped + FULL_CIRCLE;
            if shifted >= FULL_CIRCLE { 0.0 } else { shifted }
        }
        // folds -0.0 into 0.0
        wrapped => wrapped + 0.0,
    }
}

/// Clockwise sweep from `start` to `end`. A zero sweep means "no visible arc".
pub fn arc_sweep(start: f64, end: f64) -> f64 {
    normalize(end - start)
}

pub fn arc_center_angle(start: f64, end: f64) -> f64 {
    normalize(start + arc_sweep(start, end) / 2.0)
}

/// Seek ring origin that puts the pointer for `progress` on `center`.
///
/// Progress runs backward from the center: positive values move the origin
/// counter-clockwise so the pointer, drawn at `origin + progress`, lands on the center.
pub fn progress_to_angle(center: f64, progress: f64) -> f64 {
    normalize(center - FULL_CIRCLE * progress / PROGRESS_PER_REVOLUTION)
}

/// Angle where a pointer sits for `progress` measured from a seek ring `origin`.
pub fn pointer_angle(origin: f64, progress: f64) -> f64 {
    normalize(origin + FULL_CIRCLE * progress / PROGRESS_PER_REVOLUTION)
}

/// Unnormalized animation end point: interpolating linearly from `current` to the result
/// travels in the requested direction and never wraps more than one revolution.
pub fn shortest_rotation_target(current: f64, target: f64, prefer_clockwise: bool) -> f64 {
    if prefer_clockwise {
        current + normalize(target - current)
    } else {
        current - normalize(current - target)
    }
}

/// Shortest signed rotation from `from` to `to`, in (-180, 180].
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let delta = normalize(to - from);
    if delta > HALF_CIRCLE {
        delta - FULL_CIRCLE
    } else {
        delta
    }
}

/// Smallest of the clockwise and counter-clockwise distances between two angles.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let cw = normalize(a - b);
    cw.min(FULL_CIRCLE - cw)
}

/// Polar angle of a point already expressed relative to the circle center.
/// The zero vector has no direction and maps to 0.
pub fn point_to_angle(x: f64, y: f64) -> f64 {
    if (x == 0.0 && y == 0.0) || !x.is_finite() || !y.is_finite() {
        return 0.0;
    }
    normalize(y.atan2(x).to_degrees())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
    full: bool,
}

impl ArcSpan {
    /// Span whose sweep is `normalize(end - start)`, even when the bounds are a whole turn
    /// or more apart.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            full: false,
        }
    }

    /// Explicit full revolution starting at `start`.
    pub fn full(start: f64) -> Self {
        Self {
            start,
            end: start + FULL_CIRCLE,
            full: true,
        }
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn sweep(&self) -> f64 {
        if self.is_full() {
            FULL_CIRCLE
        } else {
            arc_sweep(self.start, self.end)
        }
    }

    pub fn center(&self) -> f64 {
        if self.is_full() {
            normalize(self.start + HALF_CIRCLE)
        } else {
            arc_center_angle(self.start, self.end)
        }
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angular_distance(angle, self.center()) <= self.sweep() / 2.0
    }
}

/// Bounding rectangle of a ring, described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Circle {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    pub fn with_radius(center: Point, radius: f64) -> Self {
        Self::new(center, radius * 2.0, radius * 2.0)
    }

    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Accepts a touch when it lies on the ring band (widened to the touch target) and inside
/// the angular wedge of `span`.
pub fn hit_test(
    touch_angle: f64,
    touch_radius: f64,
    span: &ArcSpan,
    circle: &Circle,
    stroke_width: f64,
    min_touch_target_px: f64,
) -> bool {
    let half_thickness = stroke_width.max(min_touch_target_px) / 2.0;
    let (hw, hh) = (circle.half_width(), circle.half_height());
    let inner_radius = hw.min(hh) - half_thickness;
    let outer_radius = hw.max(hh) + half_thickness;

    (inner_radius..=outer_radius).contains(&touch_radius) && span.contains_angle(touch_angle)
}

/// Splits `[start, end]` into `item_count` contiguous spans of equal sweep.
///
/// A collapsed range (zero sweep) is read as the full circle here and only here.
///
/// # Panics
///
/// Panics when `item_count` is zero; callers guard against empty layouts.
pub fn partition_circle(start: f64, end: f64, item_count: usize) -> Vec<ArcSpan> {
    assert_ne!(item_count, 0, "cannot partition an arc into zero items");

    let range = match arc_sweep(start, end) {
        sweep if sweep == 0.0 => FULL_CIRCLE,
        sweep => sweep,
    };
    let item_angle = range / item_count as f64;

    (0..item_count)
        .map(|i| {
            let item_start = start + item_angle * i as f64;
            if item_angle >= FULL_CIRCLE {
                ArcSpan::full(item_start)
            } else {
                ArcSpan::new(item_start, item_start + item_angle)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_close(normalize(0.0), 0.0);
        assert_close(normalize(360.0), 0.0);
        assert_close(normalize(-90.0), 270.0);
        assert_close(normalize(725.0), 5.0);
        assert_close(normalize(-1e-20), 0.0);
        assert_close(normalize(-0.0), 0.0);
    }

    #[test]
    fn arc_sweep_is_clockwise() {
        assert_close(arc_sweep(10.0, 10.0), 0.0);
        assert_close(arc_sweep(90.0, 270.0), 180.0);
        assert_close(arc_sweep(270.0, 90.0), 180.0);
        assert_close(arc_sweep(350.0, 20.0), 30.0);
        assert_close(arc_sweep(20.0, 350.0), 330.0);
    }

    #[test]
    fn arc_center_handles_wraparound() {
        assert_close(arc_center_angle(0.0, 30.0), 15.0);
        assert_close(arc_center_angle(350.0, 20.0), 5.0);
        assert_close(arc_center_angle(255.0, 285.0), 270.0);
    }

    #[test]
    fn progress_runs_backward_from_center() {
        assert_close(progress_to_angle(180.0, 0.0), 180.0);
        assert_close(progress_to_angle(180.0, 100.0), 180.0);
        assert_close(progress_to_angle(0.0, 50.0), 180.0);
        assert_close(progress_to_angle(90.0, 25.0), 0.0);
        assert_close(progress_to_angle(90.0, -25.0), 180.0);
    }

    #[test]
    fn pointer_lands_on_center_at_rest() {
        for progress in [-100.0, -37.5, 0.0, 12.0, 99.0] {
            let origin = progress_to_angle(42.0, progress);
            let pointer = pointer_angle(origin, progress);
            assert!(angular_distance(pointer, 42.0) < EPS);
        }
    }

    #[test]
    fn rotation_takes_short_path_counter_clockwise() {
        assert_close(shortest_rotation_target(10.0, 350.0, false), -10.0);
    }

    #[test]
    fn rotation_takes_short_path_clockwise() {
        assert_close(shortest_rotation_target(350.0, 10.0, true), 370.0);
        assert_close(shortest_rotation_target(10.0, 40.0, true), 40.0);
    }

    #[test]
    fn rotation_to_same_angle_stays_put() {
        assert_close(shortest_rotation_target(123.0, 123.0, true), 123.0);
        assert_close(shortest_rotation_target(123.0, 123.0, false), 123.0);
    }

    #[test]
    fn signed_delta_crosses_seam() {
        assert_close(signed_delta(350.0, 10.0), 20.0);
        assert_close(signed_delta(10.0, 350.0), -20.0);
        assert_close(signed_delta(0.0, 180.0), 180.0);
    }

    #[test]
    fn point_to_angle_quadrants() {
        assert_close(point_to_angle(1.0, 0.0), 0.0);
        assert_close(point_to_angle(0.0, 1.0), 90.0);
        assert_close(point_to_angle(-1.0, 0.0), 180.0);
        assert_close(point_to_angle(0.0, -1.0), 270.0);
    }

    #[test]
    fn point_to_angle_degenerate_is_zero() {
        assert_eq!(point_to_angle(0.0, 0.0), 0.0);
        assert_eq!(point_to_angle(-0.0, -0.0), 0.0);
        assert_eq!(point_to_angle(f64::NAN, 1.0), 0.0);
    }

    #[test]
    fn hit_test_accepts_and_rejects() {
        let span = ArcSpan::new(-15.0, 15.0);
        let circle = Circle::with_radius(Point::default(), 100.0);

        assert!(hit_test(0.0, 100.0, &span, &circle, 48.0, 48.0));
        assert!(!hit_test(20.0, 100.0, &span, &circle, 48.0, 48.0));
        assert!(!hit_test(0.0, 200.0, &span, &circle, 48.0, 48.0));
    }

    #[test]
    fn hit_test_band_uses_larger_of_stroke_and_target() {
        let span = ArcSpan::new(-15.0, 15.0);
        let circle = Circle::with_radius(Point::default(), 100.0);

        // stroke 10, target 48 => band [76, 124]
        assert!(hit_test(0.0, 77.0, &span, &circle, 10.0, 48.0));
        assert!(!hit_test(0.0, 75.0, &span, &circle, 10.0, 48.0));
        // stroke 80 => band [60, 140]
        assert!(hit_test(0.0, 139.0, &span, &circle, 80.0, 48.0));
    }

    #[test]
    fn hit_test_wedge_across_seam() {
        let span = ArcSpan::new(350.0, 20.0);
        let circle = Circle::with_radius(Point::default(), 100.0);

        assert!(hit_test(355.0, 100.0, &span, &circle, 48.0, 48.0));
        assert!(hit_test(19.0, 100.0, &span, &circle, 48.0, 48.0));
        assert!(!hit_test(340.0, 100.0, &span, &circle, 48.0, 48.0));
    }

    #[test]
    fn partition_full_circle_into_thirds() {
        let spans = partition_circle(0.0, 360.0, 3);

        assert_eq!(spans.len(), 3);
        for span in &spans {
            assert_close(span.sweep(), 120.0);
        }
        for pair in spans.windows(2) {
            assert_close(pair[0].end, pair[1].start);
        }
        assert_close(spans.iter().map(ArcSpan::sweep).sum(), 360.0);
        assert_close(normalize(spans[2].end), normalize(spans[0].start));
    }

    #[test]
    fn partition_half_circle() {
        let spans = partition_circle(90.0, 270.0, 2);

        assert_eq!(spans[0], ArcSpan::new(90.0, 180.0));
        assert_eq!(spans[1], ArcSpan::new(180.0, 270.0));
    }

    #[test]
    fn partition_single_item_gets_explicit_full_circle() {
        let spans = partition_circle(90.0, 90.0, 1);

        assert!(spans[0].is_full());
        assert_close(spans[0].sweep(), 360.0);
        assert_close(spans[0].center(), 270.0);
    }

    #[test]
    fn wide_bounds_do_not_make_a_full_span() {
        let span = ArcSpan::new(10.0, 400.0);

        assert!(!span.is_full());
        assert_close(span.sweep(), 30.0);
        assert_close(span.center(), 25.0);
        assert_close(ArcSpan::full(10.0).sweep(), 360.0);
    }

    #[test]
    #[should_panic(expected = "zero items")]
    fn partition_zero_items_panics() {
        partition_circle(0.0, 360.0, 0);
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(x in -1e6f64..1e6) {
            let n = normalize(x);
            prop_assert!((0.0..FULL_CIRCLE).contains(&n));
        }

        #[test]
        fn prop_normalize_idempotent(x in -1e6f64..1e6) {
            prop_assert_eq!(normalize(normalize(x)), normalize(x));
        }

        #[test]
        fn prop_normalize_periodic(x in -1e4f64..1e4, k in -50i32..50) {
            let shifted = normalize(x + FULL_CIRCLE * f64::from(k));
            prop_assert!(angular_distance(shifted, normalize(x)) < 1e-6);
        }

        #[test]
        fn prop_arc_sweep_in_range(a in -1e4f64..1e4, b in -1e4f64..1e4) {
            prop_assert!((0.0..FULL_CIRCLE).contains(&arc_sweep(a, b)));
            prop_assert_eq!(arc_sweep(a, a), 0.0);
        }

        #[test]
        fn prop_rotation_never_exceeds_one_turn(
            current in 0.0f64..360.0,
            target in 0.0f64..360.0,
            cw in any::<bool>(),
        ) {
            let result = shortest_rotation_target(current, target, cw);
            prop_assert!((result - current).abs() < FULL_CIRCLE);
            prop_assert!(angular_distance(normalize(result), target) < 1e-6);
            if cw {
                prop_assert!(result >= current);
            } else {
                prop_assert!(result <= current);
            }
        }

        #[test]
        fn prop_point_angle_round_trip(a in -720.0f64..720.0, r in 0.5f64..500.0) {
            let p = Point::on_circle(Point::default(), r, a);
            prop_assert!(angular_distance(point_to_angle(p.x, p.y), normalize(a)) < 1e-6);
        }

        #[test]
        fn prop_partition_covers_range(start in -360.0f64..360.0, end in -360.0f64..360.0, n in 1usize..12) {
            let spans = partition_circle(start, end, n);
            let expected = match arc_sweep(start, end) {
                s if s == 0.0 => FULL_CIRCLE,
                s => s,
            };
            let total: f64 = spans.iter().map(|s| s.end - s.start).sum();
            prop_assert_eq!(spans.len(), n);
            prop_assert!((total - expected).abs() < 1e-6);
            prop_assert!((spans[0].start - start).abs() < 1e-9);
        }
    }
}
