//! Pure transforms over ordered 2D point sequences.
//!
//! Every function returns a new sequence and leaves its input untouched.
use super::{Point2, Rotation2, Vector2};

/// Rotates every point about the origin by `angle` radians (counter-clockwise positive).
#[must_use]
pub fn rotate(points: &[Point2], angle: f64) -> Vec<Point2> {
    let rotation = Rotation2::new(angle);
    points.iter().map(|p| rotation * p).collect()
}

/// Reflects every point across the y-axis (negates x).
#[must_use]
pub fn reflect_across_y_axis(points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(-p.x, p.y)).collect()
}

/// Reflects every point across the x-axis (negates y).
#[must_use]
pub fn reflect_across_x_axis(points: &[Point2]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(p.x, -p.y)).collect()
}

/// Returns the points in reverse order.
#[must_use]
pub fn reversed(points: &[Point2]) -> Vec<Point2> {
    points.iter().rev().copied().collect()
}

/// Translates every point by `offset`.
#[must_use]
pub fn translate(points: &[Point2], offset: &Vector2) -> Vec<Point2> {
    points.iter().map(|p| p + offset).collect()
}

/// Translates the sequence so that its first point lands on `target`.
///
/// An empty sequence is returned unchanged.
#[must_use]
pub fn translate_start_to(points: &[Point2], target: &Point2) -> Vec<Point2> {
    match points.first() {
        Some(first) => translate(points, &(target - first)),
        None => Vec::new(),
    }
}

/// Scales every point about the origin by `factor`.
#[must_use]
pub fn scale(points: &[Point2], factor: f64) -> Vec<Point2> {
    points.iter().map(|p| Point2::from(p.coords * factor)).collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn assert_points_eq(actual: &[Point2], expected: &[Point2]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate(&[p(1.0, 0.0), p(0.0, 2.0)], FRAC_PI_2);
        assert_points_eq(&rotated, &[p(0.0, 1.0), p(-2.0, 0.0)]);
    }

    #[test]
    fn negative_angle_rotates_clockwise() {
        let rotated = rotate(&[p(1.0, 0.0)], -FRAC_PI_2);
        assert_points_eq(&rotated, &[p(0.0, -1.0)]);
    }

    #[test]
    fn reflections_negate_one_coordinate() {
        let pts = [p(1.0, 2.0), p(-3.0, 4.0)];
        assert_points_eq(&reflect_across_y_axis(&pts), &[p(-1.0, 2.0), p(3.0, 4.0)]);
        assert_points_eq(&reflect_across_x_axis(&pts), &[p(1.0, -2.0), p(-3.0, -4.0)]);
    }

    #[test]
    fn reverse_and_translate_start() {
        let pts = reversed(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        let moved = translate_start_to(&pts, &p(5.0, 5.0));
        assert_points_eq(&moved, &[p(5.0, 5.0), p(5.0, 4.0), p(4.0, 4.0)]);
    }

    #[test]
    fn translate_start_of_empty_is_empty() {
        assert!(translate_start_to(&[], &p(1.0, 1.0)).is_empty());
    }

    #[test]
    fn scale_about_origin() {
        let scaled = scale(&[p(1.0, -2.0)], 3.0);
        assert_points_eq(&scaled, &[p(3.0, -6.0)]);
    }
}
