/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names)]
#[must_use]
pub fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

/// Builds the rotation of `angle` radians about the axis line through
/// `anchor` with direction `axis` (translate to origin, rotate, translate
/// back).
#[must_use]
pub fn rotation_about_line(anchor: &Point3, axis: &Vector3, angle: f64) -> Matrix4 {
    let t_neg = Matrix4::new_translation(&(-anchor.coords));
    let rot = rotation_matrix(axis, angle);
    let t_pos = Matrix4::new_translation(&anchor.coords);
    t_pos * rot * t_neg
}

/// Returns the squared distance from point `p` to the line segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist_sq(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (p - a).norm_squared();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;
    (p - closest).norm_squared()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn rotation_about_line_maps_hinged_point_up() {
        // Rotating (3, 0.5, 0) by -90 degrees about the vertical line x = 2
        // (axis +Y) lifts it to (2, 0.5, 1).
        let m = rotation_about_line(
            &Point3::new(2.0, 0.0, 0.0),
            &Vector3::new(0.0, 1.0, 0.0),
            -FRAC_PI_2,
        );
        let p = m.transform_point(&Point3::new(3.0, 0.5, 0.0));
        assert_relative_eq!(p, Point3::new(2.0, 0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_line_fixes_anchor() {
        let anchor = Point3::new(1.0, 2.0, 0.0);
        let m = rotation_about_line(&anchor, &Vector3::new(1.0, 0.0, 0.0), 1.234);
        let p = m.transform_point(&anchor);
        assert_relative_eq!(p, anchor, epsilon = 1e-12);
    }

    #[test]
    fn segment_dist_sq_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)->(2,0). Closest at (1,0), dist^2 = 1.
        let d = point_to_segment_dist_sq(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_sq_endpoint_closest() {
        let d = point_to_segment_dist_sq(
            &Point2::new(-2.0, 0.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 4.0).abs() < TOLERANCE, "d={d}");
    }

    #[test]
    fn segment_dist_sq_degenerate() {
        let d = point_to_segment_dist_sq(
            &Point2::new(3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert!((d - 25.0).abs() < TOLERANCE, "d={d}");
    }
}
