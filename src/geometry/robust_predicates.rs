// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Robust geometric predicates for triangle queries
//! Near-degenerate inputs are recomputed with FMA-compensated arithmetic

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Relative epsilon for near-degeneracy and plane tests
const EPS: f64 = 1e-9;

/// Compute oriented volume of tetrahedron (a, b, c, d)
/// Returns positive value if d is on the positive side of plane (a, b, c)
/// Returns negative value if d is on the negative side
/// Returns near-zero if d is coplanar with (a, b, c)
pub fn oriented_volume(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    d: &Point3<f64>,
) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;

    // 6 * volume of tetrahedron
    let result = ab.dot(&ac.cross(&ad));

    // Cancellation relative to the magnitude of the inputs
    if result.abs() <= EPS * ab.norm() * ac.norm() * ad.norm() {
        compensated_dot(&ab, &compensated_cross(&ac, &ad))
    } else {
        result
    }
}

/// `a * b - c * d` with Kahan's FMA scheme, accurate to about 1.5 ulp
fn diff_of_products(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let cd = c * d;
    let err = c.mul_add(d, -cd);
    a.mul_add(b, -cd) - err
}

/// Cross product with each component from [`diff_of_products`]
fn compensated_cross(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        diff_of_products(u.y, v.z, u.z, v.y),
        diff_of_products(u.z, v.x, u.x, v.z),
        diff_of_products(u.x, v.y, u.y, v.x),
    )
}

/// Dot product carrying the rounding error of every product and sum
fn compensated_dot(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let mut sum = 0.0;
    let mut err = 0.0;
    for (x, y) in u.iter().zip(v.iter()) {
        let p = x * y;
        let p_err = x.mul_add(*y, -p);
        let (s, s_err) = two_sum(sum, p);
        sum = s;
        err += p_err + s_err;
    }
    sum + err
}

/// Error-free sum: `a + b == s + e` exactly
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// Classification of a point against an oriented plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneClassification {
    Front,   // Point is on positive side
    Back,    // Point is on negative side
    OnPlane, // Point is coplanar (within epsilon)
}

/// Classify `point` against the plane of triangle (a, b, c), oriented by
/// the right-hand rule.
///
/// Uses the signed distance to the plane, with the on-plane band scaled by
/// the longest edge, so the result does not depend on triangle size.
pub fn classify_point_triangle(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    point: &Point3<f64>,
) -> PlaneClassification {
    let normal_len = compensated_cross(&(b - a), &(c - a)).norm();
    if normal_len == 0.0 {
        return PlaneClassification::OnPlane;
    }

    let distance = oriented_volume(a, b, c, point) / normal_len;
    let band = EPS * max_edge_length(a, b, c);

    if distance > band {
        PlaneClassification::Front
    } else if distance < -band {
        PlaneClassification::Back
    } else {
        PlaneClassification::OnPlane
    }
}

/// Length of the longest edge of triangle (a, b, c)
pub fn max_edge_length(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    (b - a).norm().max((c - b).norm()).max((a - c).norm())
}

/// Compute robust triangle area
/// Returns area of triangle (a, b, c)
pub fn triangle_area(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let area = ab.cross(&ac).norm() / 2.0;

    // Near-collinear edges lose the cross product to cancellation
    if area <= EPS * ab.norm() * ac.norm() {
        compensated_cross(&ab, &ac).norm() / 2.0
    } else {
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oriented_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        let above = Point3::new(0.0, 0.0, 1.0);
        assert!(oriented_volume(&a, &b, &c, &above) > 0.0);

        let below = Point3::new(0.0, 0.0, -1.0);
        assert!(oriented_volume(&a, &b, &c, &below) < 0.0);
    }

    #[test]
    fn test_classify_point_triangle() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);

        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(0.2, 0.2, 1.0)),
            PlaneClassification::Front
        );
        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(0.2, 0.2, -1.0)),
            PlaneClassification::Back
        );
        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(5.0, -3.0, 0.0)),
            PlaneClassification::OnPlane
        );
    }

    #[test]
    fn test_classify_small_triangle() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1e-5, 0.0, 0.0);
        let c = Point3::new(0.0, 1e-5, 0.0);

        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(0.0, 0.0, 1.0)),
            PlaneClassification::Front
        );
        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(0.0, 0.0, -1e-6)),
            PlaneClassification::Back
        );
        assert_eq!(
            classify_point_triangle(&a, &b, &c, &Point3::new(3e-6, 3e-6, 0.0)),
            PlaneClassification::OnPlane
        );
    }

    #[test]
    fn test_classify_zero_area_is_on_plane() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(
            classify_point_triangle(&a, &b, &b, &Point3::new(0.0, 0.0, 1.0)),
            PlaneClassification::OnPlane
        );
    }

    #[test]
    fn test_triangle_area() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let c = Point3::new(0.0, 2.0, 0.0);
        assert!((triangle_area(&a, &b, &c) - 2.0).abs() < 1e-12);

        let collinear = Point3::new(4.0, 0.0, 0.0);
        assert_eq!(triangle_area(&a, &b, &collinear), 0.0);
    }

    #[test]
    fn test_near_collinear_area_recovers_cancelled_term() {
        // x*x - (1 + 2^-26) is exactly 2^-54, which plain multiplication
        // rounds away
        let x = 1.0 + 2f64.powi(-27);
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, x, 1.0 + 2f64.powi(-26));
        let c = Point3::new(0.0, 1.0, x);

        let naive = (b - a).cross(&(c - a)).norm() / 2.0;
        assert_eq!(naive, 0.0);
        assert_eq!(triangle_area(&a, &b, &c), 2f64.powi(-55));
    }

    #[test]
    fn test_diff_of_products_exact_residual() {
        let x = 1.0 + 2f64.powi(-27);
        let y = 1.0 + 2f64.powi(-26);
        assert_eq!(x * x - y, 0.0);
        assert_eq!(diff_of_products(x, x, y, 1.0), 2f64.powi(-54));
    }

    #[test]
    fn test_compensated_dot_keeps_small_terms() {
        let u = Vector3::new(1e16, 1.0, -1e16);
        let v = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(compensated_dot(&u, &v), 1.0);
    }
}
