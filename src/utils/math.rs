// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point3;

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// True when every coordinate is finite
pub fn is_finite_point(p: &Point3<f64>) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(-2.0, 2.0, 0.0), -2.0);
        assert_eq!(lerp(-2.0, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_is_finite_point() {
        assert!(is_finite_point(&Point3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite_point(&Point3::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite_point(&Point3::new(0.0, f64::NEG_INFINITY, 0.0)));
    }
}
