//! Math utilities and types
//!
//! Vector aliases shared by component data and the layout calculator.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Tolerance used when comparing layout sizes
pub const SIZE_EPSILON: f32 = f32::EPSILON * 16.0;

/// Component-wise approximate equality used to suppress no-op resizes
pub fn approx_eq2(a: Vec2, b: Vec2) -> bool {
    approx::abs_diff_eq!(a, b, epsilon = SIZE_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq2() {
        assert!(approx_eq2(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0)));
        assert!(!approx_eq2(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.5)));
        assert!(approx_eq2(Vec2::new(0.1 + 0.2, 200.0), Vec2::new(0.3, 200.0)));
    }
}
