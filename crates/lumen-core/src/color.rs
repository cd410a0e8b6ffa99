//! RGB colors.
//!
//! Channels are unconstrained `f32`s. Values above 1 or below 0 are normal
//! intermediate results of lighting math; clamping to a displayable range
//! is left to whatever exports the image.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::float::approx_eq;

/// A linear RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// All channels zero.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// All channels one.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Red channel.
    pub fn red(&self) -> f32 {
        self.r
    }

    /// Green channel.
    pub fn green(&self) -> f32 {
        self.g
    }

    /// Blue channel.
    pub fn blue(&self) -> f32 {
        self.b
    }

    /// Component-wise tolerance equality.
    pub fn approx_eq(&self, other: &Color) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }

    /// Component-wise (Hadamard) product, used to blend light and surface color.
    pub fn hadamard(self, other: Color) -> Color {
        Color::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /// The channels as `[r, g, b]`.
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Hadamard product.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.hadamard(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: Color, expected: Color) {
        assert!(
            actual.approx_eq(&expected),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn channels_are_unclamped() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert!(approx_eq(c.red(), -0.5));
        assert!(approx_eq(c.green(), 0.4));
        assert!(approx_eq(c.blue(), 1.7));
    }

    #[test]
    fn add_and_subtract() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert_approx(c1 + c2, Color::new(1.6, 0.7, 1.0));
        assert_approx(c1 - c2, Color::new(0.2, 0.5, 0.5));
    }

    #[test]
    fn scale_by_scalar() {
        assert_approx(Color::new(0.2, 0.3, 0.4) * 2.0, Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn hadamard_product() {
        let c1 = Color::new(1.0, 0.2, 0.4);
        let c2 = Color::new(0.9, 1.0, 0.1);
        assert_approx(c1.hadamard(c2), Color::new(0.9, 0.2, 0.04));
        assert_approx(c1 * c2, c2 * c1);
    }

    #[test]
    fn approx_eq_per_channel_tolerance() {
        use crate::float::EPSILON;

        let base = Color::new(0.2, 0.5, 0.9);
        let half = EPSILON / 2.0;
        for i in 0..3 {
            let mut near = base.to_array();
            near[i] += half;
            assert!(base.approx_eq(&Color::from(near)), "channel {i} within tolerance");

            let mut far = base.to_array();
            far[i] += 2.0 * EPSILON;
            assert!(!base.approx_eq(&Color::from(far)), "channel {i} outside tolerance");
        }
    }

    #[test]
    fn black_is_default() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
