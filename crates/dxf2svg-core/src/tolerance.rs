//! Floating point tolerance
//!
//! Endpoint matching never uses exact float comparison. Every comparison in
//! the assembler goes through [`AlmostEq`], which treats two values as equal
//! when they differ by strictly less than [`COORD_EPSILON`].

/// Absolute threshold below which two coordinates are considered equal.
pub const COORD_EPSILON: f64 = 1e-8;

/// Approximate equality under [`COORD_EPSILON`].
///
/// Implementations must be symmetric: `a.almost_eq(&b) == b.almost_eq(&a)`.
pub trait AlmostEq<Rhs: ?Sized = Self> {
    /// Returns true when `self` and `other` are equal within tolerance.
    fn almost_eq(&self, other: &Rhs) -> bool;
}

/// Scalar tolerance check shared by every [`AlmostEq`] implementation.
#[inline]
pub fn float_almost_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < COORD_EPSILON
}

impl AlmostEq for f64 {
    #[inline]
    fn almost_eq(&self, other: &f64) -> bool {
        float_almost_eq(*self, *other)
    }
}
