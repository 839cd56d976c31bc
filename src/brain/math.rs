/// Signature shared by every unary kernel.
pub type UnaryFn = fn(f64) -> f64;
/// Signature shared by every binary kernel. The first argument is the
/// captured left operand, the second the accumulator at resolution time.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Flips the sign of `x`.
///
/// # Example
/// ```
/// use calcbrain::brain::math::negate;
///
/// assert_eq!(negate(2.5), -2.5);
/// assert!(negate(0.0).is_sign_negative());
/// ```
#[must_use]
pub fn negate(x: f64) -> f64 {
    -x
}

/// Square root. Negative inputs produce NaN.
///
/// # Example
/// ```
/// use calcbrain::brain::math::sqrt;
///
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(sqrt(-4.0).is_nan());
/// ```
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

/// Sine of `x` radians.
#[must_use]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

/// Cosine of `x` radians.
#[must_use]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

/// Tangent of `x` radians.
#[must_use]
pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a × b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// A zero divisor yields a signed infinity, or NaN when `a` is also zero.
///
/// # Example
/// ```
/// use calcbrain::brain::math::divide;
///
/// assert_eq!(divide(1.0, 0.0), f64::INFINITY);
/// assert_eq!(divide(-1.0, 0.0), f64::NEG_INFINITY);
/// assert!(divide(0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}
