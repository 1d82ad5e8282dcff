//! Numeric helpers: basic arithmetic, rounding, simple statistics and a few
//! number theory predicates.
//!
//! Continuous arithmetic works on `f64`, counting on signed integers. Only
//! `divide`, `sqrt`, `factorial`, `round`, `min`, `max` and `average` can fail;
//! everything else is total.

// used to rescale decimals with half-up rounding
use bigdecimal::{BigDecimal, RoundingMode};

// used when turning the shortest decimal form of an f64 into a BigDecimal
use std::str::FromStr;

use crate::error::{Result, SundryError};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails with [`SundryError::DivisionByZero`] when `b` is exactly zero.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(SundryError::DivisionByZero);
    }
    Ok(a / b)
}

/// Real exponentiation, NaN and infinities propagate.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

pub fn sqrt(n: f64) -> Result<f64> {
    if n < 0.0 {
        return Err(SundryError::invalid("cannot take the square root of a negative number"));
    }
    Ok(n.sqrt())
}

/// Product of `1..=n`. Results beyond `20!` wrap around.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(SundryError::invalid("factorial is not defined for negative numbers"));
    }
    Ok((2..=i64::from(n)).fold(1i64, |product, i| product.wrapping_mul(i)))
}

/// `value` as a percentage of `total`, or 0 when `total` is zero.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (value / total) * 100.0
}

pub fn percentage_of(value: f64, percentage: f64) -> f64 {
    (value * percentage) / 100.0
}

/// Rounds `value` to `places` decimal digits, halves away from zero.
///
/// The value is first taken at its shortest decimal representation, so
/// `round(2.675, 2)` gives `2.68` even though the nearest binary double lies
/// slightly below. Non-finite values come back unchanged.
pub fn round(value: f64, places: i32) -> Result<f64> {
    if places < 0 {
        return Err(SundryError::invalid("decimal places cannot be negative"));
    }
    if !value.is_finite() {
        return Ok(value);
    }
    let decimal = BigDecimal::from_str(&value.to_string())
        .map_err(|e| SundryError::invalid(e.to_string()))?;
    // places at or beyond the existing scale leave the value as it is
    let (_, scale) = decimal.as_bigint_and_exponent();
    if i64::from(places) >= scale {
        return Ok(value);
    }
    let rounded = decimal.with_scale_round(i64::from(places), RoundingMode::HalfUp);
    rounded
        .to_string()
        .parse::<f64>()
        .map_err(|e| SundryError::invalid(e.to_string()))
}

fn non_empty(values: &[f64]) -> Result<&[f64]> {
    if values.is_empty() {
        return Err(SundryError::invalid("sequence cannot be empty"));
    }
    Ok(values)
}

pub fn min(values: &[f64]) -> Result<f64> {
    let values = non_empty(values)?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |min, &v| if v < min { v } else { min }))
}

pub fn max(values: &[f64]) -> Result<f64> {
    let values = non_empty(values)?;
    Ok(values[1..]
        .iter()
        .fold(values[0], |max, &v| if v > max { v } else { max }))
}

pub fn average(values: &[f64]) -> Result<f64> {
    let values = non_empty(values)?;
    Ok(sum(values) / values.len() as f64)
}

/// Sum of all values, 0 for an empty sequence.
pub fn sum(values: &[f64]) -> f64 {
    // Iterator::sum over f64 starts at -0.0
    values.iter().fold(0.0, |sum, v| sum + v)
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

/// Trial division by 6k ± 1 up to the square root.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5i64;
    // i <= n / i rather than i * i <= n, the square overflows near i64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

pub fn abs(n: f64) -> f64 {
    n.abs()
}

/// Euclid over absolute values, `gcd(0, k) == |k|`.
pub fn gcd(a: i32, b: i32) -> i64 {
    let mut a = i64::from(a).abs();
    let mut b = i64::from(b).abs();
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// 0 when either operand is 0.
pub fn lcm(a: i32, b: i32) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (i64::from(a) * i64::from(b)).abs() / gcd(a, b)
}
