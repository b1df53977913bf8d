//! Arithmetic and ordering for Int and Float.
//!
//! Int with Int stays Int and wraps on overflow. Any mix of Int and Float is
//! computed in Float. Division by zero is an error for both kinds. Ordering
//! and equality between an Int and a Float are exact instead.

use core::cmp::Ordering;

use ecow::{EcoString, eco_format};

use crate::{
    error::{Error, Result},
    values::Value,
};

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numbers(lhs: &Value, rhs: &Value) -> Result<(Number, Number)> {
    let number = |value: &Value| match value {
        Value::Int(n) => Some(Number::Int(*n)),
        Value::Float(f) => Some(Number::Float(*f)),
        _ => None,
    };
    match (number(lhs), number(rhs)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ if rhs.is_null() => Err(Error::NullValue),
        _ => Err(Error::ExpectedNumber),
    }
}

/// Arithmetic operands. A mix of Int and Float is promoted to Float.
fn operands(lhs: &Value, rhs: &Value) -> Result<Operands> {
    Ok(match numbers(lhs, rhs)? {
        (Number::Int(a), Number::Int(b)) => Operands::Ints(a, b),
        (Number::Int(a), Number::Float(b)) => Operands::Floats(a as f64, b),
        (Number::Float(a), Number::Int(b)) => Operands::Floats(a, b as f64),
        (Number::Float(a), Number::Float(b)) => Operands::Floats(a, b),
    })
}

pub(crate) fn add(lhs: &Value, rhs: &Value) -> Result<Value> {
    Ok(match operands(lhs, rhs)? {
        Operands::Ints(a, b) => Value::Int(a.wrapping_add(b)),
        Operands::Floats(a, b) => Value::Float(a + b),
    })
}

pub(crate) fn sub(lhs: &Value, rhs: &Value) -> Result<Value> {
    Ok(match operands(lhs, rhs)? {
        Operands::Ints(a, b) => Value::Int(a.wrapping_sub(b)),
        Operands::Floats(a, b) => Value::Float(a - b),
    })
}

pub(crate) fn mul(lhs: &Value, rhs: &Value) -> Result<Value> {
    Ok(match operands(lhs, rhs)? {
        Operands::Ints(a, b) => Value::Int(a.wrapping_mul(b)),
        Operands::Floats(a, b) => Value::Float(a * b),
    })
}

pub(crate) fn div(lhs: &Value, rhs: &Value) -> Result<Value> {
    match operands(lhs, rhs)? {
        Operands::Ints(_, 0) => Err(Error::DivideByZero),
        Operands::Ints(a, b) => Ok(Value::Int(a.wrapping_div(b))),
        Operands::Floats(_, b) if b == 0.0 => Err(Error::DivideByZero),
        Operands::Floats(a, b) => Ok(Value::Float(a / b)),
    }
}

pub(crate) fn negate(value: &Value) -> Result<Value> {
    match value {
        Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
        Value::Float(f) => Ok(Value::Float(-f)),
        _ => Err(Error::ExpectedNumber),
    }
}

/// Numeric ordering. Int against Float is exact, without promotion. NaN, of
/// either sign, sorts after every other number and equal to itself.
pub(crate) fn compare(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    match numbers(lhs, rhs) {
        Ok((a, b)) => Ok(order(a, b)),
        Err(Error::ExpectedNumber) => Err(Error::ExpectedComparable),
        Err(err) => Err(err),
    }
}

/// Numeric equality, consistent with [`compare`] except that NaN != NaN.
pub(crate) fn equals(lhs: &Value, rhs: &Value) -> bool {
    match numbers(lhs, rhs) {
        Ok((Number::Float(a), Number::Float(b))) => a == b,
        Ok((a, b)) => order(a, b) == Ordering::Equal,
        Err(_) => false,
    }
}

fn order(lhs: Number, rhs: Number) -> Ordering {
    match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => a.cmp(&b),
        (Number::Int(a), Number::Float(b)) => int_float_order(a, b),
        (Number::Float(a), Number::Int(b)) => int_float_order(b, a).reverse(),
        (Number::Float(a), Number::Float(b)) => float_order(a, b),
    }
}

fn float_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0.0 and 0.0 are equal.
        (false, false) if a < b => Ordering::Less,
        (false, false) if a > b => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// 2^63, the first float above the i64 range.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

fn int_float_order(a: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_END {
        return Ordering::Less;
    }
    if f < -I64_END {
        return Ordering::Greater;
    }

    // f is in [-2^63, 2^63), so its integral part converts exactly.
    let whole = f.trunc();
    match a.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ordering => ordering,
    }
}

/// Format a float so that it always reads as a float (`2.0`, not `2`).
pub(crate) fn format_float(value: f64) -> EcoString {
    if value.is_nan() {
        EcoString::from("nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            EcoString::from("inf")
        } else {
            EcoString::from("-inf")
        }
    } else {
        // Debug keeps the decimal point and switches to exponents at the extremes.
        eco_format!("{:?}", value)
    }
}
