use core::cmp::Ordering;

use crate::{Error, NULL, TRUE, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_int_arithmetic() {
    let a = Value::int(7);
    let b = Value::int(2);
    assert_eq!(a.add(&b).unwrap(), Value::int(9));
    assert_eq!(a.sub(&b).unwrap(), Value::int(5));
    assert_eq!(a.mul(&b).unwrap(), Value::int(14));
    assert_eq!(a.div(&b).unwrap(), Value::int(3));
    assert_eq!(a.negate().unwrap(), Value::int(-7));
    assert_eq!(Value::int(-7).div(&b).unwrap(), Value::int(-3));
}

#[test]
fn test_int_results_stay_int() {
    let sum = Value::int(1).add(&Value::int(2)).unwrap();
    assert!(sum.as_int().is_some());
    assert!(sum.as_float().is_none());
}

#[test]
fn test_float_arithmetic() {
    let a = Value::float(1.5);
    let b = Value::float(0.5);
    assert_eq!(a.add(&b).unwrap(), Value::float(2.0));
    assert_eq!(a.sub(&b).unwrap(), Value::float(1.0));
    assert_eq!(a.mul(&b).unwrap(), Value::float(0.75));
    assert_eq!(a.div(&b).unwrap(), Value::float(3.0));
    assert_eq!(a.negate().unwrap(), Value::float(-1.5));
}

#[test]
fn test_mixed_arithmetic_promotes_to_float() {
    let result = Value::int(1).add(&Value::float(0.5)).unwrap();
    assert_eq!(result.as_float(), Some(1.5));

    let result = Value::float(3.0).mul(&Value::int(2)).unwrap();
    assert_eq!(result.as_float(), Some(6.0));

    let result = Value::int(1).div(&Value::float(4.0)).unwrap();
    assert_eq!(result.as_float(), Some(0.25));
}

#[test]
fn test_int_arithmetic_wraps() {
    let max = Value::int(i64::MAX);
    let min = Value::int(i64::MIN);
    assert_eq!(max.add(&Value::int(1)).unwrap(), min);
    assert_eq!(min.sub(&Value::int(1)).unwrap(), max);
    assert_eq!(min.negate().unwrap(), min);
    assert_eq!(min.div(&Value::int(-1)).unwrap(), min);
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(Value::int(1).div(&Value::int(0)), Err(Error::DivideByZero));
    assert_eq!(
        Value::float(1.0).div(&Value::float(0.0)),
        Err(Error::DivideByZero)
    );
    assert_eq!(Value::float(1.0).div(&Value::int(0)), Err(Error::DivideByZero));
    assert_eq!(
        Value::int(1).div(&Value::float(-0.0)),
        Err(Error::DivideByZero)
    );
}

#[test]
fn test_arithmetic_type_errors() {
    let n = Value::int(1);
    assert_eq!(n.sub(&TRUE), Err(Error::ExpectedNumber));
    assert_eq!(n.mul(&Value::list(vec![])), Err(Error::ExpectedNumber));
    assert_eq!(n.add(&TRUE), Err(Error::ExpectedNumber));
    assert_eq!(n.add(&NULL), Err(Error::NullValue));
    assert_eq!(Value::float(1.0).div(&NULL), Err(Error::NullValue));
}

#[test]
fn test_add_str_renders_number() {
    assert_eq!(
        Value::int(1).add(&Value::str("a")).unwrap(),
        Value::str("1a")
    );
    assert_eq!(
        Value::float(2.0).add(&Value::str("x")).unwrap(),
        Value::str("2.0x")
    );
}

#[test]
fn test_compare() {
    let cmp = |a: Value, b: Value| a.compare(&b).unwrap();
    assert_eq!(cmp(Value::int(1), Value::int(2)), Ordering::Less);
    assert_eq!(cmp(Value::int(2), Value::int(2)), Ordering::Equal);
    assert_eq!(cmp(Value::int(3), Value::int(2)), Ordering::Greater);
    assert_eq!(cmp(Value::int(1), Value::float(1.5)), Ordering::Less);
    assert_eq!(cmp(Value::float(2.0), Value::int(2)), Ordering::Equal);
    assert_eq!(cmp(Value::float(-0.0), Value::float(0.0)), Ordering::Equal);
    assert_eq!(cmp(Value::float(f64::NAN), Value::float(1.0)), Ordering::Greater);
}

#[test]
fn test_compare_type_errors() {
    assert_eq!(
        Value::int(1).compare(&Value::str("1")),
        Err(Error::ExpectedComparable)
    );
    assert_eq!(Value::float(1.0).compare(&TRUE), Err(Error::ExpectedComparable));
    assert_eq!(Value::int(1).compare(&NULL), Err(Error::NullValue));
}

#[test]
fn test_equals() {
    assert!(Value::int(2).equals(&Value::float(2.0)).unwrap());
    assert!(Value::float(2.0).equals(&Value::int(2)).unwrap());
    assert!(!Value::int(2).equals(&Value::int(3)).unwrap());
    assert!(!Value::int(1).equals(&TRUE).unwrap());
    assert!(!Value::int(0).equals(&NULL).unwrap());
    assert!(!Value::float(f64::NAN).equals(&Value::float(f64::NAN)).unwrap());
}

#[test]
fn test_render() {
    let render = |v: Value| v.to_str().unwrap().as_str().to_string();
    assert_eq!(render(Value::int(-42)), "-42");
    assert_eq!(render(Value::float(2.0)), "2.0");
    assert_eq!(render(Value::float(0.1)), "0.1");
    assert_eq!(render(Value::float(-1.25)), "-1.25");
    assert_eq!(render(Value::float(1e300)), "1e300");
    assert_eq!(render(Value::float(f64::NAN)), "nan");
    assert_eq!(render(Value::float(f64::INFINITY)), "inf");
    assert_eq!(render(Value::float(f64::NEG_INFINITY)), "-inf");
}

#[test]
fn test_int_float_compare_is_exact() {
    // 2^53 + 1 has no f64 representation; promoting it would round to 2^53.
    let big = Value::int(9_007_199_254_740_993);
    let big_int = Value::int(9_007_199_254_740_992);
    let big_float = Value::float(9_007_199_254_740_992.0);

    assert_eq!(big.compare(&big_float).unwrap(), Ordering::Greater);
    assert_eq!(big_float.compare(&big).unwrap(), Ordering::Less);
    assert!(!big.equals(&big_float).unwrap());
    assert!(!big_float.equals(&big).unwrap());

    // Equality stays transitive across the two kinds.
    assert!(big_int.equals(&big_float).unwrap());
    assert!(!big.equals(&big_int).unwrap());
}

#[test]
fn test_int_float_compare_fractions() {
    let cmp = |a: i64, b: f64| Value::int(a).compare(&Value::float(b)).unwrap();
    assert_eq!(cmp(1, 1.5), Ordering::Less);
    assert_eq!(cmp(2, 1.5), Ordering::Greater);
    assert_eq!(cmp(-1, -1.5), Ordering::Greater);
    assert_eq!(cmp(-2, -1.5), Ordering::Less);
    assert_eq!(cmp(0, -0.0), Ordering::Equal);
    assert_eq!(cmp(0, 1e-300), Ordering::Less);
}

#[test]
fn test_int_float_compare_at_the_i64_range() {
    let cmp = |a: i64, b: f64| Value::int(a).compare(&Value::float(b)).unwrap();
    // i64::MAX rounds up to 2^63 as an f64.
    assert_eq!(cmp(i64::MAX, i64::MAX as f64), Ordering::Less);
    assert_eq!(cmp(i64::MIN, i64::MIN as f64), Ordering::Equal);
    assert_eq!(cmp(i64::MIN, -1e19), Ordering::Greater);
    assert_eq!(cmp(i64::MAX, 1e19), Ordering::Less);
    assert_eq!(cmp(i64::MAX, f64::INFINITY), Ordering::Less);
    assert_eq!(cmp(i64::MIN, f64::NEG_INFINITY), Ordering::Greater);
    assert!(!Value::int(i64::MAX).equals(&Value::float(i64::MAX as f64)).unwrap());
}

#[test]
fn test_nan_sorts_last_regardless_of_sign() {
    let negative_nan = -f64::NAN;
    assert!(negative_nan.is_sign_negative());

    let cmp = |a: Value, b: Value| a.compare(&b).unwrap();
    assert_eq!(cmp(Value::float(negative_nan), Value::float(f64::INFINITY)), Ordering::Greater);
    assert_eq!(cmp(Value::float(f64::NEG_INFINITY), Value::float(negative_nan)), Ordering::Less);
    assert_eq!(cmp(Value::int(i64::MAX), Value::float(negative_nan)), Ordering::Less);
    assert_eq!(cmp(Value::float(f64::NAN), Value::int(i64::MIN)), Ordering::Greater);
    assert_eq!(cmp(Value::float(f64::NAN), Value::float(negative_nan)), Ordering::Equal);
    assert!(!Value::int(0).equals(&Value::float(f64::NAN)).unwrap());
}
