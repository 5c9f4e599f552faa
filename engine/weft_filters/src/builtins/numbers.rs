//! Arithmetic, numeric formatting, and pluralization filters.

use weft_value::Value;

use crate::errors::{argument_count, type_mismatch, FilterResult};

/// `add`: numeric addition when both operands are numbers (float if either
/// side is a float), string concatenation of both textual forms otherwise.
pub fn add(input: &Value, param: &Value) -> FilterResult {
    if input.is_number() && param.is_number() {
        if input.is_float() || param.is_float() {
            return Ok(Value::float(input.to_float() + param.to_float()));
        }
        return Ok(Value::int(input.to_integer().wrapping_add(param.to_integer())));
    }
    Ok(Value::string(format!("{input}{param}")))
}

/// `divisibleby`: integer divisibility as a boolean. A zero parameter yields
/// `false` instead of a division fault.
pub fn divisibleby(input: &Value, param: &Value) -> FilterResult {
    let divisor = param.to_integer();
    if divisor == 0 {
        return Ok(Value::Bool(false));
    }
    // i64::MIN % -1 overflows `%`; its mathematical remainder is zero.
    Ok(Value::Bool(
        input
            .to_integer()
            .checked_rem(divisor)
            .is_none_or(|r| r == 0),
    ))
}

/// `floatformat`: fixed-point formatting with a decimal count taken from the
/// parameter.
///
/// An absent or non-numeric parameter resolves the count to -1, which means
/// "trim"; a non-positive count is negated and also forces trimming.
/// Trimming renders an integral value as a bare integer and everything else
/// fixed-point with the resolved count.
pub fn floatformat(input: &Value, param: &Value) -> FilterResult {
    // f64 has no meaningful digits past this point.
    const MAX_DECIMALS: i64 = 100;

    let val = input.to_float();

    let mut decimals = if param.is_nil() { -1 } else { param.to_integer() };
    let mut trim = !param.is_number();
    if decimals <= 0 {
        decimals = decimals.checked_neg().unwrap_or(MAX_DECIMALS);
        trim = true;
    }
    decimals = decimals.min(MAX_DECIMALS);

    if trim && val.trunc() == val {
        return Ok(Value::int(input.to_integer()));
    }

    Ok(Value::string(format!(
        "{val:.prec$}",
        prec = decimals.max(0) as usize
    )))
}

/// `pluralize`: select a plural suffix from the parameter based on the
/// numeric input.
///
/// No parameter: `"s"` unless the integer value is exactly 1. One suffix:
/// used unless the value is 1. Two comma-separated suffixes:
/// singular/plural selection. More than two is an argument-count error, and
/// a non-numeric input is a type mismatch.
pub fn pluralize(input: &Value, param: &Value) -> FilterResult {
    if !input.is_number() {
        return Err(type_mismatch("pluralize", "a number", input.type_name()));
    }
    if param.is_empty() {
        if input.to_integer() != 1 {
            return Ok(Value::string("s"));
        }
        return Ok(Value::string(""));
    }

    let param_str = param.to_string();
    let endings: Vec<&str> = param_str.split(',').collect();
    if endings.len() > 2 {
        return Err(argument_count("pluralize", 0, 2, endings.len()));
    }
    if endings.len() == 2 {
        let pick = if input.to_integer() == 1 {
            endings[0]
        } else {
            endings[1]
        };
        return Ok(Value::string(pick));
    }
    if input.to_integer() != 1 {
        return Ok(Value::string(endings[0]));
    }
    Ok(Value::string(""))
}

/// `float`: explicit coercion through the float contract.
pub fn float(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::float(input.to_float()))
}

/// `integer`: explicit coercion through the integer contract.
pub fn integer(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::int(input.to_integer()))
}
