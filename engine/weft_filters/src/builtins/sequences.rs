//! Element access, joining, length, and random choice over sequences.

use rand::Rng;
use weft_value::Value;

use crate::errors::FilterResult;

/// `first`: first element of a sliceable non-empty input; the empty string
/// otherwise (not an error).
pub fn first(input: &Value, _param: &Value) -> FilterResult {
    if input.can_slice() && !input.is_empty() {
        return Ok(input.index(0));
    }
    Ok(Value::string(""))
}

/// `last`: last element of a sliceable non-empty input; the empty string
/// otherwise (not an error).
pub fn last(input: &Value, _param: &Value) -> FilterResult {
    if input.can_slice() && !input.is_empty() {
        return Ok(input.index(input.len() - 1));
    }
    Ok(Value::string(""))
}

/// `join`: each element's textual form joined with the parameter as
/// separator. Non-sliceable input passes through unchanged.
pub fn join(input: &Value, param: &Value) -> FilterResult {
    if !input.can_slice() {
        return Ok(input.clone());
    }
    let sep = param.to_string();
    let parts: Vec<String> = (0..input.len())
        .map(|i| input.index(i).to_string())
        .collect();
    Ok(Value::string(parts.join(&sep)))
}

/// `length`: element or character count via the `len()` contract.
pub fn length(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::int(input.len() as i64))
}

/// `length_is`: boolean equality of `len()` against the parameter's
/// integer.
pub fn length_is(input: &Value, param: &Value) -> FilterResult {
    Ok(Value::Bool(input.len() as i64 == param.to_integer()))
}

/// `random`: uniform-random element of a sliceable non-empty input;
/// anything else passes through unchanged.
///
/// Uses the thread-local generator, which is OS-seeded per thread: not
/// cryptographically secure and not reproducible across runs, by design.
pub fn random(input: &Value, _param: &Value) -> FilterResult {
    if !input.can_slice() || input.is_empty() {
        return Ok(input.clone());
    }
    let i = rand::rng().random_range(0..input.len());
    Ok(input.index(i))
}
