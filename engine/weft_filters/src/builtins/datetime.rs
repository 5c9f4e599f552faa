//! Strftime formatting of date/time values.

use chrono::format::{Item, StrftimeItems};
use weft_value::Value;

use crate::errors::{type_mismatch, FilterResult};

/// `date` (also registered as `time`): format a date/time input with the
/// parameter's strftime format string.
///
/// Any other input kind is a type mismatch. The format string is parsed
/// up front so an invalid directive reports an error instead of panicking
/// mid-render.
pub fn date(input: &Value, param: &Value) -> FilterResult {
    let Value::DateTime(dt) = input else {
        return Err(type_mismatch("date", "a datetime", input.type_name()));
    };
    let fmt = param.to_string();
    let items: Vec<Item<'_>> = StrftimeItems::new(&fmt).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(type_mismatch(
            "date",
            "a valid strftime format string",
            format!("'{fmt}'"),
        ));
    }
    Ok(Value::string(dt.format_with_items(items.into_iter()).to_string()))
}
