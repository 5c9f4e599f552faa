//! Fallback-selection filters: `default`, `default_if_none`, `yesno`.

use weft_value::Value;

use crate::errors::{argument_count, FilterResult};

/// `default`: the parameter when the input is falsy, the input otherwise.
pub fn default(input: &Value, param: &Value) -> FilterResult {
    if input.is_true() {
        Ok(input.clone())
    } else {
        Ok(param.clone())
    }
}

/// `default_if_none`: the parameter only when the input is nil; falsy but
/// non-nil values pass through unchanged.
pub fn default_if_none(input: &Value, param: &Value) -> FilterResult {
    if input.is_nil() {
        Ok(param.clone())
    } else {
        Ok(input.clone())
    }
}

/// `yesno`: nil maps to the "maybe" slot, truthy to "yes", falsy to "no".
///
/// Slot texts default to `yes`/`no`/`maybe`. A non-empty parameter
/// overrides them with 2 (yes,no) or 3 (yes,no,maybe) comma-separated
/// values; any other count is an argument-count error.
pub fn yesno(input: &Value, param: &Value) -> FilterResult {
    let param_str = param.to_string();
    let (yes, no, maybe) = if param_str.is_empty() {
        ("yes", "no", "maybe")
    } else {
        let custom: Vec<&str> = param_str.split(',').collect();
        if !(2..=3).contains(&custom.len()) {
            return Err(argument_count("yesno", 2, 3, custom.len()));
        }
        (
            custom[0],
            custom[1],
            custom.get(2).copied().unwrap_or("maybe"),
        )
    };

    let text = if input.is_nil() {
        maybe
    } else if input.is_true() {
        yes
    } else {
        no
    };
    Ok(Value::string(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::FilterErrorKind;

    #[test]
    fn default_replaces_falsy_values() {
        assert_eq!(
            default(&Value::string(""), &Value::string("fallback")),
            Ok(Value::string("fallback"))
        );
        assert_eq!(
            default(&Value::int(0), &Value::string("fallback")),
            Ok(Value::string("fallback"))
        );
        assert_eq!(
            default(&Value::string("kept"), &Value::string("fallback")),
            Ok(Value::string("kept"))
        );
        assert_eq!(default(&Value::int(7), &Value::Nil), Ok(Value::int(7)));
    }

    #[test]
    fn default_if_none_only_replaces_nil() {
        assert_eq!(
            default_if_none(&Value::Nil, &Value::string("fallback")),
            Ok(Value::string("fallback"))
        );
        // Falsy but non-nil values pass through
        assert_eq!(
            default_if_none(&Value::string(""), &Value::string("fallback")),
            Ok(Value::string(""))
        );
        assert_eq!(
            default_if_none(&Value::int(0), &Value::string("fallback")),
            Ok(Value::int(0))
        );
    }

    #[test]
    fn yesno_default_slots() {
        assert_eq!(yesno(&Value::Nil, &Value::Nil), Ok(Value::string("maybe")));
        assert_eq!(
            yesno(&Value::Bool(true), &Value::Nil),
            Ok(Value::string("yes"))
        );
        assert_eq!(
            yesno(&Value::Bool(false), &Value::Nil),
            Ok(Value::string("no"))
        );
    }

    #[test]
    fn yesno_custom_slots() {
        assert_eq!(
            yesno(&Value::Bool(false), &Value::string("sure,nope")),
            Ok(Value::string("nope"))
        );
        assert_eq!(
            yesno(&Value::Bool(true), &Value::string("sure,nope")),
            Ok(Value::string("sure"))
        );
        // Two slots: nil still falls back to the default "maybe"
        assert_eq!(
            yesno(&Value::Nil, &Value::string("sure,nope")),
            Ok(Value::string("maybe"))
        );
        assert_eq!(
            yesno(&Value::Nil, &Value::string("sure,nope,dunno")),
            Ok(Value::string("dunno"))
        );
    }

    #[test]
    fn yesno_rejects_bad_slot_counts() {
        let too_many = yesno(&Value::Bool(true), &Value::string("a,b,c,d"))
            .err()
            .map(|e| e.kind);
        assert_eq!(
            too_many,
            Some(FilterErrorKind::ArgumentCount {
                filter: "yesno",
                min: 2,
                max: 3,
                got: 4
            })
        );
        let too_few = yesno(&Value::Bool(true), &Value::string("only"))
            .err()
            .map(|e| e.kind);
        assert_eq!(
            too_few,
            Some(FilterErrorKind::ArgumentCount {
                filter: "yesno",
                min: 2,
                max: 3,
                got: 1
            })
        );
    }
}
