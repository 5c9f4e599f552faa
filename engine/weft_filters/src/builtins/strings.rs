//! Casing, padding, truncation, and character-level string filters.
//!
//! All of these operate on the input's canonical textual form and count in
//! characters, not bytes, so multi-byte text pads and truncates correctly.

use weft_value::Value;

use crate::errors::FilterResult;

/// `addslashes`: backslash-escape `\`, `"`, and `'`, in that order.
pub fn addslashes(input: &Value, _param: &Value) -> FilterResult {
    let escaped = input
        .to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "\\'");
    Ok(Value::string(escaped))
}

/// `capfirst`: uppercase only the first character; empty input yields the
/// empty string.
pub fn capfirst(input: &Value, _param: &Value) -> FilterResult {
    if input.is_empty() {
        return Ok(Value::string(""));
    }
    let s = input.to_string();
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            Ok(Value::string(out))
        }
        None => Ok(Value::string("")),
    }
}

/// `center`: pad with spaces to the parameter width, extra space going to
/// the left when the remainder is odd. Input already at or past the width
/// is returned unchanged.
pub fn center(input: &Value, param: &Value) -> FilterResult {
    let width = param.to_integer();
    let len = input.len() as i64;
    if width <= len {
        return Ok(input.clone());
    }
    let spaces = (width - len) as usize;
    let left = spaces / 2 + spaces % 2;
    let right = spaces / 2;
    Ok(Value::string(format!(
        "{}{input}{}",
        " ".repeat(left),
        " ".repeat(right)
    )))
}

/// `cut`: remove every occurrence of the parameter's text.
pub fn cut(input: &Value, param: &Value) -> FilterResult {
    Ok(Value::string(
        input.to_string().replace(&param.to_string(), ""),
    ))
}

/// `lower`: fold to lowercase.
pub fn lower(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::string(input.to_string().to_lowercase()))
}

/// `upper`: fold to uppercase.
pub fn upper(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::string(input.to_string().to_uppercase()))
}

/// `title`: lowercase the whole string, then uppercase the first letter of
/// each whitespace-delimited word.
///
/// The initial lowercasing is deliberate and author-visible: "McDonald"
/// becomes "Mcdonald", not "McDonald". Non-string input yields the empty
/// string.
pub fn title(input: &Value, _param: &Value) -> FilterResult {
    if !input.is_string() {
        return Ok(Value::string(""));
    }
    let lowered = input.to_string().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;
    for c in lowered.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }
    Ok(Value::string(out))
}

/// `truncatechars`: truncate to the parameter's character count. When the
/// budget is at least 3, the last 3 characters of the truncated span become
/// a literal `...`; below 3 it is a hard truncation with no ellipsis.
pub fn truncatechars(input: &Value, param: &Value) -> FilterResult {
    let s = input.to_string();
    let max = param.to_integer();
    let count = s.chars().count() as i64;
    if max >= count {
        return Ok(input.clone());
    }
    if max >= 3 {
        let kept: String = s.chars().take((max - 3) as usize).collect();
        Ok(Value::string(format!("{kept}...")))
    } else {
        // Not enough room for the ellipsis
        let kept: String = s.chars().take(max.max(0) as usize).collect();
        Ok(Value::string(kept))
    }
}

/// `ljust`: pad on the right with spaces to the parameter width. Negative
/// padding clamps to no extra characters.
pub fn ljust(input: &Value, param: &Value) -> FilterResult {
    let pad = (param.to_integer() - input.len() as i64).max(0) as usize;
    Ok(Value::string(format!("{input}{}", " ".repeat(pad))))
}

/// `rjust`: pad on the left with spaces to the parameter width. Negative
/// padding clamps to no extra characters.
pub fn rjust(input: &Value, param: &Value) -> FilterResult {
    let pad = (param.to_integer() - input.len() as i64).max(0) as usize;
    Ok(Value::string(format!("{}{input}", " ".repeat(pad))))
}

/// `wordcount`: count of whitespace-delimited tokens.
pub fn wordcount(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::int(
        input.to_string().split_whitespace().count() as i64
    ))
}

/// `make_list`: explode the input's text into a list of one-character
/// strings.
pub fn make_list(input: &Value, _param: &Value) -> FilterResult {
    let items = input
        .to_string()
        .chars()
        .map(|c| Value::string(c.to_string()))
        .collect();
    Ok(Value::list(items))
}

/// `get_digit`: 1-indexed from the right over the string representation.
/// An index that is non-positive or past the end returns the input
/// unchanged; a hit returns the character's offset from `'0'` as an
/// integer value.
pub fn get_digit(input: &Value, param: &Value) -> FilterResult {
    let s = input.to_string();
    let i = param.to_integer();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len() as i64;
    if i <= 0 || i > len {
        return Ok(input.clone());
    }
    let c = chars[(len - i) as usize];
    Ok(Value::int(c as i64 - '0' as i64))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn addslashes_escapes_in_order() {
        assert_eq!(
            addslashes(&Value::string(r#"a\b"c'd"#), &Value::Nil),
            Ok(Value::string(r#"a\\b\"c\'d"#))
        );
        assert_eq!(
            addslashes(&Value::string("plain"), &Value::Nil),
            Ok(Value::string("plain"))
        );
    }

    #[test]
    fn capfirst_uppercases_first_character_only() {
        assert_eq!(
            capfirst(&Value::string("hello world"), &Value::Nil),
            Ok(Value::string("Hello world"))
        );
        assert_eq!(
            capfirst(&Value::string(""), &Value::Nil),
            Ok(Value::string(""))
        );
        // Non-string input has len 0 and yields the empty string
        assert_eq!(capfirst(&Value::int(5), &Value::Nil), Ok(Value::string("")));
    }

    #[test]
    fn center_pads_left_heavy() {
        assert_eq!(
            center(&Value::string("ab"), &Value::int(6)),
            Ok(Value::string("  ab  "))
        );
        // Odd remainder: the extra space goes left
        assert_eq!(
            center(&Value::string("ab"), &Value::int(5)),
            Ok(Value::string("  ab "))
        );
        // Already at or past the width: unchanged
        assert_eq!(
            center(&Value::string("abcdef"), &Value::int(4)),
            Ok(Value::string("abcdef"))
        );
        assert_eq!(
            center(&Value::string("ab"), &Value::int(0)),
            Ok(Value::string("ab"))
        );
    }

    #[test]
    fn cut_removes_all_occurrences() {
        assert_eq!(
            cut(&Value::string("String with spaces"), &Value::string(" ")),
            Ok(Value::string("Stringwithspaces"))
        );
        assert_eq!(
            cut(&Value::string("abc"), &Value::Nil),
            Ok(Value::string("abc"))
        );
    }

    #[test]
    fn case_folding() {
        assert_eq!(
            lower(&Value::string("MiXeD"), &Value::Nil),
            Ok(Value::string("mixed"))
        );
        assert_eq!(
            upper(&Value::string("MiXeD"), &Value::Nil),
            Ok(Value::string("MIXED"))
        );
    }

    #[test]
    fn title_lowercases_then_capitalizes_words() {
        assert_eq!(
            title(&Value::string("hello WORLD again"), &Value::Nil),
            Ok(Value::string("Hello World Again"))
        );
        // Internal caps are not preserved
        assert_eq!(
            title(&Value::string("McDonald"), &Value::Nil),
            Ok(Value::string("Mcdonald"))
        );
        assert_eq!(title(&Value::int(42), &Value::Nil), Ok(Value::string("")));
    }

    #[test]
    fn truncatechars_reserves_room_for_ellipsis() {
        assert_eq!(
            truncatechars(&Value::string("Hello World"), &Value::int(7)),
            Ok(Value::string("Hell..."))
        );
        assert_eq!(
            truncatechars(&Value::string("Hi"), &Value::int(7)),
            Ok(Value::string("Hi"))
        );
        // Budget below 3: hard truncation, no ellipsis
        assert_eq!(
            truncatechars(&Value::string("Hello"), &Value::int(2)),
            Ok(Value::string("He"))
        );
        assert_eq!(
            truncatechars(&Value::string("Hello"), &Value::Nil),
            Ok(Value::string(""))
        );
    }

    #[test]
    fn justification_clamps_negative_padding() {
        assert_eq!(
            ljust(&Value::string("ab"), &Value::int(5)),
            Ok(Value::string("ab   "))
        );
        assert_eq!(
            rjust(&Value::string("ab"), &Value::int(5)),
            Ok(Value::string("   ab"))
        );
        assert_eq!(
            ljust(&Value::string("abcdef"), &Value::int(-2)),
            Ok(Value::string("abcdef"))
        );
        assert_eq!(
            rjust(&Value::string("abcdef"), &Value::int(3)),
            Ok(Value::string("abcdef"))
        );
    }

    #[test]
    fn wordcount_counts_whitespace_tokens() {
        assert_eq!(
            wordcount(&Value::string("  one two\tthree  "), &Value::Nil),
            Ok(Value::int(3))
        );
        assert_eq!(wordcount(&Value::string(""), &Value::Nil), Ok(Value::int(0)));
    }

    #[test]
    fn make_list_explodes_characters() {
        assert_eq!(
            make_list(&Value::string("abc"), &Value::Nil),
            Ok(Value::list(vec![
                Value::string("a"),
                Value::string("b"),
                Value::string("c"),
            ]))
        );
        // Numbers go through their textual form
        assert_eq!(
            make_list(&Value::int(42), &Value::Nil),
            Ok(Value::list(vec![Value::string("4"), Value::string("2")]))
        );
    }

    #[test]
    fn get_digit_indexes_from_the_right() {
        assert_eq!(
            get_digit(&Value::int(1234), &Value::int(1)),
            Ok(Value::int(4))
        );
        assert_eq!(
            get_digit(&Value::int(1234), &Value::int(4)),
            Ok(Value::int(1))
        );
        // Out of range or non-positive: input unchanged, not an error
        assert_eq!(
            get_digit(&Value::int(1234), &Value::int(5)),
            Ok(Value::int(1234))
        );
        assert_eq!(
            get_digit(&Value::int(1234), &Value::int(0)),
            Ok(Value::int(1234))
        );
        assert_eq!(
            get_digit(&Value::int(1234), &Value::Nil),
            Ok(Value::int(1234))
        );
    }
}
