//! HTML escaping, tag stripping, and URL encoding filters.

use std::sync::LazyLock;

use regex::Regex;
use weft_value::Value;

use crate::errors::FilterResult;

/// Matches any `<...>` span, shortest first.
#[expect(clippy::expect_used, reason = "the pattern is a valid literal")]
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("<[^>]*?>").expect("valid tag pattern")
});

/// `escape`: replace HTML-significant characters with entities.
///
/// The ampersand is replaced first; otherwise the entities inserted for the
/// other characters would themselves be escaped. Applying the filter twice
/// is therefore *not* idempotent (`&` -> `&amp;` -> `&amp;amp;`), which is
/// documented behavior, not a bug.
pub fn escape(input: &Value, _param: &Value) -> FilterResult {
    let escaped = input
        .to_string()
        .replace('&', "&amp;")
        .replace('>', "&gt;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;");
    Ok(Value::string(escaped))
}

/// `safe`: identity. Marks content as pre-escaped for a downstream
/// auto-escape policy; that policy itself lives in the evaluator.
pub fn safe(input: &Value, _param: &Value) -> FilterResult {
    Ok(input.clone())
}

/// `linebreaksbr`: replace newlines with `<br />`.
pub fn linebreaksbr(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::string(input.to_string().replace('\n', "<br />")))
}

/// `striptags`: strip any `<...>` span, then trim surrounding whitespace.
pub fn striptags(input: &Value, _param: &Value) -> FilterResult {
    let s = input.to_string();
    Ok(Value::string(ANY_TAG.replace_all(&s, "").trim().to_string()))
}

/// `removetags`: strip only `<tag>`, `</tag>`, and `<tag/>` forms for the
/// comma-separated tag names in the parameter, then trim surrounding
/// whitespace.
pub fn removetags(input: &Value, param: &Value) -> FilterResult {
    let s = input.to_string();
    let escaped: Vec<String> = param
        .to_string()
        .split(',')
        .filter(|tag| !tag.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        return Ok(Value::string(s.trim().to_string()));
    }
    let pattern = format!("</?(?:{})/?>", escaped.join("|"));
    // The alternation is built from escaped literals, so compilation cannot
    // fail; fall back to the trimmed input if it somehow does.
    let Ok(re) = Regex::new(&pattern) else {
        return Ok(Value::string(s.trim().to_string()));
    };
    Ok(Value::string(re.replace_all(&s, "").trim().to_string()))
}

/// `urlencode`: percent-encode for use in a URL query component.
pub fn urlencode(input: &Value, _param: &Value) -> FilterResult {
    Ok(Value::string(
        urlencoding::encode(&input.to_string()).into_owned(),
    ))
}
