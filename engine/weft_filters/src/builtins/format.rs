//! Printf-style formatting for the `stringformat` filter.
//!
//! Supports `%`-directives with optional flags, width, and precision:
//!
//! - `%s`: the value's canonical text (precision truncates)
//! - `%d` / `%i`: decimal integer
//! - `%x` / `%X` / `%o` / `%b`: radix-formatted integer
//! - `%f`: fixed-point float (precision defaults to 6)
//! - `%%`: a literal percent sign
//!
//! Flags: `-` left-aligns within the width, `0` zero-pads numbers, `+`
//! forces a sign on non-negative numbers. An unrecognized directive is
//! emitted unchanged so a typo stays visible in the output instead of
//! disappearing.

use weft_value::Value;

use crate::errors::FilterResult;

/// `stringformat`: apply the parameter as a printf-style format template
/// against the input's raw underlying value.
pub fn stringformat(input: &Value, param: &Value) -> FilterResult {
    Ok(Value::string(render(&param.to_string(), input)))
}

/// One parsed `%`-directive.
struct Directive {
    /// The full directive text, for unknown-verb passthrough.
    raw: String,
    left_align: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    verb: char,
}

fn render(template: &str, value: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match parse_directive(rest) {
            Some((directive, consumed)) => {
                out.push_str(&format_directive(value, &directive));
                rest = &rest[consumed..];
            }
            None => {
                // Trailing lone '%': emit it literally
                out.push('%');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse the directive at the start of `s` (which begins with `%`).
/// Returns the directive and the number of bytes consumed.
fn parse_directive(s: &str) -> Option<(Directive, usize)> {
    let bytes = s.as_bytes();
    let mut i = 1;

    let mut left_align = false;
    let mut zero_pad = false;
    let mut plus_sign = false;
    while i < bytes.len() {
        match bytes[i] {
            b'-' => left_align = true,
            b'0' => zero_pad = true,
            b'+' => plus_sign = true,
            _ => break,
        }
        i += 1;
    }

    let width_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let width = s[width_start..i].parse::<usize>().ok();

    let mut precision = None;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let precision_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        precision = Some(s[precision_start..i].parse::<usize>().unwrap_or(0));
    }

    let verb = s[i..].chars().next()?;
    i += verb.len_utf8();

    Some((
        Directive {
            raw: s[..i].to_string(),
            left_align,
            zero_pad,
            plus_sign,
            width,
            precision,
            verb,
        },
        i,
    ))
}

fn format_directive(value: &Value, spec: &Directive) -> String {
    match spec.verb {
        '%' => "%".to_string(),
        's' => {
            let mut text = value.to_string();
            if let Some(precision) = spec.precision {
                text = text.chars().take(precision).collect();
            }
            apply_width(&text, spec)
        }
        'd' | 'i' | 'x' | 'X' | 'o' | 'b' => format_integer(value.to_integer(), spec),
        'f' => format_float(value.to_float(), spec),
        _ => spec.raw.clone(),
    }
}

/// Format an integer: radix digits per the verb, sign ahead of any
/// zero-padding, width applied last.
fn format_integer(n: i64, spec: &Directive) -> String {
    let (is_negative, abs) = if n < 0 {
        (true, n.unsigned_abs())
    } else {
        (false, n as u64)
    };
    let digits = match spec.verb {
        'x' => format!("{abs:x}"),
        'X' => format!("{abs:X}"),
        'o' => format!("{abs:o}"),
        'b' => format!("{abs:b}"),
        _ => format!("{abs}"),
    };
    assemble_number(sign_str(is_negative, spec.plus_sign), &digits, spec)
}

fn format_float(f: f64, spec: &Directive) -> String {
    let precision = spec.precision.unwrap_or(6);
    let is_negative = f.is_sign_negative() && !f.is_nan();
    let digits = format!("{:.precision$}", f.abs());
    assemble_number(sign_str(is_negative, spec.plus_sign), &digits, spec)
}

fn sign_str(is_negative: bool, plus_sign: bool) -> &'static str {
    if is_negative {
        "-"
    } else if plus_sign {
        "+"
    } else {
        ""
    }
}

/// Zero-padding goes between the sign and the digits; otherwise the number
/// is space-padded like any other text.
fn assemble_number(sign: &str, digits: &str, spec: &Directive) -> String {
    if spec.zero_pad && !spec.left_align {
        if let Some(width) = spec.width {
            let core_len = sign.len() + digits.chars().count();
            if core_len < width {
                return format!("{sign}{}{digits}", "0".repeat(width - core_len));
            }
        }
    }
    apply_width(&format!("{sign}{digits}"), spec)
}

fn apply_width(text: &str, spec: &Directive) -> String {
    let Some(width) = spec.width else {
        return text.to_string();
    };
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = " ".repeat(width - len);
    if spec.left_align {
        format!("{text}{pad}")
    } else {
        format!("{pad}{text}")
    }
}
