//! Host canonical rendering.
//!
//! The baseline textual form of every `Value` kind, fixed to the modern
//! host generation's behavior:
//!
//! - byte-sequences render as `b` + quoted body
//! - character-sequences render as a bare quoted body
//! - booleans render textually (`True` / `False`)
//! - containers recurse with their standard brackets and `, ` separators
//!
//! Quote selection for both string-like kinds: `'` unless the content
//! contains `'` and no `"`, in which case `"`. Controls and non-printable
//! bytes escape as `\xHH`; non-ASCII text characters outside the control
//! ranges are emitted literally.
//!
//! Downstream code infers structure from this output (the leading `b` of a
//! byte-sequence repr); see the crate docs.

use std::fmt::Write as _;

use crate::Value;

/// Canonical rendering of a value, recursing into containers.
pub fn repr(value: &Value) -> String {
    match value {
        Value::None => "None".to_string(),
        Value::Bool(b) => bool_text(*b).to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => format_float(*x),
        Value::Complex { re, im } => format_complex(*re, *im),
        Value::Bytes(data) => {
            let mut out = String::from("b");
            out.push_str(&quote_bytes(data));
            out
        }
        Value::Str(text) => quote_str(text),
        Value::List(items) => join_reprs(items, "[", "]"),
        Value::Tuple(items) => {
            if items.len() == 1 {
                format!("({},)", repr(&items[0]))
            } else {
                join_reprs(items, "(", ")")
            }
        }
        Value::Set(items) => {
            if items.is_empty() {
                "set()".to_string()
            } else {
                join_reprs(items, "{", "}")
            }
        }
        Value::Dict(entries) => {
            let mut out = String::from("{");
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&repr(k));
                out.push_str(": ");
                out.push_str(&repr(v));
            }
            out.push('}');
            out
        }
        Value::Other(text) => text.clone(),
    }
}

/// Textual boolean form (never numeric aliasing).
#[inline]
pub fn bool_text(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn join_reprs(items: &[Value], open: &str, close: &str) -> String {
    let mut out = String::from(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&repr(item));
    }
    out.push_str(close);
    out
}

/// Float form that always shows a fractional point (`1.0`, not `1`) or an
/// exponent, with `inf` / `-inf` / `nan` spelled exactly so.
///
/// Exponent notation kicks in at the host thresholds: magnitude at least
/// 1e16, or nonzero magnitude below 1e-4.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let magnitude = x.abs();
    if magnitude >= 1e16 || (x != 0.0 && magnitude < 1e-4) {
        return format_exponent(x);
    }
    let s = format!("{x}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Exponent form with a signed, at-least-two-digit exponent
/// (`1e+300`, `1e-05`), the host convention.
fn format_exponent(x: f64) -> String {
    let formatted = format!("{x:e}");
    // `LowerExp` emits exactly one `e`.
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exp),
            };
            if digits.len() < 2 {
                format!("{mantissa}e{sign}0{digits}")
            } else {
                format!("{mantissa}e{sign}{digits}")
            }
        }
        None => formatted,
    }
}

/// Complex form: `2j` when the real part is a positive zero, else
/// `(1+2j)` / `(1-2j)`. Components drop the trailing `.0` the way the
/// host does for complex parts.
pub fn format_complex(re: f64, im: f64) -> String {
    let im_part = complex_part(im);
    if re == 0.0 && re.is_sign_positive() && !re.is_nan() {
        format!("{im_part}j")
    } else {
        let re_part = complex_part(re);
        if im_part.starts_with('-') {
            format!("({re_part}{im_part}j)")
        } else {
            format!("({re_part}+{im_part}j)")
        }
    }
}

fn complex_part(x: f64) -> String {
    // Complex parts use the float form minus the trailing `.0`, keeping
    // the exponent thresholds.
    let s = format_float(x);
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => s,
    }
}

/// Quoted body for a byte-sequence, without the `b` prefix.
pub fn quote_bytes(data: &[u8]) -> String {
    let quote = pick_quote(
        data.contains(&b'\''),
        data.contains(&b'"'),
    );
    let mut out = String::with_capacity(data.len() + 2);
    out.push(quote);
    for &b in data {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if char::from(b) == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\x{b:02x}");
            }
        }
    }
    out.push(quote);
    out
}

/// Quoted body for a character-sequence. Control characters escape as
/// `\xHH`; other non-ASCII characters are emitted literally.
pub fn quote_str(text: &str) -> String {
    let quote = pick_quote(text.contains('\''), text.contains('"'));
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ if c == quote => {
                out.push('\\');
                out.push(quote);
            }
            _ if c.is_control() => {
                // Cc is confined to U+0000..U+009F, so two hex digits
                // always suffice.
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            _ => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn pick_quote(has_single: bool, has_double: bool) -> char {
    if has_single && !has_double {
        '"'
    } else {
        '\''
    }
}

#[cfg(test)]
mod tests;
