//! Built-in formula functions

pub mod aggregate;
pub mod mutate;
pub mod text;

/// Parse the leading numeric prefix of a string
///
/// Permissive by design: after leading whitespace, the longest prefix of the
/// form `[+-] digits [. digits] [eE [+-] digits]` is taken, so `"5 apples"`
/// parses to `5.0`. A string with no numeric prefix is not a number.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut has_digits = false;
    while bytes.get(pos).is_some_and(|b| b.is_ascii_digit()) {
        pos += 1;
        has_digits = true;
    }

    if bytes.get(pos) == Some(&b'.') {
        let mut frac = pos + 1;
        while bytes.get(frac).is_some_and(|b| b.is_ascii_digit()) {
            frac += 1;
        }
        // "5." and ".5" are numbers; "." alone is not
        if frac > pos + 1 || has_digits {
            has_digits = has_digits || frac > pos + 1;
            pos = frac;
        }
    }

    if !has_digits {
        return None;
    }

    // Only consume an exponent if it is complete; "5e" stays 5
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = exp;
        while bytes.get(exp).is_some_and(|b| b.is_ascii_digit()) {
            exp += 1;
        }
        if exp > exp_digits {
            pos = exp;
        }
    }

    s[..pos].parse().ok()
}

/// Format a number for display: integral values lose the trailing fraction
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
