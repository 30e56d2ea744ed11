//! Text forms of a time step.
//!
//! Input files are named after the time step that produced them, so the
//! string written into a filename has to match the producer's number
//! formatting exactly. Both layouts in use are spelled out here instead of
//! relying on whatever `Display` happens to print.

use serde::{Deserialize, Serialize};

use super::type_lib::NumericData;

/// Number layout used for the `{dt}` token of an input filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DtFormat {
    /// `str(float)` of the plotting scripts: `0.1`, `0.0001`, `1e-05`, `10.0`.
    #[default]
    Python,
    /// `Double.toString` of the simulation: `0.1`, `1.0E-4`, `10.0`.
    Java,
}

impl DtFormat {
    pub fn format(&self, value: NumericData) -> String {
        match self {
            DtFormat::Python => python_repr(value),
            DtFormat::Java => java_repr(value),
        }
    }
}

/// How a time step is written in a legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LabelStyle {
    /// `%.{precision}e`, e.g. `1e-01`.
    Scientific { precision: usize },
    /// Same digits as the filename token in Python layout.
    Plain,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle::Scientific { precision: 0 }
    }
}

impl LabelStyle {
    pub fn format(&self, value: NumericData) -> String {
        match self {
            LabelStyle::Scientific { precision } => scientific(value, *precision),
            LabelStyle::Plain => python_repr(value),
        }
    }
}

/// Shortest round-trip digits of `|value|` and its decimal exponent,
/// so that `value = 0.d1d2d3... * 10^(exp + 1)`.
fn decompose(value: NumericData) -> (String, i32) {
    let text = format!("{:e}", value.abs());
    let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    (digits, exp.parse().unwrap_or(0))
}

fn fixed(digits: &str, exp: i32) -> String {
    if exp >= 0 {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    }
}

fn sign(value: NumericData) -> &'static str {
    if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    }
}

pub fn python_repr(value: NumericData) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return format!("{}inf", sign(value));
    }
    let (digits, exp) = decompose(value);
    let body = if (-4..16).contains(&exp) {
        fixed(&digits, exp)
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        format!("{}e{}{:02}", mantissa, if exp < 0 { '-' } else { '+' }, exp.abs())
    };
    format!("{}{}", sign(value), body)
}

pub fn java_repr(value: NumericData) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return format!("{}Infinity", sign(value));
    }
    if value == 0.0 {
        return format!("{}0.0", sign(value));
    }
    let (digits, exp) = decompose(value);
    let body = if (-3..7).contains(&exp) {
        fixed(&digits, exp)
    } else {
        let fraction = if digits.len() > 1 { &digits[1..] } else { "0" };
        format!("{}.{}E{}", &digits[..1], fraction, exp)
    };
    format!("{}{}", sign(value), body)
}

/// `%.{precision}e` with a signed, at least two-digit exponent.
pub fn scientific(value: NumericData, precision: usize) -> String {
    if !value.is_finite() {
        return python_repr(value);
    }
    let text = format!("{:.*e}", precision, value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            format!("{}e{}{:02}", mantissa, if exp < 0 { '-' } else { '+' }, exp.abs())
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_layout_matches_str_of_float() {
        assert_eq!(python_repr(0.1), "0.1");
        assert_eq!(python_repr(0.01), "0.01");
        assert_eq!(python_repr(0.001), "0.001");
        assert_eq!(python_repr(0.0001), "0.0001");
        assert_eq!(python_repr(0.00001), "1e-05");
        assert_eq!(python_repr(0.000015), "1.5e-05");
        assert_eq!(python_repr(10.0), "10.0");
        assert_eq!(python_repr(5.0), "5.0");
        assert_eq!(python_repr(0.5), "0.5");
        assert_eq!(python_repr(12345.678), "12345.678");
        assert_eq!(python_repr(1e16), "1e+16");
        assert_eq!(python_repr(0.0), "0.0");
        assert_eq!(python_repr(-2.5), "-2.5");
    }

    #[test]
    fn java_layout_matches_double_to_string() {
        assert_eq!(java_repr(0.1), "0.1");
        assert_eq!(java_repr(0.001), "0.001");
        assert_eq!(java_repr(0.0001), "1.0E-4");
        assert_eq!(java_repr(0.00025), "2.5E-4");
        assert_eq!(java_repr(10.0), "10.0");
        assert_eq!(java_repr(1e7), "1.0E7");
        assert_eq!(java_repr(0.0), "0.0");
    }

    #[test]
    fn scientific_label_uses_two_digit_exponent() {
        assert_eq!(scientific(0.1, 0), "1e-01");
        assert_eq!(scientific(0.0001, 0), "1e-04");
        assert_eq!(scientific(10.0, 0), "1e+01");
        assert_eq!(scientific(0.00025, 1), "2.5e-04");
    }

    #[test]
    fn styles_dispatch_to_the_right_layout() {
        assert_eq!(DtFormat::Python.format(0.0001), "0.0001");
        assert_eq!(DtFormat::Java.format(0.0001), "1.0E-4");
        assert_eq!(LabelStyle::default().format(0.01), "1e-02");
        assert_eq!(LabelStyle::Plain.format(1.0), "1.0");
    }
}
