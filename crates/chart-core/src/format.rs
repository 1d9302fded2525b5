// File: crates/chart-core/src/format.rs
// Summary: Decimal label patterns ("#", "0.0", "#,##0.##", "$#k") used for axis labels.
// Notes:
// - Rounding is half-to-even on the exact binary value, so 4.5 -> "4" and
//   7.5 -> "8" with "#".
// - Negative values keep their sign even when they round to zero ("-0").
// - Only unquoted literal prefix/suffix text is supported.

use crate::error::{ChartError, Result};

/// Most fraction digits a pattern may ask for.
pub const MAX_FRACTION_DIGITS: usize = 340;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelFormat {
    pattern: String,
    prefix: String,
    suffix: String,
    min_int: usize,
    min_frac: usize,
    max_frac: usize,
    grouping: Option<usize>,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::whole_numbers()
    }
}

impl LabelFormat {
    /// Pattern `"#"`: no decimal places.
    pub fn whole_numbers() -> Self {
        Self {
            pattern: "#".into(),
            prefix: String::new(),
            suffix: String::new(),
            min_int: 0,
            min_frac: 0,
            max_frac: 0,
            grouping: None,
        }
    }

    pub fn parse(pattern: &str) -> Result<Self> {
        let invalid = |reason| ChartError::InvalidPattern { pattern: pattern.to_string(), reason };
        if pattern.is_empty() {
            return Err(invalid("empty pattern"));
        }

        let is_body = |c: char| matches!(c, '#' | '0' | ',' | '.');
        let start = pattern.find(is_body).ok_or_else(|| invalid("no digit placeholders"))?;
        let end = pattern.rfind(is_body).map(|i| i + 1).unwrap_or(start);
        let (prefix, body, suffix) = (&pattern[..start], &pattern[start..end], &pattern[end..]);

        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if frac_part.contains('.') {
            return Err(invalid("multiple decimal separators"));
        }
        if frac_part.contains(',') {
            return Err(invalid("grouping separator after decimal point"));
        }
        if !int_part.contains(['#', '0']) && !frac_part.contains(['#', '0']) {
            return Err(invalid("no digit placeholders"));
        }

        // A '#' after a '0' in the integer part is meaningless; same for '0' after '#' in the fraction.
        let digits: String = int_part.chars().filter(|c| *c != ',').collect();
        if digits.trim_start_matches('#').contains('#') {
            return Err(invalid("'#' after '0' in integer part"));
        }
        if frac_part.trim_start_matches('0').contains('0') {
            return Err(invalid("'0' after '#' in fraction part"));
        }

        if frac_part.len() > MAX_FRACTION_DIGITS {
            return Err(invalid("more than 340 fraction digits"));
        }

        let grouping = int_part.rfind(',').map(|i| int_part.len() - i - 1).filter(|g| *g > 0);

        Ok(Self {
            pattern: pattern.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            min_int: digits.chars().filter(|c| *c == '0').count(),
            min_frac: frac_part.chars().filter(|c| *c == '0').count(),
            max_frac: frac_part.len(),
            grouping,
        })
    }

    pub fn pattern(&self) -> &str { &self.pattern }
    pub fn max_fraction_digits(&self) -> usize { self.max_frac }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{sign}{}\u{221e}{}", self.prefix, self.suffix);
        }

        // Exact decimal expansion of the magnitude, rounded half-to-even.
        let magnitude = format!("{:.*}", self.max_frac, value.abs());
        let (int_digits, frac_digits) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), ""));
        let negative = value.is_sign_negative();

        let mut int_str = int_digits.trim_start_matches('0').to_string();
        if int_str.len() < self.min_int {
            int_str = format!("{}{}", "0".repeat(self.min_int - int_str.len()), int_str);
        }

        let mut frac_str = frac_digits.to_string();
        while frac_str.len() > self.min_frac && frac_str.ends_with('0') {
            frac_str.pop();
        }

        if int_str.is_empty() && frac_str.is_empty() {
            int_str.push('0');
        }
        if let Some(size) = self.grouping {
            int_str = group_digits(&int_str, size);
        }

        let mut out = String::with_capacity(self.prefix.len() + int_str.len() + frac_str.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&int_str);
        if !frac_str.is_empty() {
            out.push('.');
            out.push_str(&frac_str);
        }
        out.push_str(&self.suffix);
        out
    }
}

fn group_digits(digits: &str, size: usize) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (n - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
