// src/plot/format.rs
use crate::error::AtlasError;

/// Numeral-style number pattern such as `0`, `0,0`, `0.00` or `$100,000`.
///
/// Supported pieces: a leading `$`, an integer part made of digits with optional
/// `,` (any comma turns on thousands grouping), an optional `.` plus digits giving
/// the number of decimals, and a trailing `%` (the value is multiplied by 100).
#[derive(Debug, Clone, PartialEq)]
pub struct NumeralFormat {
    currency: bool,
    thousands: bool,
    decimals: usize,
    percent: bool,
}

impl NumeralFormat {
    pub fn parse(pattern: &str) -> Result<Self, AtlasError> {
        let invalid = || AtlasError::InvalidFormat(pattern.to_string());

        let (currency, rest) = match pattern.strip_prefix('$') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        let (percent, rest) = match rest.strip_suffix('%') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let (integer, fraction) = match rest.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rest, None),
        };

        let integer_ok = integer.starts_with(|c: char| c.is_ascii_digit())
            && integer.ends_with(|c: char| c.is_ascii_digit())
            && integer.chars().all(|c| c.is_ascii_digit() || c == ',')
            && !integer.contains(",,");
        if !integer_ok {
            return Err(invalid());
        }

        let decimals = match fraction {
            Some(f) if !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()) => f.len(),
            Some(_) => return Err(invalid()),
            None => 0,
        };

        Ok(Self {
            currency,
            thousands: integer.contains(','),
            decimals,
            percent,
        })
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "NaN".to_string();
        }

        let scaled = if self.percent { value * 100.0 } else { value };
        let factor = 10f64.powi(self.decimals as i32);
        let rounded = (scaled.abs() * factor).round() / factor;
        let digits = format!("{:.*}", self.decimals, rounded);

        let (integer, fraction) = match digits.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (digits.clone(), None),
        };
        let integer = if self.thousands { group_thousands(&integer) } else { integer };

        let mut out = String::new();
        if scaled < 0.0 && rounded != 0.0 {
            out.push('-');
        }
        if self.currency {
            out.push('$');
        }
        out.push_str(&integer);
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(&fraction);
        }
        if self.percent {
            out.push('%');
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
