//! Numbers with SI prefixes and a unit suffix, e.g. `1.5GHz` or `-20dB`.
//!
//! Range fields in the axis dialog accept and show values this way. Which
//! prefixes a field may use is configured with a prefix string such as
//! `"pnum kMG"`, where a space stands for "no prefix".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiValueError {
    #[error("no value entered")]
    Empty,
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("prefix '{0}' is not allowed here")]
    PrefixNotAllowed(char),
    #[error("unknown SI prefix '{0}'")]
    UnknownPrefix(char),
}

/// Multiplier for a prefix character, `None` if it is not an SI prefix.
fn multiplier(prefix: char) -> Option<f64> {
    match prefix {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' | 'µ' => Some(1e-6),
        'm' => Some(1e-3),
        ' ' => Some(1.0),
        'k' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        'T' => Some(1e12),
        _ => None,
    }
}

/// Ordered set of prefixes a field accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct SiPrefixes {
    // sorted by ascending multiplier
    allowed: Vec<(char, f64)>,
}

impl Default for SiPrefixes {
    fn default() -> Self {
        Self::parse("pnum kMG").unwrap_or(Self {
            allowed: vec![(' ', 1.0)],
        })
    }
}

impl SiPrefixes {
    /// Parse a prefix string like `"pnum kMG"`.
    ///
    /// ```
    /// # use xyplot_axes::data::si_value::SiPrefixes;
    /// let p = SiPrefixes::parse(" kM").unwrap();
    /// assert!(p.allows('k'));
    /// assert!(!p.allows('m'));
    /// ```
    pub fn parse(prefixes: &str) -> Result<Self, SiValueError> {
        let mut allowed: Vec<(char, f64)> = Vec::new();
        for c in prefixes.chars() {
            let c = if c == 'µ' { 'u' } else { c };
            let mult = multiplier(c).ok_or(SiValueError::UnknownPrefix(c))?;
            if !allowed.iter().any(|(p, _)| *p == c) {
                allowed.push((c, mult));
            }
        }
        allowed.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(Self { allowed })
    }

    pub fn allows(&self, prefix: char) -> bool {
        let prefix = if prefix == 'µ' { 'u' } else { prefix };
        self.allowed.iter().any(|(p, _)| *p == prefix)
    }

    /// Prefix used to display `value`: the largest one not exceeding it.
    fn choose(&self, value: f64) -> (char, f64) {
        let abs = value.abs();
        if abs == 0.0 && self.allows(' ') {
            return (' ', 1.0);
        }
        self.allowed
            .iter()
            .rev()
            .find(|(_, m)| *m <= abs)
            .or_else(|| self.allowed.first())
            .copied()
            .unwrap_or((' ', 1.0))
    }

    /// Smallest allowed prefix with a multiplier above `mult`.
    fn next_above(&self, mult: f64) -> Option<(char, f64)> {
        self.allowed.iter().find(|(_, m)| *m > mult).copied()
    }
}

/// `mantissa` with at most `precision` significant digits, trailing zeros removed.
fn round_mantissa(mantissa: f64, precision: usize) -> String {
    let magnitude = if mantissa == 0.0 {
        0
    } else {
        mantissa.abs().log10().floor() as i32
    };
    // f64 carries at most 17 significant digits
    let precision = precision.clamp(1, 17) as i32;
    let decimals = (precision - 1 - magnitude).max(0) as usize;
    let mut digits = format!("{:.*}", decimals, mantissa);
    if digits.contains('.') {
        digits = digits.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    if digits == "-0" {
        digits = "0".to_string();
    }
    digits
}

/// Render `value` with the best-fitting allowed prefix, at most `precision`
/// significant digits and trailing zeros removed.
///
/// ```
/// # use xyplot_axes::data::si_value::{format_si, SiPrefixes};
/// let p = SiPrefixes::default();
/// assert_eq!(format_si(1.5e9, "Hz", &p, 6), "1.5GHz");
/// assert_eq!(format_si(-3.0, "dB", &p, 6), "-3dB");
/// assert_eq!(format_si(999_999.9, "Hz", &p, 6), "1MHz");
/// ```
pub fn format_si(value: f64, unit: &str, prefixes: &SiPrefixes, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}{}", value, unit);
    }
    let (mut prefix, mut mult) = prefixes.choose(value);
    let mut digits = round_mantissa(value / mult, precision);
    // Rounding can carry the mantissa up to the next prefix, e.g. 999.9999k -> 1000k.
    if let Some((next, next_mult)) = prefixes.next_above(mult) {
        let rounded = digits.parse::<f64>().unwrap_or(0.0).abs();
        if rounded >= (next_mult / mult) * (1.0 - 1e-12) {
            prefix = next;
            mult = next_mult;
            digits = round_mantissa(value / mult, precision);
        }
    }
    if prefix == ' ' {
        format!("{}{}", digits, unit)
    } else {
        format!("{}{}{}", digits, prefix, unit)
    }
}

/// Parse user input such as `"1.5 GHz"`, `"10n"` or `"-20"`.
///
/// The unit suffix is optional. A prefix must be in `prefixes`.
pub fn parse_si(text: &str, unit: &str, prefixes: &SiPrefixes) -> Result<f64, SiValueError> {
    let mut s = text.trim();
    if s.is_empty() {
        return Err(SiValueError::Empty);
    }
    if !unit.is_empty() {
        if let Some(stripped) = s.strip_suffix(unit) {
            s = stripped.trim_end();
        }
    }
    let mut mult = 1.0;
    if let Some(last) = s.chars().last() {
        if let Some(m) = multiplier(last).filter(|_| last != ' ') {
            if !prefixes.allows(last) {
                return Err(SiValueError::PrefixNotAllowed(last));
            }
            mult = m;
            s = s[..s.len() - last.len_utf8()].trim_end();
        }
    }
    if s.is_empty() {
        return Err(SiValueError::InvalidNumber(text.trim().to_string()));
    }
    let number: f64 = s
        .parse()
        .map_err(|_| SiValueError::InvalidNumber(text.trim().to_string()))?;
    if !number.is_finite() {
        return Err(SiValueError::InvalidNumber(text.trim().to_string()));
    }
    Ok(number * mult)
}
