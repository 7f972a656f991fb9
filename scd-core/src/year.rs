//! IMS year values and the rule used to compare them.
//!
//! Years reach the dashboard from two places: the spreadsheet cell (always
//! text once read from CSV) and the x coordinate of a chart click (JSON, which
//! may be a number or a string depending on how the browser reports the
//! category). Both sides are normalised to a [`YearKey`] before comparing:
//!
//! 1. surrounding whitespace is trimmed;
//! 2. text that parses as a finite, integral number becomes its integer
//!    rendering, so `"2020"`, `"2020.0"`, `2020` and `2020.0` are one key;
//! 3. anything else is kept verbatim (e.g. `"FY21"`).

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Canonical comparison key for an IMS year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct YearKey(String);

impl YearKey {
    /// Normalise a textual year.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match integral_value(trimmed) {
            Some(n) => YearKey(n.to_string()),
            None => YearKey(trimmed.to_string()),
        }
    }

    /// Normalise a year reported by a chart click.
    ///
    /// Returns `None` for JSON values that cannot name a year (`null`,
    /// booleans, arrays, objects); such clicks match no record.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(YearKey::parse(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(YearKey(i.to_string()))
                } else {
                    n.as_f64().map(|f| match integral_float(f) {
                        Some(i) => YearKey(i.to_string()),
                        None => YearKey(n.to_string()),
                    })
                }
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as an integer when it is a numeric year.
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse::<i64>().ok()
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Numeric years sort ascending before any categorical label; labels sort
/// lexicographically among themselves.
impl Ord for YearKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for YearKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An IMS year cell as read from the spreadsheet plus its comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImsYear {
    raw: String,
    key: YearKey,
}

impl ImsYear {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            key: YearKey::parse(raw),
        }
    }

    /// The cell text exactly as loaded.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn key(&self) -> &YearKey {
        &self.key
    }

    /// True when a clicked year names this year under the normalisation rule.
    pub fn matches(&self, key: &YearKey) -> bool {
        &self.key == key
    }
}

fn integral_value(text: &str) -> Option<i64> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(i);
    }
    text.parse::<f64>().ok().and_then(integral_float)
}

fn integral_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
