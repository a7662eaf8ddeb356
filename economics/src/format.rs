//! Presentation helpers
//!
//! Formatters are plain values handed to whoever renders output, so callers
//! pick the locale and tests can assert on structured numbers instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_SCALE, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Put a space between the symbol and the digits
    pub symbol_spaced: bool,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: usize,
}

impl CurrencyFormat {
    /// Indonesian rupiah, e.g. `Rp 1.000.000`
    pub fn idr() -> Self {
        Self {
            symbol: "Rp".to_string(),
            symbol_spaced: true,
            thousands_separator: '.',
            decimal_separator: ',',
            fraction_digits: 0,
        }
    }

    /// US dollars, e.g. `$1,000,000.00`
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            symbol_spaced: false,
            thousands_separator: ',',
            decimal_separator: '.',
            fraction_digits: 2,
        }
    }

    /// Look up a preset by its config name (`idr`, `usd`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "idr" => Some(Self::idr()),
            "usd" => Some(Self::usd()),
            _ => None,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return "-".to_string();
        }

        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut digits = group_thousands(int_part, self.thousands_separator);
        if let Some(frac) = frac_part {
            digits.push(self.decimal_separator);
            digits.push_str(frac);
        }

        // Rounding can turn a tiny negative into zero; don't print "-0".
        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
        let space = if self.symbol_spaced { " " } else { "" };

        format!("{}{}{}{}", sign, self.symbol, space, digits)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::idr()
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormat {
    /// chrono `strftime` pattern
    pub pattern: String,
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// `16 October 2026`
    pub fn long_date() -> Self {
        Self::new("%d %B %Y")
    }

    /// `2026-10-16`
    pub fn iso_date() -> Self {
        Self::new("%Y-%m-%d")
    }

    pub fn format(&self, at: &DateTime<Utc>) -> String {
        at.format(&self.pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::long_date()
    }
}

/// Time left until a campaign closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub total_seconds: i64,
    pub expired: bool,
}

impl TimeRemaining {
    /// The clock is an argument so rendering stays deterministic.
    pub fn between(now: DateTime<Utc>, deadline: DateTime<Utc>) -> Self {
        let total_seconds = (deadline - now).num_seconds();
        if total_seconds <= 0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                total_seconds: 0,
                expired: true,
            };
        }

        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            total_seconds,
            expired: false,
        }
    }

    pub fn label(&self) -> String {
        if self.expired {
            return "Closed".to_string();
        }

        if self.days > 0 {
            if self.hours > 0 {
                format!("{} {}", plural(self.days, "day"), plural(self.hours, "hour"))
            } else {
                plural(self.days, "day")
            }
        } else if self.hours > 0 {
            if self.minutes > 0 {
                format!(
                    "{} {}",
                    plural(self.hours, "hour"),
                    plural(self.minutes, "minute")
                )
            } else {
                plural(self.hours, "hour")
            }
        } else if self.minutes > 0 {
            plural(self.minutes, "minute")
        } else {
            "less than a minute".to_string()
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// Percent of the funding target raised so far, capped at 100 for display.
pub fn funding_progress(target_amount: f64, raised_amount: f64) -> f64 {
    if !(target_amount > 0.0) || raised_amount.is_nan() {
        return 0.0;
    }
    (raised_amount / target_amount * PERCENT_SCALE).clamp(0.0, PERCENT_SCALE)
}
