//! Fixed-point amounts for receipt prices and totals.
//!
//! Amounts arrive as strings such as `"35.35"`. They are held as whole cents
//! so the quarter and round-dollar checks are exact integer arithmetic.

use std::fmt;

/// Non-negative monetary amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(u64);

impl Cents {
    pub const fn from_cents(cents: u64) -> Self {
        Cents(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parses `^\d+\.\d{2}$`. Returns `None` for any other shape or when the
    /// value does not fit in a `u64` of cents.
    pub fn parse(raw: &str) -> Option<Self> {
        let (whole, fraction) = raw.split_once('.')?;
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if fraction.len() != 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let dollars = whole.parse::<u64>().ok()?;
        let minor = fraction.parse::<u64>().ok()?;
        dollars.checked_mul(100)?.checked_add(minor).map(Cents)
    }

    pub const fn is_whole_dollars(self) -> bool {
        self.0 % 100 == 0
    }

    pub const fn is_multiple_of(self, step_cents: u64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
