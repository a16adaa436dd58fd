use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Cents;

/// Receipt payload exactly as submitted by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Receipt whose fields have passed validation and been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    /// Untrimmed, as submitted.
    pub short_description: String,
    pub price: Cents,
}

/// Opaque identifier handed back on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accepts any textual UUID form; renders back in hyphenated lowercase.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Stored result of a successful submission. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: u64,
    pub breakdown: Vec<String>,
}

impl ScoredReceipt {
    pub fn points_view(&self) -> PointsView {
        PointsView {
            points: self.points,
        }
    }

    pub fn breakdown_view(&self) -> BreakdownView {
        BreakdownView {
            points: self.points,
            breakdown: self.breakdown.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedView {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownView {
    pub points: u64,
    pub breakdown: Vec<String>,
}
