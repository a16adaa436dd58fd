//! Receipt intake, validation, points scoring, and lookup.
//!
//! Submissions flow through [`validation::validate`], which produces a
//! [`ValidatedReceipt`] holding parsed dates and integer-cent amounts. The
//! [`PointsEngine`] only accepts that type, so scoring is infallible. The
//! [`ReceiptService`] ties both to a [`ReceiptStore`] and the router exposes
//! the HTTP contract.

pub mod domain;
pub mod engine;
pub mod money;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BreakdownView, Item, PointsView, ProcessedView, Receipt, ReceiptId, ScoredReceipt,
    ValidatedItem, ValidatedReceipt,
};
pub use engine::{PointsEngine, PointsOutcome, RuleKind, ScoreComponent};
pub use money::Cents;
pub use repository::{InMemoryReceiptStore, ReceiptStore, StoreError};
pub use router::receipt_router;
pub use service::{ReceiptError, ReceiptService};
pub use validation::{validate, ValidationError};
