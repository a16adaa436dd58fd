mod rules;

use serde::Serialize;
use tracing::{debug, trace};

use super::domain::ValidatedReceipt;

/// Stateless scorer applying the fixed rule table to a validated receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsEngine;

impl PointsEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &ValidatedReceipt) -> PointsOutcome {
        let mut components = Vec::new();
        for rule in rules::RULES.iter() {
            let before = components.len();
            (rule.apply)(receipt, &mut components);
            trace!(rule = ?rule.kind, lines = components.len() - before, "rule evaluated");
        }

        let points = components
            .iter()
            .fold(0u64, |total, component| total.saturating_add(component.points));

        debug!(
            retailer = %receipt.retailer,
            points,
            lines = components.len(),
            "points calculated for receipt"
        );

        PointsOutcome { points, components }
    }
}

/// Which rule produced a breakdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

/// One contribution to the total, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub rule: RuleKind,
    pub points: u64,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsOutcome {
    pub points: u64,
    pub components: Vec<ScoreComponent>,
}

impl PointsOutcome {
    pub fn breakdown(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| component.line.clone())
            .collect()
    }
}
