use chrono::{Datelike, Timelike};

use super::super::domain::ValidatedReceipt;
use super::super::money::Cents;
use super::{RuleKind, ScoreComponent};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER_CENTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// `price * 0.2` in cents is `cents / 5`; as whole points it is `cents / 500`.
const DESCRIPTION_PRICE_DIVISOR: u64 = 500;

pub(crate) struct Rule {
    pub kind: RuleKind,
    pub apply: fn(&ValidatedReceipt, &mut Vec<ScoreComponent>),
}

/// Evaluation order is part of the breakdown contract.
pub(crate) const RULES: [Rule; 7] = [
    Rule {
        kind: RuleKind::RetailerName,
        apply: retailer_name,
    },
    Rule {
        kind: RuleKind::RoundDollarTotal,
        apply: round_dollar_total,
    },
    Rule {
        kind: RuleKind::QuarterMultipleTotal,
        apply: quarter_multiple_total,
    },
    Rule {
        kind: RuleKind::ItemPairs,
        apply: item_pairs,
    },
    Rule {
        kind: RuleKind::DescriptionLength,
        apply: description_length,
    },
    Rule {
        kind: RuleKind::OddPurchaseDay,
        apply: odd_purchase_day,
    },
    Rule {
        kind: RuleKind::AfternoonPurchase,
        apply: afternoon_purchase,
    },
];

fn retailer_name(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    out.push(ScoreComponent {
        rule: RuleKind::RetailerName,
        points: count,
        line: format!(
            "{count} points - retailer name ({}) has {count} alphanumeric characters",
            receipt.retailer
        ),
    });
}

fn round_dollar_total(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    if receipt.total.is_whole_dollars() {
        out.push(ScoreComponent {
            rule: RuleKind::RoundDollarTotal,
            points: ROUND_DOLLAR_POINTS,
            line: format!(
                "{ROUND_DOLLAR_POINTS} points - total is a round dollar amount with no cents"
            ),
        });
    }
}

fn quarter_multiple_total(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    if receipt.total.is_multiple_of(QUARTER_CENTS) {
        out.push(ScoreComponent {
            rule: RuleKind::QuarterMultipleTotal,
            points: QUARTER_MULTIPLE_POINTS,
            line: format!("{QUARTER_MULTIPLE_POINTS} points - total is a multiple of 0.25"),
        });
    }
}

fn item_pairs(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    let count = receipt.items.len() as u64;
    let pairs = count / 2;
    let points = pairs * POINTS_PER_ITEM_PAIR;

    out.push(ScoreComponent {
        rule: RuleKind::ItemPairs,
        points,
        line: format!(
            "{points} points - {count} items ({pairs} pairs @ {POINTS_PER_ITEM_PAIR} points each)"
        ),
    });
}

fn description_length(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    for item in &receipt.items {
        let trimmed = item.short_description.trim();
        let length = trimmed.chars().count();
        if length == 0 || length % 3 != 0 {
            continue;
        }

        let points = item.price.cents().div_ceil(DESCRIPTION_PRICE_DIVISOR);
        let raw = fifth_of(item.price);

        out.push(ScoreComponent {
            rule: RuleKind::DescriptionLength,
            points,
            line: format!(
                "{points} points - \"{trimmed}\" is {length} characters (a multiple of 3), \
                 item price {} * 0.2 = {raw} which is rounded to: {points} points",
                item.price
            ),
        });
    }
}

fn odd_purchase_day(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    if receipt.purchase_date.day() % 2 == 1 {
        out.push(ScoreComponent {
            rule: RuleKind::OddPurchaseDay,
            points: ODD_DAY_POINTS,
            line: format!("{ODD_DAY_POINTS} points - purchase day is odd"),
        });
    }
}

fn afternoon_purchase(receipt: &ValidatedReceipt, out: &mut Vec<ScoreComponent>) {
    if matches!(receipt.purchase_time.hour(), 14 | 15) {
        out.push(ScoreComponent {
            rule: RuleKind::AfternoonPurchase,
            points: AFTERNOON_POINTS,
            line: format!("{AFTERNOON_POINTS} points - purchase time is between 2:00pm and 4:00pm"),
        });
    }
}

/// `amount * 0.2` rounded to the nearest cent. The remainder is in fifths of
/// a cent so there is never a tie.
fn fifth_of(amount: Cents) -> Cents {
    let cents = amount.cents();
    let rounded = cents / 5 + u64::from(cents % 5 >= 3);
    Cents::from_cents(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifth_of_rounds_to_nearest_cent() {
        assert_eq!(fifth_of(Cents::from_cents(245)), Cents::from_cents(49));
        assert_eq!(fifth_of(Cents::from_cents(101)), Cents::from_cents(20));
        assert_eq!(fifth_of(Cents::from_cents(103)), Cents::from_cents(21));
        assert_eq!(fifth_of(Cents::from_cents(1225)), Cents::from_cents(245));
    }

    #[test]
    fn rule_table_is_in_breakdown_order() {
        let kinds: Vec<RuleKind> = RULES.iter().map(|rule| rule.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.len(), 7);
    }
}
