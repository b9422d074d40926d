use super::payment::PaymentRecord;
use super::ports::RecordValidator;
use rust_decimal::Decimal;

/// A single failed constraint: the offending field and the rule it broke.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Violation {
    pub field: &'static str,
    pub rule: &'static str,
}

/// A declarative constraint on a `PaymentRecord`.
///
/// Rules are plain data (field name, rule description, predicate), so adding
/// a constraint means appending to the rule list rather than editing the
/// pipeline.
pub struct Rule {
    field: &'static str,
    description: &'static str,
    check: fn(&PaymentRecord) -> bool,
}

impl Rule {
    pub fn new(
        field: &'static str,
        description: &'static str,
        check: fn(&PaymentRecord) -> bool,
    ) -> Self {
        Self {
            field,
            description,
            check,
        }
    }

    pub fn is_satisfied_by(&self, record: &PaymentRecord) -> bool {
        (self.check)(record)
    }

    fn violation(&self) -> Violation {
        Violation {
            field: self.field,
            rule: self.description,
        }
    }
}

/// The constraints a payment request must satisfy before processing.
pub fn payment_rules() -> Vec<Rule> {
    vec![
        Rule::new("transactionId", "non-empty", |r| {
            !r.transaction_id.is_empty()
        }),
        Rule::new("accountId", "non-empty", |r| !r.account_id.is_empty()),
        Rule::new("amount", "greater than zero", |r| r.amount > Decimal::ZERO),
    ]
}

/// Evaluates an ordered rule list against a record.
///
/// Every rule runs on every call (no short-circuit), so the caller always
/// receives the complete violation set in declaration order.
pub struct RuleValidator {
    rules: Vec<Rule>,
}

impl RuleValidator {
    /// Creates a validator with the standard payment rules.
    pub fn new() -> Self {
        Self {
            rules: payment_rules(),
        }
    }

    /// Creates a validator with a caller-supplied rule list.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator for RuleValidator {
    fn validate(&self, record: &PaymentRecord) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(record))
            .map(Rule::violation)
            .collect()
    }
}
