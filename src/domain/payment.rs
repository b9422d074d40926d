use rust_decimal::Decimal;
use serde::Deserialize;

/// A single payment request, decoded from the wire.
///
/// Constructed only by the deserialization stage, read by the validator and
/// processor, and discarded once the pipeline answers. All three fields are
/// structurally required: a payload missing any of them fails deserialization
/// and never reaches validation. Unrecognized wire fields are ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub transaction_id: String,
    pub account_id: String,
    pub amount: Decimal,
}
