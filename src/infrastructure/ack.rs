use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentProcessor;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// The confirmation text returned for every processed payment.
pub const CONFIRMATION: &str = "Payment Processed";

/// Acknowledging processor: logs the payment and confirms it.
///
/// Stands in for a real downstream integration (ledger posting, workflow
/// engine call). A production deployment swaps this behind the
/// `PaymentProcessor` trait without touching the pipeline.
#[derive(Debug, Default, Clone)]
pub struct AckProcessor;

impl AckProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for AckProcessor {
    async fn process(&self, record: &PaymentRecord) -> Result<String> {
        info!(
            transaction_id = %record.transaction_id,
            account_id = %record.account_id,
            amount = %record.amount,
            "Payment Processed"
        );
        Ok(CONFIRMATION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_ack_returns_confirmation() {
        let processor = AckProcessor::new();
        let record = PaymentRecord {
            transaction_id: "T1".to_string(),
            account_id: "A1".to_string(),
            amount: dec!(100),
        };

        let message = processor.process(&record).await.unwrap();
        assert_eq!(message, CONFIRMATION);
    }
}
