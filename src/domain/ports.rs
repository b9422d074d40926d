use super::payment::PaymentRecord;
use super::validation::Violation;
use crate::error::Result;
use async_trait::async_trait;

/// Decodes one raw payload into a `PaymentRecord`. Side-effect free; returns
/// no partial record on failure.
pub trait PayloadDeserializer: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Result<PaymentRecord>;
}

/// Checks a record against its constraints. Empty result means valid.
pub trait RecordValidator: Send + Sync {
    fn validate(&self, record: &PaymentRecord) -> Vec<Violation>;
}

/// Executes the domain action for a validated record and returns the
/// confirmation message.
///
/// Only ever invoked with a record that passed validation; the pipeline
/// enforces that, implementations do not re-check. This is the seam where a
/// real downstream integration (ledger posting, workflow engine call) is
/// substituted.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn process(&self, record: &PaymentRecord) -> Result<String>;
}

pub type DeserializerBox = Box<dyn PayloadDeserializer>;
pub type ValidatorBox = Box<dyn RecordValidator>;
pub type ProcessorBox = Box<dyn PaymentProcessor>;
