use crate::domain::ports::{DeserializerBox, ProcessorBox, ValidatorBox};
use crate::domain::validation::Violation;
use crate::error::Result;

/// The terminal outcome of one end-to-end message handling call.
#[derive(Debug, PartialEq)]
pub enum PipelineResult {
    Success(String),
    ValidationFailure(Vec<Violation>),
    DeserializationFailure(String),
}

/// The main entry point for payment message handling.
///
/// `PaymentPipeline` composes one deserializer, one validator, and one
/// processor into a single request/response flow: deserialize, validate,
/// process. It owns the stage instances, injected at construction; there is
/// no ambient registry. Each call is a single attempt per message with no
/// retry and no re-entry, and an invalid record never reaches the processor.
pub struct PaymentPipeline {
    deserializer: DeserializerBox,
    validator: ValidatorBox,
    processor: ProcessorBox,
}

impl PaymentPipeline {
    /// Creates a new `PaymentPipeline` instance.
    ///
    /// # Arguments
    ///
    /// * `deserializer` - Decodes raw payloads into payment records.
    /// * `validator` - Checks records against the declared constraints.
    /// * `processor` - Executes the domain action for valid records.
    pub fn new(
        deserializer: DeserializerBox,
        validator: ValidatorBox,
        processor: ProcessorBox,
    ) -> Self {
        Self {
            deserializer,
            validator,
            processor,
        }
    }

    /// Handles one raw payment message.
    ///
    /// The three expected outcomes come back as a `PipelineResult`. A
    /// processor failure propagates as an error instead, so the caller can
    /// tell it apart from input problems: at that point the record is already
    /// known valid and the surrounding system may choose to retry.
    pub async fn handle(&self, raw: &[u8]) -> Result<PipelineResult> {
        let record = match self.deserializer.parse(raw) {
            Ok(record) => record,
            Err(e) => return Ok(PipelineResult::DeserializationFailure(e.to_string())),
        };

        let violations = self.validator.validate(&record);
        if !violations.is_empty() {
            return Ok(PipelineResult::ValidationFailure(violations));
        }

        let message = self.processor.process(&record).await?;
        Ok(PipelineResult::Success(message))
    }
}
