use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PayloadDeserializer;
use crate::error::Result;

/// Decodes JSON payment requests.
///
/// This reader wraps `serde_json` and maps codec failures into the crate
/// error. Missing required fields are a structural failure here, so the
/// validator only ever sees complete records.
#[derive(Debug, Default, Clone)]
pub struct JsonRequestReader;

impl JsonRequestReader {
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDeserializer for JsonRequestReader {
    fn parse(&self, raw: &[u8]) -> Result<PaymentRecord> {
        Ok(serde_json::from_slice(raw)?)
    }
}
