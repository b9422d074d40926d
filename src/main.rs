use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_connector::application::pipeline::{PaymentPipeline, PipelineResult};
use payment_connector::domain::ports::{DeserializerBox, ProcessorBox, ValidatorBox};
use payment_connector::domain::validation::RuleValidator;
use payment_connector::infrastructure::ack::AckProcessor;
use payment_connector::interfaces::json::request_reader::JsonRequestReader;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment request JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw = match cli.input {
        Some(path) => std::fs::read(path).into_diagnostic()?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).into_diagnostic()?;
            buf
        }
    };

    let deserializer: DeserializerBox = Box::new(JsonRequestReader::new());
    let validator: ValidatorBox = Box::new(RuleValidator::new());
    let processor: ProcessorBox = Box::new(AckProcessor::new());
    let pipeline = PaymentPipeline::new(deserializer, validator, processor);

    // Map the pipeline outcome to this transport's representation: stdout
    // confirmation and exit 0, or stderr detail and a nonzero exit code.
    match pipeline.handle(&raw).await.into_diagnostic()? {
        PipelineResult::Success(message) => println!("{message}"),
        PipelineResult::ValidationFailure(violations) => {
            for violation in &violations {
                eprintln!("Invalid field {}: must be {}", violation.field, violation.rule);
            }
            std::process::exit(1);
        }
        PipelineResult::DeserializationFailure(reason) => {
            eprintln!("Malformed payment request: {reason}");
            std::process::exit(2);
        }
    }

    Ok(())
}
