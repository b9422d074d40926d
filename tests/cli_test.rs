use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_valid_payment_prints_confirmation() {
    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.write_stdin(r#"{"transactionId":"T1","accountId":"A1","amount":100}"#);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment Processed"));
}

#[test]
fn test_acknowledgement_log_carries_field_values() {
    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.env("RUST_LOG", "info");
    cmd.write_stdin(r#"{"transactionId":"T42","accountId":"A7","amount":12.5}"#);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("T42"))
        .stderr(predicate::str::contains("A7"))
        .stderr(predicate::str::contains("12.5"));
}

#[test]
fn test_blank_transaction_id_exits_with_validation_code() {
    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.write_stdin(r#"{"transactionId":"","accountId":"A1","amount":100}"#);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("transactionId"));
}

#[test]
fn test_garbage_input_exits_with_deserialization_code() {
    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.write_stdin("not-json");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Malformed payment request"));
}

#[test]
fn test_missing_field_exits_with_deserialization_code() {
    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.write_stdin(r#"{"accountId":"A1","amount":100}"#);

    cmd.assert().failure().code(2);
}

#[test]
fn test_reads_payload_from_file_argument() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"transactionId":"T1","accountId":"A1","amount":1.25}}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payment-connector"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment Processed"));
}
