use clap::ValueEnum;
use suggest_common::types::ComparisonReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CBOR report: {0}")]
    Cbor(#[from] ciborium::ser::Error<std::io::Error>),
}

/// Report encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Cbor,
}

/// Pretty JSON ends with a newline; CBOR is the raw encoding.
pub fn encode_report(
    report: &ComparisonReport,
    format: Format,
) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut bytes, report)?;
            bytes.push(b'\n');
        }
        Format::Cbor => ciborium::ser::into_writer(report, &mut bytes)?,
    }
    Ok(bytes)
}
