use base64::{engine::general_purpose::STANDARD, Engine as _};
use fractic_server_error::ServerError;

use crate::{entities::Receipt, errors::InvalidReceipt};

/// Strips a `data:<type>;base64,` prefix if present.
fn base64_payload(file_data: &str) -> &str {
    match file_data.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => file_data,
    }
}

pub(crate) fn decode_file_data(file_data: &str) -> Result<Vec<u8>, ServerError> {
    let payload = base64_payload(file_data.trim());
    if payload.is_empty() {
        return Err(InvalidReceipt::new("attached file is empty"));
    }
    STANDARD
        .decode(payload)
        .map_err(|e| InvalidReceipt::with_debug("attached file is not valid base64", &e))
}

impl Receipt {
    /// Raw bytes of the attached file.
    pub fn decode_file(&self) -> Result<Vec<u8>, ServerError> {
        decode_file_data(&self.file_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_and_data_url_payloads() {
        assert_eq!(decode_file_data("aGVsbG8=").unwrap(), b"hello");
        assert_eq!(
            decode_file_data("data:application/pdf;base64,aGVsbG8=").unwrap(),
            b"hello"
        );
    }

    #[test]
    fn rejects_empty_or_malformed_payloads() {
        assert!(decode_file_data("").is_err());
        assert!(decode_file_data("data:image/png;base64,").is_err());
        assert!(decode_file_data("not base64!").is_err());
    }
}
