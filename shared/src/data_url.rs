use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

static MIME_TYPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":(.*?);").expect("static MIME pattern is valid")
});

/// In-memory file decoded from a `data:` URL, ready to hand to a share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SharedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug)]
pub enum DataUrlError {
    MissingPayload,
    MissingMimeType,
    Base64(base64::DecodeError),
}

impl fmt::Display for DataUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPayload => write!(f, "Data URL has no payload segment"),
            Self::MissingMimeType => write!(f, "Data URL header has no MIME type"),
            Self::Base64(e) => write!(f, "Invalid base64 payload: {}", e),
        }
    }
}

impl std::error::Error for DataUrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for DataUrlError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err)
    }
}

/// Extracts the declared MIME type from a data URL header such as
/// `data:image/png;base64`.
pub fn mime_type_of(header: &str) -> Option<&str> {
    MIME_TYPE_PATTERN
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Decodes `data:<mime>;base64,<payload>` into a named file.
///
/// The input is not validated up front. A missing comma, a header without a
/// `:<mime>;` segment, or a payload the standard base64 alphabet rejects all
/// surface as errors for the caller to handle. Payloads must be padded;
/// canvas exports always are, unlike some hand-built URLs `atob` tolerates.
pub fn data_url_to_file(data_url: &str, filename: &str) -> Result<SharedFile, DataUrlError> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or(DataUrlError::MissingPayload)?;
    let mime_type = mime_type_of(header).ok_or(DataUrlError::MissingMimeType)?;
    let bytes = STANDARD.decode(payload)?;

    Ok(SharedFile {
        name: filename.to_string(),
        mime_type: mime_type.to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_hello_snapshot() {
        let file = data_url_to_file("data:image/png;base64,aGVsbG8=", "bet-ABC123.png").unwrap();
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.name, "bet-ABC123.png");
        assert_eq!(file.bytes, b"hello".to_vec());
        assert_eq!(file.size(), 5);
    }

    #[test]
    fn test_payload_round_trips() {
        let payload = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
        let file = data_url_to_file(&format!("data:image/png;base64,{}", payload), "snap.png").unwrap();
        assert_eq!(STANDARD.encode(&file.bytes), payload);
        assert_eq!(file.size(), STANDARD.decode(payload).unwrap().len());
        assert_eq!(&file.bytes[1..4], b"PNG");
    }

    #[test]
    fn test_keeps_declared_mime_type() {
        let file = data_url_to_file("data:image/svg+xml;base64,PHN2Zy8+", "a.svg").unwrap();
        assert_eq!(file.mime_type, "image/svg+xml");
        assert_eq!(file.bytes, b"<svg/>".to_vec());
    }

    #[test]
    fn test_only_first_comma_splits() {
        let err = data_url_to_file("data:text/plain;base64,aGk=,aGk=", "x.txt").unwrap_err();
        assert!(matches!(err, DataUrlError::Base64(_)));
    }

    #[test]
    fn test_missing_comma() {
        let err = data_url_to_file("data:image/png;base64", "x.png").unwrap_err();
        assert!(matches!(err, DataUrlError::MissingPayload));
    }

    #[test]
    fn test_missing_mime_delimiter() {
        let err = data_url_to_file("image/png,aGVsbG8=", "x.png").unwrap_err();
        assert!(matches!(err, DataUrlError::MissingMimeType));
    }

    #[test]
    fn test_bad_base64_propagates() {
        let err = data_url_to_file("data:image/png;base64,@@@@", "x.png").unwrap_err();
        assert!(matches!(err, DataUrlError::Base64(_)));
        assert!(err.to_string().starts_with("Invalid base64 payload"));
    }

    #[test]
    fn test_unpadded_payload_rejected() {
        let err = data_url_to_file("data:image/png;base64,aGVsbG8", "x.png").unwrap_err();
        assert!(matches!(err, DataUrlError::Base64(base64::DecodeError::InvalidPadding)));
    }

    #[test]
    fn test_empty_payload_is_empty_file() {
        let file = data_url_to_file("data:image/png;base64,", "x.png").unwrap();
        assert_eq!(file.size(), 0);
    }
}
