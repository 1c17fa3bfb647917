use std::fmt;

use crate::config::UnsupportedSharePolicy;
use crate::data_url::{data_url_to_file, DataUrlError, SharedFile};

#[derive(Debug)]
pub enum ShareError {
    Decode(DataUrlError),
    Platform(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "Snapshot decode failed: {}", e),
            Self::Platform(msg) => write!(f, "Platform share failed: {}", msg),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Platform(_) => None,
        }
    }
}

impl From<DataUrlError> for ShareError {
    fn from(err: DataUrlError) -> Self {
        Self::Decode(err)
    }
}

/// Internal events for failures the user never sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareDiagnostic {
    MissingCaptureTarget,
    ShareUnsupported { filename: String },
    StaleSnapshot,
}

impl ShareDiagnostic {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCaptureTarget => "missing_capture_target",
            Self::ShareUnsupported { .. } => "share_unsupported",
            Self::StaleSnapshot => "stale_snapshot",
        }
    }
}

impl fmt::Display for ShareDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCaptureTarget => write!(f, "Snapshot region is not mounted"),
            Self::ShareUnsupported { filename } => {
                write!(f, "Device cannot natively share {}", filename)
            }
            Self::StaleSnapshot => write!(f, "Snapshot finished after its view closed"),
        }
    }
}

/// The runtime a snapshot is delivered through.
pub trait ShareTarget {
    fn is_mobile(&self) -> bool;

    /// True only when a native file-sharing API exists and accepts `file`.
    fn can_share(&self, file: &SharedFile) -> bool;

    fn share(&self, file: SharedFile, title: &str, text: &str) -> Result<(), ShareError>;

    fn download(&self, data_url: &str, filename: &str) -> Result<(), ShareError>;

    fn report(&self, diagnostic: &ShareDiagnostic) {
        log::warn!("[{}] {}", diagnostic.code(), diagnostic);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest<'a> {
    pub data_url: &'a str,
    pub filename: &'a str,
    pub title: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    NativeShare,
    Download,
    Skipped,
}

/// Routes a captured snapshot to exactly one delivery path.
///
/// Mobile targets decode the data URL into a file and use the native share
/// sheet when it accepts the file. Desktop targets download the data URL
/// directly without decoding it.
pub fn dispatch<T>(
    target: &T,
    request: &ShareRequest<'_>,
    policy: UnsupportedSharePolicy,
) -> Result<Delivery, ShareError>
where
    T: ShareTarget + ?Sized,
{
    if target.is_mobile() {
        let file = data_url_to_file(request.data_url, request.filename)?;
        if target.can_share(&file) {
            target.share(file, request.title, request.text)?;
            return Ok(Delivery::NativeShare);
        }

        target.report(&ShareDiagnostic::ShareUnsupported {
            filename: request.filename.to_string(),
        });
        if policy == UnsupportedSharePolicy::Ignore {
            return Ok(Delivery::Skipped);
        }
    }

    target.download(request.data_url, request.filename)?;
    Ok(Delivery::Download)
}
