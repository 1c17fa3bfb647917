pub mod browser;
pub mod snapshot;

use std::fmt;

use shared::{dispatch, Delivery, OperationGuard, OperationToken, ShareConfig, ShareDiagnostic, ShareError, ShareRequest, ShareTarget};
use yew::NodeRef;

pub use browser::{detect_mobile, BrowserShareTarget};
pub use snapshot::{CaptureError, SnapshotOptions};

#[derive(Debug)]
pub enum PipelineError {
    Capture(CaptureError),
    Share(ShareError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capture(e) => write!(f, "{}", e),
            Self::Share(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capture(e) => Some(e),
            Self::Share(e) => Some(e),
        }
    }
}

impl From<CaptureError> for PipelineError {
    fn from(err: CaptureError) -> Self {
        Self::Capture(err)
    }
}

impl From<ShareError> for PipelineError {
    fn from(err: ShareError) -> Self {
        Self::Share(err)
    }
}

/// Names and captions for one shared snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareJob {
    pub filename: String,
    pub title: String,
    pub text: String,
}

impl ShareJob {
    pub fn new(config: &ShareConfig, invite_code: &str, current_path: &str) -> Self {
        Self {
            filename: config.snapshot_filename(invite_code),
            title: config.share_title(),
            text: config.share_text(current_path),
        }
    }
}

/// Captures the region behind `node_ref` and hands the image to `target`.
///
/// Nothing is delivered when the region is not mounted or when `token` was
/// invalidated while the capture ran; both cases only emit a diagnostic.
pub async fn capture_and_share<T>(
    target: &T,
    node_ref: &NodeRef,
    guard: &OperationGuard,
    token: OperationToken,
    job: &ShareJob,
    config: &ShareConfig,
) -> Result<Delivery, PipelineError>
where
    T: ShareTarget + ?Sized,
{
    let options = SnapshotOptions {
        pixel_ratio: config.pixel_ratio,
        cache_bust: config.cache_bust,
    };

    let Some(data_url) = snapshot::capture(node_ref, options).await? else {
        target.report(&ShareDiagnostic::MissingCaptureTarget);
        return Ok(Delivery::Skipped);
    };

    if !guard.is_current(token) {
        target.report(&ShareDiagnostic::StaleSnapshot);
        return Ok(Delivery::Skipped);
    }

    let request = ShareRequest {
        data_url: &data_url,
        filename: &job.filename,
        title: &job.title,
        text: &job.text,
    };
    Ok(dispatch(target, &request, config.unsupported_share)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;
    use shared::SharedFile;

    #[derive(Default)]
    struct RecordingTarget {
        shares: RefCell<usize>,
        downloads: RefCell<usize>,
        diagnostics: RefCell<Vec<ShareDiagnostic>>,
    }

    impl ShareTarget for RecordingTarget {
        fn is_mobile(&self) -> bool {
            false
        }

        fn can_share(&self, _file: &SharedFile) -> bool {
            true
        }

        fn share(&self, _file: SharedFile, _title: &str, _text: &str) -> Result<(), ShareError> {
            *self.shares.borrow_mut() += 1;
            Ok(())
        }

        fn download(&self, _data_url: &str, _filename: &str) -> Result<(), ShareError> {
            *self.downloads.borrow_mut() += 1;
            Ok(())
        }

        fn report(&self, diagnostic: &ShareDiagnostic) {
            self.diagnostics.borrow_mut().push(diagnostic.clone());
        }
    }

    #[test]
    fn test_unmounted_region_is_skipped_with_diagnostic() {
        let target = RecordingTarget::default();
        let guard = OperationGuard::new();
        let config = ShareConfig::default();
        let job = ShareJob::new(&config, "ABC123", "/challenge/ABC123");

        let delivery = block_on(capture_and_share(
            &target,
            &NodeRef::default(),
            &guard,
            guard.begin(),
            &job,
            &config,
        ))
        .unwrap();

        assert_eq!(delivery, Delivery::Skipped);
        assert_eq!(*target.diagnostics.borrow(), vec![ShareDiagnostic::MissingCaptureTarget]);
        assert_eq!(*target.shares.borrow(), 0);
        assert_eq!(*target.downloads.borrow(), 0);
    }

    #[test]
    fn test_share_job_names_file_after_invite_code() {
        let config = ShareConfig::default().with_website_url("https://example.com/");
        let job = ShareJob::new(&config, "ABC123", "/challenge/ABC123");

        assert_eq!(job.filename, "bet-ABC123.png");
        assert_eq!(job.title, "xyz");
        assert_eq!(job.text, "I won my bet on xyz! - https://example.com/challenge/ABC123");
    }
}
