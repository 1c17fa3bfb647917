pub mod challenge;
pub mod config;
pub mod constants;
pub mod data_url;
pub mod device;
pub mod format;
pub mod operation;
pub mod session;
pub mod share_dispatch;
pub mod stat_cards;
pub mod withdraw;

pub use challenge::{ChallengeMetrics, ChallengeMode, Numeric, ParticipantInfo, TokenInfo};
pub use config::{ShareConfig, UnsupportedSharePolicy};
pub use data_url::{data_url_to_file, DataUrlError, SharedFile};
pub use format::{ChallengeFormatter, DefaultFormatter};
pub use operation::{OperationGuard, OperationToken};
pub use session::{ChallengeSession, OddsFormat, OddsPreference, UserData};
pub use share_dispatch::{dispatch, Delivery, ShareDiagnostic, ShareError, ShareRequest, ShareTarget};
