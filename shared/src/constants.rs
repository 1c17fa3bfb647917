pub const DEFAULT_TOKEN_NAME: &str = "STMX";
pub const DEFAULT_BRAND_NAME: &str = "xyz";
pub const SHARE_FILE_PREFIX: &str = "bet-";
pub const SHARE_FILE_EXTENSION: &str = ".png";
pub const SNAPSHOT_MIME_TYPE: &str = "image/png";

pub const DEFAULT_PIXEL_RATIO: f64 = 3.0;

pub const ETHEREUM_NETWORK_ID: u64 = 1;
pub const ETHEREUM_NETWORK_LABEL: &str = "ETH";
pub const ARBITRUM_NETWORK_LABEL: &str = "ARB";

pub const GROUP_MODE: &str = "GROUP";
pub const ONE_VS_ONE_MODE: &str = "ONE_VS_ONE";

pub const MODE_LABEL_GROUP: &str = "Group";
pub const MODE_LABEL_ONE_VS_ONE: &str = "1 vs 1";

pub const SHARE_BUTTON_MOBILE: &str = "Share";
pub const SHARE_BUTTON_DESKTOP: &str = "Download";
pub const SHARE_MODAL_TITLE: &str = "Share Your Win";
pub const WINNER_BADGE: &str = "Winner";

pub const SESSION_STORAGE_KEY: &str = "challengeSession";
pub const SESSION_UPDATE_EVENT: &str = "challengeSessionUpdate";
pub const SHARE_DIAGNOSTIC_EVENT: &str = "shareDiagnostic";
