pub mod use_challenge_session;
pub mod use_is_mobile;
pub mod use_preloaded_state;

pub use use_challenge_session::*;
pub use use_is_mobile::*;
pub use use_preloaded_state::*;
