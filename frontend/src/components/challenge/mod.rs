pub mod avatar;
pub mod challenge_detail_slider;
pub mod challenge_detail_withdraw;
pub mod info_tooltip;
pub mod skeleton;
pub mod win_share_card;

pub use avatar::Avatar;
pub use challenge_detail_slider::ChallengeDetailSlider;
pub use challenge_detail_withdraw::ChallengeDetailWithdraw;
pub use info_tooltip::InfoTooltip;
pub use skeleton::Skeleton;
pub use win_share_card::WinShareCard;
