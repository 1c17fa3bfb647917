pub mod challenge_detail;
pub mod home;
