use shared::ChallengeSession;
use yew::prelude::*;

#[hook]
pub fn use_challenge_session() -> ChallengeSession {
    use_context::<ChallengeSession>().unwrap_or_default()
}
