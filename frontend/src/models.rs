use serde::{Deserialize, Serialize};
use shared::{ChallengeSession, ParticipantInfo, TokenInfo};

/// Per-challenge values the detail page renders alongside the session.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetail {
    #[serde(default)]
    pub bet_title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub did_i_win: bool,
    #[serde(default)]
    pub earn_amount: f64,
    #[serde(default)]
    pub won_amount: f64,
    #[serde(default)]
    pub currency: TokenInfo,
    #[serde(default)]
    pub user_participation: ParticipantInfo,
    #[serde(default)]
    pub number_of_participants: u32,
}

/// State the host page leaves in local storage before the app boots.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreloadedState {
    #[serde(flatten)]
    pub session: ChallengeSession,
    #[serde(default)]
    pub challenge_detail: Option<ChallengeDetail>,
}

impl PreloadedState {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preloaded_state_splits_session_and_detail() {
        let raw = r#"{
            "userData": {"firstName": "Sam"},
            "challengeMetrics": {"odds": 150, "challengeResp": {"inviteCode": "ABC123"}},
            "challengeDetail": {
                "betTitle": "Lakers win tonight",
                "didIWin": true,
                "earnAmount": 20,
                "wonAmount": 40,
                "currency": {"tokenName": "USDC", "networkId": 1},
                "userParticipation": {"participationValueQty": "20"},
                "numberOfParticipants": 2
            }
        }"#;
        let state = PreloadedState::from_json(raw).unwrap();
        assert_eq!(state.session.user().first_name(), "Sam");
        let detail = state.challenge_detail.unwrap();
        assert!(detail.did_i_win);
        assert_eq!(detail.currency.network_label(), "ETH");
        assert_eq!(detail.user_participation.stake(), 20.0);
    }

    #[test]
    fn test_empty_state() {
        let state = PreloadedState::from_json("{}").unwrap();
        assert!(state.challenge_detail.is_none());
        assert_eq!(state.session, ChallengeSession::default());
    }
}
