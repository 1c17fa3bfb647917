use serde::{Deserialize, Serialize};

use crate::challenge::ChallengeMetrics;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl UserData {
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("")
    }

    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OddsFormat {
    #[default]
    American,
    Decimal,
    Fractional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OddsPreference {
    #[serde(default)]
    pub odd_format: OddsFormat,
    #[serde(default)]
    pub odds_format_available: bool,
}

impl OddsPreference {
    /// The format to render in; falls back to American when the user's
    /// choice is not enabled.
    pub fn effective_format(&self) -> OddsFormat {
        if self.odds_format_available {
            self.odd_format
        } else {
            OddsFormat::American
        }
    }
}

/// Read-only session data the challenge views need: who is looking, how they
/// like odds printed, and the metrics of the open challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSession {
    #[serde(default)]
    pub user_data: Option<UserData>,
    #[serde(default)]
    pub odds: OddsPreference,
    #[serde(default)]
    pub challenge_metrics: Option<ChallengeMetrics>,
}

impl ChallengeSession {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn user(&self) -> UserData {
        self.user_data.clone().unwrap_or_default()
    }

    pub fn is_group_challenge(&self) -> bool {
        self.challenge_metrics
            .as_ref()
            .map_or(false, ChallengeMetrics::is_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_preloaded_session() {
        let raw = r#"{
            "userData": {"firstName": "Sam", "nickname": "sam99"},
            "odds": {"oddFormat": "decimal", "oddsFormatAvailable": true},
            "challengeMetrics": {"odds": 150, "challengeResp": {"inviteCode": "ABC123"}}
        }"#;
        let session = ChallengeSession::from_json(raw).unwrap();
        assert_eq!(session.user().first_name(), "Sam");
        assert_eq!(session.odds.effective_format(), OddsFormat::Decimal);
        assert!(!session.is_group_challenge());
    }

    #[test]
    fn test_missing_fields_default() {
        let session = ChallengeSession::from_json("{}").unwrap();
        assert_eq!(session.user().nickname(), "");
        assert!(session.challenge_metrics.is_none());
        assert_eq!(session.odds.effective_format(), OddsFormat::American);
    }

    #[test]
    fn test_unavailable_format_falls_back_to_american() {
        let pref = OddsPreference { odd_format: OddsFormat::Fractional, odds_format_available: false };
        assert_eq!(pref.effective_format(), OddsFormat::American);
    }

    #[test]
    fn test_malformed_session_is_an_error() {
        assert!(ChallengeSession::from_json("{not json").is_err());
    }
}
