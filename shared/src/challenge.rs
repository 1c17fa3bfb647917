use serde::{Deserialize, Serialize};

use crate::constants::{
    ARBITRUM_NETWORK_LABEL, DEFAULT_TOKEN_NAME, ETHEREUM_NETWORK_ID, ETHEREUM_NETWORK_LABEL,
    GROUP_MODE, MODE_LABEL_GROUP, MODE_LABEL_ONE_VS_ONE, ONE_VS_ONE_MODE,
};

/// A value the API sends either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Odds of 0, 100 or -100 carry no information worth sharing.
    fn is_neutral_odds(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0.0 || *n == 100.0 || *n == -100.0,
            Self::Text(s) => matches!(s.as_str(), "0" | "100" | "-100"),
        }
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ChallengeMode {
    #[default]
    OneVsOne,
    Group,
}

impl From<String> for ChallengeMode {
    fn from(mode: String) -> Self {
        if mode.eq_ignore_ascii_case(GROUP_MODE) {
            Self::Group
        } else {
            Self::OneVsOne
        }
    }
}

impl From<ChallengeMode> for String {
    fn from(mode: ChallengeMode) -> Self {
        match mode {
            ChallengeMode::Group => GROUP_MODE.to_string(),
            ChallengeMode::OneVsOne => ONE_VS_ONE_MODE.to_string(),
        }
    }
}

impl ChallengeMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Group => MODE_LABEL_GROUP,
            Self::OneVsOne => MODE_LABEL_ONE_VS_ONE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeResp {
    #[serde(default)]
    pub challenge_mode: Option<ChallengeMode>,
    #[serde(default)]
    pub invite_code: Option<String>,
    #[serde(default)]
    pub challenge_value_qty: Option<Numeric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMetrics {
    #[serde(default)]
    pub odds: Option<Numeric>,
    #[serde(default)]
    pub challenge_resp: Option<ChallengeResp>,
}

impl ChallengeMetrics {
    /// Keys outside the typed fields are dropped on deserialization, so a
    /// payload carrying only unknown keys or null odds reads as empty.
    pub fn is_empty(&self) -> bool {
        self.odds.is_none() && self.challenge_resp.is_none()
    }

    pub fn is_group(&self) -> bool {
        self.challenge_resp
            .as_ref()
            .and_then(|resp| resp.challenge_mode)
            .map_or(false, |mode| mode == ChallengeMode::Group)
    }

    /// Non-numeric or missing odds read as 0.
    pub fn odds_amount(&self) -> f64 {
        self.odds.as_ref().and_then(Numeric::as_f64).unwrap_or(0.0)
    }

    pub fn invite_code(&self) -> &str {
        self.challenge_resp
            .as_ref()
            .and_then(|resp| resp.invite_code.as_deref())
            .unwrap_or("")
    }

    pub fn pool_total(&self) -> Option<f64> {
        self.challenge_resp
            .as_ref()
            .and_then(|resp| resp.challenge_value_qty.as_ref())
            .and_then(Numeric::as_f64)
    }

    /// Odds label printed on the shareable win card. Empty when the card
    /// should not show odds at all.
    pub fn share_odds_label(&self) -> String {
        if self.is_group() {
            return String::new();
        }
        match &self.odds {
            Some(odds) if !odds.is_neutral_odds() => {
                if odds.as_f64().map_or(false, |n| n > 100.0) {
                    format!("+{}", odds)
                } else {
                    odds.to_string()
                }
            }
            _ => String::new(),
        }
    }
}

/// `None` and an all-empty object are treated the same.
pub fn metrics_present(metrics: Option<&ChallengeMetrics>) -> bool {
    metrics.map_or(false, |m| !m.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default)]
    pub network_id: Option<u64>,
    #[serde(default)]
    pub usd_price: Option<f64>,
}

impl TokenInfo {
    pub fn display_name(&self) -> &str {
        self.token_name.as_deref().unwrap_or("")
    }

    /// Name handed to the amount formatter, which needs a concrete token.
    pub fn format_name(&self) -> &str {
        match self.token_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_TOKEN_NAME,
        }
    }

    pub fn network_label(&self) -> &'static str {
        if self.network_id == Some(ETHEREUM_NETWORK_ID) {
            ETHEREUM_NETWORK_LABEL
        } else {
            ARBITRUM_NETWORK_LABEL
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    #[serde(default)]
    pub participation_value_qty: Option<Numeric>,
}

impl ParticipantInfo {
    pub fn stake(&self) -> f64 {
        self.participation_value_qty
            .as_ref()
            .and_then(Numeric::as_f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(json: &str) -> ChallengeMetrics {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserializes_numeric_and_string_odds() {
        let a = metrics(r#"{"odds": 150, "challengeResp": {"challengeMode": "GROUP", "inviteCode": "ABC123", "challengeValueQty": "250.5"}}"#);
        assert_eq!(a.odds_amount(), 150.0);
        assert!(a.is_group());
        assert_eq!(a.invite_code(), "ABC123");
        assert_eq!(a.pool_total(), Some(250.5));

        let b = metrics(r#"{"odds": "-120"}"#);
        assert_eq!(b.odds_amount(), -120.0);
        assert!(!b.is_group());
        assert_eq!(b.invite_code(), "");
    }

    #[test]
    fn test_non_numeric_odds_read_as_zero() {
        assert_eq!(metrics(r#"{"odds": "n/a"}"#).odds_amount(), 0.0);
    }

    #[test]
    fn test_empty_metrics() {
        assert!(metrics("{}").is_empty());
        assert!(!metrics_present(None));
        assert!(!metrics_present(Some(&metrics("{}"))));
        assert!(metrics_present(Some(&metrics(r#"{"odds": 0}"#))));
    }

    #[test]
    fn test_unknown_keys_and_null_odds_read_as_empty() {
        let m = metrics(r#"{"odds": null, "totalBets": 4}"#);
        assert!(m.is_empty());
        assert!(!metrics_present(Some(&m)));
    }

    #[test]
    fn test_mode_is_case_insensitive() {
        let m = metrics(r#"{"challengeResp": {"challengeMode": "group"}}"#);
        assert!(m.is_group());
        assert_eq!(ChallengeMode::Group.label(), "Group");
        assert_eq!(ChallengeMode::OneVsOne.label(), "1 vs 1");
    }

    #[test]
    fn test_share_odds_label() {
        assert_eq!(metrics(r#"{"odds": 150}"#).share_odds_label(), "+150");
        assert_eq!(metrics(r#"{"odds": "250"}"#).share_odds_label(), "+250");
        assert_eq!(metrics(r#"{"odds": -150}"#).share_odds_label(), "-150");
        assert_eq!(metrics(r#"{"odds": 90}"#).share_odds_label(), "90");
        for neutral in ["0", "100", "-100", "\"0\"", "\"100\"", "\"-100\""] {
            let json = format!(r#"{{"odds": {}}}"#, neutral);
            assert_eq!(metrics(&json).share_odds_label(), "", "odds {}", neutral);
        }
        assert_eq!(metrics("{}").share_odds_label(), "");
    }

    #[test]
    fn test_share_odds_hidden_for_group() {
        let m = metrics(r#"{"odds": 300, "challengeResp": {"challengeMode": "GROUP"}}"#);
        assert_eq!(m.share_odds_label(), "");
    }

    #[test]
    fn test_token_labels() {
        let eth = TokenInfo { token_name: Some("USDC".into()), network_id: Some(1), usd_price: None };
        assert_eq!(eth.network_label(), "ETH");
        assert_eq!(eth.format_name(), "USDC");

        let unnamed = TokenInfo { network_id: Some(42161), ..Default::default() };
        assert_eq!(unnamed.network_label(), "ARB");
        assert_eq!(unnamed.format_name(), "STMX");
        assert_eq!(unnamed.display_name(), "");
    }

    #[test]
    fn test_participant_stake() {
        let p: ParticipantInfo = serde_json::from_str(r#"{"participationValueQty": "12.5"}"#).unwrap();
        assert_eq!(p.stake(), 12.5);
        assert_eq!(ParticipantInfo::default().stake(), 0.0);
    }
}
