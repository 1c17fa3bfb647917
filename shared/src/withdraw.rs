use crate::challenge::{ChallengeMetrics, ParticipantInfo, TokenInfo};
use crate::format::ChallengeFormatter;

/// The win panel only appears once loading is done, for a winner with a
/// non-zero payout.
pub fn should_show_withdraw(is_loading: bool, did_i_win: bool, earn_amount: f64) -> bool {
    !is_loading && did_i_win && earn_amount != 0.0
}

/// Everything printed on the shareable win card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinSummary {
    pub stake: String,
    pub total_won: String,
    pub token_name: String,
    pub odds: Option<String>,
    pub invite_code: String,
}

pub fn win_summary(
    participant: &ParticipantInfo,
    won_amount: f64,
    currency: &TokenInfo,
    metrics: Option<&ChallengeMetrics>,
    formatter: &dyn ChallengeFormatter,
) -> WinSummary {
    let odds = metrics
        .filter(|m| !m.is_empty())
        .map(ChallengeMetrics::share_odds_label)
        .filter(|label| !label.is_empty());

    WinSummary {
        stake: formatter.crypto_amount(participant.stake(), currency.format_name()),
        total_won: formatter.crypto_amount(won_amount, currency.format_name()),
        token_name: currency.display_name().to_string(),
        odds,
        invite_code: metrics.map(|m| m.invite_code().to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DefaultFormatter;

    #[test]
    fn test_visibility() {
        assert!(should_show_withdraw(false, true, 12.0));
        assert!(!should_show_withdraw(true, true, 12.0));
        assert!(!should_show_withdraw(false, false, 12.0));
        assert!(!should_show_withdraw(false, true, 0.0));
        assert!(should_show_withdraw(false, true, -3.0));
    }

    #[test]
    fn test_summary_with_odds() {
        let metrics: ChallengeMetrics =
            serde_json::from_str(r#"{"odds": 150, "challengeResp": {"inviteCode": "ABC123"}}"#).unwrap();
        let participant: ParticipantInfo =
            serde_json::from_str(r#"{"participationValueQty": "10"}"#).unwrap();
        let token = TokenInfo { token_name: Some("STMX".into()), ..Default::default() };

        let summary = win_summary(&participant, 25.5, &token, Some(&metrics), &DefaultFormatter);
        assert_eq!(summary.stake, "10");
        assert_eq!(summary.total_won, "25.5");
        assert_eq!(summary.token_name, "STMX");
        assert_eq!(summary.odds.as_deref(), Some("+150"));
        assert_eq!(summary.invite_code, "ABC123");
    }

    #[test]
    fn test_summary_without_metrics() {
        let summary = win_summary(
            &ParticipantInfo::default(),
            1.0,
            &TokenInfo::default(),
            None,
            &DefaultFormatter,
        );
        assert_eq!(summary.odds, None);
        assert_eq!(summary.invite_code, "");
        assert_eq!(summary.token_name, "");
    }

    #[test]
    fn test_neutral_odds_hidden() {
        let metrics: ChallengeMetrics = serde_json::from_str(r#"{"odds": "100"}"#).unwrap();
        let summary = win_summary(
            &ParticipantInfo::default(),
            1.0,
            &TokenInfo::default(),
            Some(&metrics),
            &DefaultFormatter,
        );
        assert_eq!(summary.odds, None);
    }
}
