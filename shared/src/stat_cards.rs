use crate::challenge::{metrics_present, ChallengeMetrics, ChallengeMode, TokenInfo};
use crate::format::ChallengeFormatter;
use crate::session::OddsPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Odds,
    Players,
    PoolTotal,
    Currency,
    Mode,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Odds => "Odds",
            Self::Players => "Players",
            Self::PoolTotal => "Pool Total",
            Self::Currency => "Currency",
            Self::Mode => "Mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Loading,
    Text(String),
}

impl StatValue {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: StatValue,
    pub tooltip: Option<String>,
}

impl StatCard {
    fn loading(kind: StatKind) -> Self {
        Self { kind, value: StatValue::Loading, tooltip: None }
    }

    fn text(kind: StatKind, text: impl Into<String>) -> Self {
        Self { kind, value: StatValue::Text(text.into()), tooltip: None }
    }

    fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SliderInput<'a> {
    pub is_loading: bool,
    pub metrics: Option<&'a ChallengeMetrics>,
    pub currency: Option<&'a TokenInfo>,
    pub is_group_challenge: bool,
    pub number_of_participants: u32,
    pub odds_preference: &'a OddsPreference,
}

/// Cards for the challenge metrics slider, in display order:
/// Odds, Players, Pool Total, Currency, Mode.
///
/// Odds is omitted while metrics are empty and Pool Total outside group
/// mode. Every other card shows a placeholder while loading or while metrics
/// are empty.
pub fn build_stat_cards(input: &SliderInput<'_>, formatter: &dyn ChallengeFormatter) -> Vec<StatCard> {
    let has_metrics = metrics_present(input.metrics);
    let pending = input.is_loading || !has_metrics;
    let default_token = TokenInfo::default();
    let currency = input.currency.unwrap_or(&default_token);
    let mut cards = Vec::with_capacity(5);

    if let Some(metrics) = input.metrics.filter(|_| has_metrics) {
        cards.push(if input.is_loading {
            StatCard::loading(StatKind::Odds)
        } else {
            StatCard::text(
                StatKind::Odds,
                formatter.odds(
                    metrics.odds_amount(),
                    input.is_group_challenge,
                    input.odds_preference,
                ),
            )
        });
    }

    cards.push(if pending {
        StatCard::loading(StatKind::Players)
    } else {
        StatCard::text(StatKind::Players, input.number_of_participants.to_string())
    });

    if input.is_group_challenge {
        cards.push(match input.metrics.filter(|_| !pending) {
            None => StatCard::loading(StatKind::PoolTotal),
            Some(metrics) => {
                let total = metrics.pool_total().unwrap_or(f64::NAN);
                let amount = formatter.crypto_amount(total, currency.format_name());
                let text = format!("{} {}", amount, currency.display_name());
                StatCard::text(StatKind::PoolTotal, text.trim_end())
                    .with_tooltip(formatter.usd_amount(total, currency))
            }
        });
    }

    cards.push(if pending {
        StatCard::loading(StatKind::Currency)
    } else {
        StatCard::text(StatKind::Currency, currency.display_name())
            .with_tooltip(format!("Network: {}", currency.network_label()))
    });

    cards.push(if pending {
        StatCard::loading(StatKind::Mode)
    } else {
        let mode = if input.is_group_challenge { ChallengeMode::Group } else { ChallengeMode::OneVsOne };
        StatCard::text(StatKind::Mode, mode.label())
    });

    cards
}
