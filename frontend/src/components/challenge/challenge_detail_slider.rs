use shared::stat_cards::{build_stat_cards, SliderInput, StatCard, StatValue};
use shared::{ChallengeMetrics, DefaultFormatter, TokenInfo};
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::info_tooltip::InfoTooltip;
use super::skeleton::Skeleton;
use crate::hooks::use_challenge_session;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ChallengeDetailSliderProps {
    pub is_loading: bool,
    pub challenge_metrics: Option<ChallengeMetrics>,
    #[prop_or_default]
    pub currency: Option<TokenInfo>,
    pub is_group_challenge: bool,
    pub number_of_participants: u32,
}

fn scroll_by_card(track: &NodeRef, direction: f64) {
    let Some(track) = track.cast::<Element>() else {
        return;
    };
    let step = track
        .first_element_child()
        .map(|card| card.get_bounding_client_rect().width())
        .unwrap_or_else(|| f64::from(track.client_width()));

    let options = ScrollToOptions::new();
    options.set_left(step * direction);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_by_with_scroll_to_options(&options);
}

fn render_card(card: &StatCard, is_last: bool) -> Html {
    let value = match &card.value {
        StatValue::Loading => html! { <Skeleton /> },
        StatValue::Text(text) => match &card.tooltip {
            Some(tooltip) => html! {
                <div class="flex items-center">
                    <label class={styles::STAT_VALUE}>{text.clone()}</label>
                    <InfoTooltip text={tooltip.clone()} />
                </div>
            },
            None => html! { <label class={styles::STAT_VALUE}>{text.clone()}</label> },
        },
    };

    html! {
        <div class={styles::STAT_CARD}>
            <div class={styles::STAT_BODY}>
                <label class={styles::STAT_LABEL}>{card.kind.label()}</label>
                {value}
            </div>
            if !is_last {
                <div class={styles::STAT_DIVIDER} />
            }
        </div>
    }
}

#[function_component(ChallengeDetailSlider)]
pub fn challenge_detail_slider(props: &ChallengeDetailSliderProps) -> Html {
    let session = use_challenge_session();
    let track_ref = use_node_ref();

    let cards = build_stat_cards(
        &SliderInput {
            is_loading: props.is_loading,
            metrics: props.challenge_metrics.as_ref(),
            currency: props.currency.as_ref(),
            is_group_challenge: props.is_group_challenge,
            number_of_participants: props.number_of_participants,
            odds_preference: &session.odds,
        },
        &DefaultFormatter,
    );
    let last = cards.len().saturating_sub(1);

    let on_prev = {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_by_card(&track_ref, -1.0))
    };
    let on_next = {
        let track_ref = track_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_by_card(&track_ref, 1.0))
    };

    html! {
        <div class={styles::SLIDER_VIEWPORT}>
            <div ref={track_ref} class={styles::SLIDER_TRACK}>
                {for cards.iter().enumerate().map(|(i, card)| render_card(card, i == last))}
            </div>
            <div class={styles::SLIDER_CONTROLS}>
                <button type="button" aria-label="Previous" class={styles::SLIDER_BUTTON} onclick={on_prev}>
                    {"‹"}
                </button>
                <button type="button" aria-label="Next" class={styles::SLIDER_BUTTON} onclick={on_next}>
                    {"›"}
                </button>
            </div>
        </div>
    }
}
