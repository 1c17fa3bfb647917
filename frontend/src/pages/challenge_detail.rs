use yew::prelude::*;

use crate::components::{ChallengeDetailSlider, ChallengeDetailWithdraw};
use crate::hooks::use_challenge_session;
use crate::models::ChallengeDetail;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ChallengeDetailPageProps {
    pub id: AttrValue,
}

#[function_component(ChallengeDetailPage)]
pub fn challenge_detail_page(props: &ChallengeDetailPageProps) -> Html {
    let session = use_challenge_session();
    let detail = use_context::<Option<ChallengeDetail>>().flatten();

    // Until the host page hands over challenge data every value is a placeholder
    let is_loading = detail.is_none();
    let detail = detail.unwrap_or_default();

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <h1 class={styles::TEXT_H1}>
                    {if detail.bet_title.is_empty() { format!("Challenge {}", props.id) } else { detail.bet_title.clone() }}
                </h1>
                <p class={styles::TEXT_BODY}>{detail.date.clone()}</p>

                <div class="mt-6">
                    <ChallengeDetailSlider
                        is_loading={is_loading}
                        challenge_metrics={session.challenge_metrics.clone()}
                        currency={Some(detail.currency.clone())}
                        is_group_challenge={session.is_group_challenge()}
                        number_of_participants={detail.number_of_participants}
                    />
                </div>

                <ChallengeDetailWithdraw
                    date={detail.date.clone()}
                    won_amount={detail.won_amount}
                    did_i_win={detail.did_i_win}
                    bet_title={detail.bet_title.clone()}
                    earn_amount={detail.earn_amount}
                    is_loading={is_loading}
                    currency={detail.currency.clone()}
                    user_participation={detail.user_participation.clone()}
                />
            </div>
        </div>
    }
}
