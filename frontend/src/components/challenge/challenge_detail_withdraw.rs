use gloo_events::EventListener;
use shared::constants::{SHARE_BUTTON_DESKTOP, SHARE_BUTTON_MOBILE, SHARE_MODAL_TITLE};
use shared::withdraw::{should_show_withdraw, win_summary};
use shared::{DefaultFormatter, OperationGuard, ParticipantInfo, TokenInfo};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use super::win_share_card::WinShareCard;
use crate::config::share_config;
use crate::hooks::{use_challenge_session, use_is_mobile};
use crate::share::{capture_and_share, BrowserShareTarget, ShareJob};
use crate::{styles, Route};

const UPLOAD_ICON: &str = "M2 22c-.55 0-1.02-.196-1.413-.587A1.926 1.926 0 0 1 0 20V9c0-.55.196-1.02.588-1.412A1.926 1.926 0 0 1 2 7h3v2H2v11h12V9h-3V7h3c.55 0 1.02.196 1.412.588.392.391.588.862.588 1.412v11c0 .55-.196 1.02-.588 1.413A1.926 1.926 0 0 1 14 22H2Zm5-7V3.825l-1.6 1.6L4 4l4-4 4 4-1.4 1.425-1.6-1.6V15H7Z";
const CLOSE_ICON: &str = "M19 3.586 20.414 5l-7 7 7 7L19 20.414l-7-7-7 7L3.586 19l7-7-7-7L5 3.586l7 7 7-7Z";
const SHARE_ICON: &str = "M240-40q-33 0-56.5-23.5T160-120v-440q0-33 23.5-56.5T240-640h120v80H240v440h480v-440H600v-80h120q33 0 56.5 23.5T800-560v440q0 33-23.5 56.5T720-40H240Zm200-280v-447l-64 64-56-57 160-160 160 160-56 57-64-64v447h-80Z";
const DOWNLOAD_ICON: &str = "M480-320 280-520l56-58 104 104v-326h80v326l104-104 56 58-200 200ZM240-160q-33 0-56.5-23.5T160-240v-120h80v120h480v-120h80v120q0 33-23.5 56.5T720-160H240Z";

#[derive(Properties, PartialEq)]
pub struct ChallengeDetailWithdrawProps {
    pub date: AttrValue,
    pub won_amount: f64,
    pub did_i_win: bool,
    pub bet_title: AttrValue,
    pub earn_amount: f64,
    pub is_loading: bool,
    pub currency: TokenInfo,
    pub user_participation: ParticipantInfo,
}

#[function_component(ChallengeDetailWithdraw)]
pub fn challenge_detail_withdraw(props: &ChallengeDetailWithdrawProps) -> Html {
    let session = use_challenge_session();
    let is_mobile = use_is_mobile();
    let is_open = use_state(|| false);
    let guard = use_state(OperationGuard::new);
    let config = use_state(share_config);
    let snapshot_ref = use_node_ref();
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    // Snapshots still in flight when the view goes away are discarded
    {
        let guard = (*guard).clone();
        use_effect_with((), move |_| move || guard.invalidate());
    }

    let close = {
        let is_open = is_open.clone();
        let guard = (*guard).clone();
        Callback::from(move |_: ()| {
            guard.invalidate();
            is_open.set(false);
        })
    };

    {
        let close = close.clone();
        use_effect_with(*is_open, move |open| {
            let listener = if *open {
                window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map_or(false, |e| e.key() == "Escape");
                        if is_escape {
                            close.emit(());
                        }
                    })
                })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    if !should_show_withdraw(props.is_loading, props.did_i_win, props.earn_amount) {
        return html! {};
    }

    let metrics = session.challenge_metrics.as_ref();
    let summary = win_summary(
        &props.user_participation,
        props.won_amount,
        &props.currency,
        metrics,
        &DefaultFormatter,
    );
    let user = session.user();

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    let on_share = {
        let guard = (*guard).clone();
        let config = (*config).clone();
        let snapshot_ref = snapshot_ref.clone();
        let job = ShareJob::new(&config, &summary.invite_code, &current_path);
        Callback::from(move |_: MouseEvent| {
            let token = guard.begin();
            let guard = guard.clone();
            let config = config.clone();
            let snapshot_ref = snapshot_ref.clone();
            let job = job.clone();
            spawn_local(async move {
                let target = BrowserShareTarget::new(is_mobile);
                match capture_and_share(&target, &snapshot_ref, &guard, token, &job, &config).await {
                    Ok(delivery) => log::debug!("Snapshot {} delivered via {:?}", job.filename, delivery),
                    Err(e) => log::error!("Failed to share snapshot {}: {}", job.filename, e),
                }
            });
        })
    };

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <>
            <div class={styles::WIN_CARD}>
                <div class="flex items-center w-full pr-16">
                    <div class={styles::WIN_ART}>
                        <span class="text-6xl" role="img" aria-label="trophy">{"🏆"}</span>
                    </div>

                    <div class="flex flex-col">
                        <label class="font-title text-[1.15rem]">
                            {format!("You won {}!", user.first_name())}
                        </label>
                        <label class="font-body text-[1rem] leading-[1.8rem] mt-1 mb-1">
                            <b class="font-semibold text-[1.2rem]">{format!("Congrats on winning {}.", props.earn_amount)}</b>
                            <br />
                            <Link<Route> to={Route::Home} classes={classes!(styles::LINK)}>
                                {"Go home to withdraw"}
                            </Link<Route>>
                        </label>
                    </div>
                </div>

                <button type="button" aria-label={SHARE_MODAL_TITLE} class={styles::WIN_SHARE_BUTTON} onclick={open}>
                    <svg xmlns="http://www.w3.org/2000/svg" width="16" height="22">
                        <path fill="#FFF" fill-rule="nonzero" d={UPLOAD_ICON} />
                    </svg>
                </button>
            </div>

            if *is_open {
                <div class={styles::MODAL_BACKDROP} onclick={on_backdrop}>
                    <div class={styles::MODAL_CENTER}>
                        <div
                            role="dialog"
                            aria-modal="true"
                            class={styles::MODAL_PANEL}
                            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                        >
                            <button type="button" aria-label="Close" class={styles::MODAL_CLOSE} onclick={on_close_button}>
                                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" class="w-8">
                                    <g fill="currentColor" fill-rule="evenodd">
                                        <path d={CLOSE_ICON} />
                                    </g>
                                </svg>
                            </button>

                            <h2 class={styles::MODAL_TITLE}>{SHARE_MODAL_TITLE}</h2>

                            <button type="button" class={styles::BUTTON_SHARE} onclick={on_share}>
                                {if is_mobile { SHARE_BUTTON_MOBILE } else { SHARE_BUTTON_DESKTOP }}
                                <svg
                                    class="scale-90 md:scale-100 ml-2 text-white -mr-1"
                                    xmlns="http://www.w3.org/2000/svg"
                                    viewBox="0 -960 960 960"
                                    width="24"
                                >
                                    <path fill="currentColor" d={if is_mobile { SHARE_ICON } else { DOWNLOAD_ICON }} />
                                </svg>
                            </button>

                            <WinShareCard
                                node_ref={snapshot_ref.clone()}
                                summary={summary.clone()}
                                bet_title={props.bet_title.clone()}
                                date={props.date.clone()}
                                nickname={user.nickname().to_string()}
                                brand_name={config.brand_name.clone()}
                            />
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
