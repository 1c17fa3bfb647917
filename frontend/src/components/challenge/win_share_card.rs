use shared::constants::WINNER_BADGE;
use shared::withdraw::WinSummary;
use yew::prelude::*;

use super::avatar::Avatar;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinShareCardProps {
    pub node_ref: NodeRef,
    pub summary: WinSummary,
    pub bet_title: AttrValue,
    pub date: AttrValue,
    pub nickname: AttrValue,
    pub brand_name: AttrValue,
}

/// The region that gets rasterized when a win is shared. Everything inside
/// is inline markup so the capture does not depend on external assets.
#[function_component(WinShareCard)]
pub fn win_share_card(props: &WinShareCardProps) -> Html {
    let summary = &props.summary;
    let stake_class = if summary.odds.is_some() { "flex-1 max-w-[calc(100%-100px)]" } else { "flex-1 max-w-full" };

    html! {
        <div class={styles::SNAPSHOT_FRAME}>
            <div ref={props.node_ref.clone()} class={styles::SNAPSHOT_REGION}>
                <svg class="m-auto mt-0 h-[22px] xs:h-[30px]" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 174 30">
                    <defs>
                        <linearGradient id="brand" x1="50%" x2="50%" y1="0%" y2="100%">
                            <stop offset="0%" stop-color="#FF4343" />
                            <stop offset="100%" stop-color="#FF2F2F" />
                        </linearGradient>
                    </defs>
                    <text x="87" y="23" text-anchor="middle" font-size="24" font-weight="800" fill="url(#brand)">
                        {props.brand_name.clone()}
                    </text>
                </svg>

                <div class={styles::TICKET}>
                    <div class="p-4">
                        <div class={styles::TICKET_ROW}>
                            <div class={stake_class}>
                                <label class="text-base flex">{"Stake"}</label>
                                <label class={styles::TICKET_AMOUNT}>
                                    <span class="truncate block mr-2">{summary.stake.clone()}</span>
                                    {summary.token_name.clone()}
                                </label>
                            </div>

                            if let Some(odds) = summary.odds.clone() {
                                <div class="text-right flex flex-col items-end">
                                    <label class="text-base flex">{"Odds"}</label>
                                    <label class="font-display text-base xs:text-xl">{odds}</label>
                                </div>
                            }
                        </div>

                        <div class={styles::TICKET_ROW_WON}>
                            <div class="flex-1 max-w-[calc(100%-100px)]">
                                <label class="text-base flex">{"Total Won"}</label>
                                <label class={styles::TICKET_AMOUNT}>
                                    <span class="truncate block mr-2">{summary.total_won.clone()}</span>
                                    {summary.token_name.clone()}
                                </label>
                            </div>
                            <label class={styles::WINNER_BADGE}>{WINNER_BADGE}</label>
                        </div>
                    </div>

                    <div class={styles::TICKET_TEAR}>
                        <span class="w-full flex border border-[#242F47] border-dashed mt-[2px]"></span>
                    </div>

                    <div class={styles::TICKET_FOOTER}>
                        <label class="font-display text-[.9rem] truncate max-w-full block">{props.bet_title.clone()}</label>
                        <label class="block text-base text-white/70">{props.date.clone()}</label>
                    </div>
                </div>

                <label class={styles::BET_ID}>
                    {format!("Bet ID: {}", summary.invite_code)}
                    <br />
                    <div class="w-4 inline-block -mb-[3px]">
                        <Avatar name={props.nickname.clone()} size={18} />
                    </div>
                    {" "}
                    {props.nickname.clone()}
                </label>
            </div>
        </div>
    }
}
