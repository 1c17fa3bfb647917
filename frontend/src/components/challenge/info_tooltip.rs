use web_sys::MouseEvent;
use yew::prelude::*;

use crate::styles;

const INFO_ICON: &str = "M440-280h80v-240h-80v240Zm40-320q17 0 28.5-11.5T520-640q0-17-11.5-28.5T480-680q-17 0-28.5 11.5T440-640q0 17 11.5 28.5T480-600Zm0 520q-83 0-156-31.5T197-197q-54-54-85.5-127T80-480q0-83 31.5-156T197-763q54-54 127-85.5T480-880q83 0 156 31.5T763-763q54 54 85.5 127T880-480q0 83-31.5 156T763-197q-54 54-127 85.5T480-80Zm0-80q134 0 227-93t93-227q0-134-93-227t-227-93q-134 0-227 93t-93 227q0 134 93 227t227 93Zm0-320Z";

#[derive(Properties, PartialEq)]
pub struct InfoTooltipProps {
    pub text: AttrValue,
}

/// Info icon that reveals `text` below it on hover, focus or tap.
#[function_component(InfoTooltip)]
pub fn info_tooltip(props: &InfoTooltipProps) -> Html {
    let open = use_state(|| false);

    let show = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let hide = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let onfocus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(true))
    };
    let onblur = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(false))
    };
    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    html! {
        <button
            type="button"
            class={styles::TOOLTIP_ANCHOR}
            aria-label={props.text.clone()}
            onmouseenter={show}
            onmouseleave={hide}
            {onfocus}
            {onblur}
            onclick={toggle}
        >
            <svg xmlns="http://www.w3.org/2000/svg" class="w-5" viewBox="0 -960 960 960">
                <path fill="currentColor" d={INFO_ICON} />
            </svg>
            if *open {
                <span role="tooltip" class={styles::TOOLTIP_BUBBLE}>{props.text.clone()}</span>
            }
        </button>
    }
}
