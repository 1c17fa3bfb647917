use yew::prelude::*;

use crate::styles;

#[function_component(Skeleton)]
pub fn skeleton() -> Html {
    html! { <div class={styles::SKELETON} /> }
}
