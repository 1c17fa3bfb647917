use yew::prelude::*;
use yew_router::prelude::Link;

use crate::hooks::use_challenge_session;
use crate::{styles, Route};

#[function_component(Home)]
pub fn home() -> Html {
    let session = use_challenge_session();
    let invite_code = session
        .challenge_metrics
        .as_ref()
        .map(|metrics| metrics.invite_code().to_string())
        .filter(|code| !code.is_empty());

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <h1 class={styles::TEXT_H1}>{"Challenges"}</h1>
                if let Some(id) = invite_code {
                    <Link<Route> to={Route::ChallengeDetail { id: id.clone() }} classes={classes!(styles::LINK)}>
                        {format!("Open challenge {}", id)}
                    </Link<Route>>
                } else {
                    <p class={styles::TEXT_BODY}>{"No open challenge."}</p>
                }
            </div>
        </div>
    }
}
