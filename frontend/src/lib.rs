pub mod styles;
pub mod hooks;
pub mod models;
pub mod components;
pub mod pages;
pub mod config;
pub mod share;

use yew::prelude::*;
use yew_router::prelude::*;
use shared::ChallengeSession;
use crate::hooks::use_preloaded_state;
use crate::models::ChallengeDetail;
use crate::pages::{challenge_detail::ChallengeDetailPage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/challenge/:id")] ChallengeDetail { id: String },
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_preloaded_state();
    let session = state.session.clone();
    let detail = state.challenge_detail.clone();

    html! {
        <ContextProvider<ChallengeSession> context={session}>
            <ContextProvider<Option<ChallengeDetail>> context={detail}>
                <BrowserRouter>
                    <div class="min-h-screen w-full">
                        <div class="mx-auto">
                            <Switch<Route> render={switch} />
                        </div>
                    </div>
                </BrowserRouter>
            </ContextProvider<Option<ChallengeDetail>>>
        </ContextProvider<ChallengeSession>>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home | Route::NotFound => html! { <Home /> },
       Route::ChallengeDetail { id } => html! { <ChallengeDetailPage id={id} /> },
   }
}
