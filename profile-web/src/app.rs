//! Polymedia Profile Web App - Leptos Frontend
//!
//! Layout shared by every page: provides [`AppContext`], renders the navbar
//! and routes to the pages.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::{DocsPage, HomePage, ManagePage};
use crate::services::title::{provide_title_sink, TitleSink};
use crate::state::app::{provide_app_context, AppContext};
use crate::utils::constants::ROUTE_HOME;

#[component]
pub fn App() -> impl IntoView {
    let app_ctx: AppContext = provide_app_context();
    provide_title_sink(TitleSink::default());
    log::info!("App mounted on {}", app_ctx.network.get_untracked());

    Effect::new(crate::hide_loading_screen);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/manage") view=ManagePage/>
                    <Route path=path!("/docs") view=DocsPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div id="page" class="page-not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=ROUTE_HOME attr:class="btn">"GO HOME"</A>
        </div>
    }
}
