//! Manage Page - where the active registry lives
//!
//! Creating and editing profiles happens on-chain through the SDK; this page
//! only shows which registry the app is pointed at.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{truncate_address, ExplorerKind};

use crate::services::title::use_page_title;
use crate::state::app::use_app_context;
use crate::utils::constants::{REGISTRY_NAME, ROUTE_DOCS, TITLE_MANAGE};

#[component]
pub fn ManagePage() -> impl IntoView {
    use_page_title(TITLE_MANAGE);

    let app_ctx = use_app_context();
    let render_ctx = Memo::new(move |_| app_ctx.render_context());

    view! {
        <div id="page" class="page-manage">
            <h1>"MANAGE PROFILE"</h1>
            <p>
                "Network: " <b>{move || render_ctx.with(|ctx| ctx.network.to_string())}</b>
            </p>
            {move || {
                let ctx = render_ctx.get();
                match (ctx.registry_id.as_deref(), ctx.explorer_link(ExplorerKind::Object)) {
                    (Some(id), Some(href)) => view! {
                        <p>
                            "Registry: " <i>{REGISTRY_NAME}</i> " ("
                            <a href=href target="_blank" rel="noopener">{truncate_address(id)}</a>
                            ")"
                        </p>
                    }
                    .into_any(),
                    _ => view! {
                        <p class="notice">
                            "No registry is configured for this network. "
                            "Switch network or see the docs to point the app at a registry."
                        </p>
                    }
                    .into_any(),
                }
            }}
            <A href=ROUTE_DOCS attr:class="btn">"READ DOCS"</A>
        </div>
    }
}
