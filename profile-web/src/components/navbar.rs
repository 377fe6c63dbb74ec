//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::Network;

use crate::state::app::use_app_context;
use crate::utils::constants::ROUTE_HOME;

#[component]
pub fn Navbar() -> impl IntoView {
    let app_ctx = use_app_context();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Network>() {
            Ok(network) => app_ctx.set_network(network),
            Err(e) => log::warn!("Network selector: {}", e),
        }
    };

    view! {
        <nav>
            <div class="nav-inner">
                <A href=ROUTE_HOME attr:class="nav-link-clean">
                    <span class="nav-title">"POLYMEDIA PROFILE"</span>
                </A>
                <select class="network-select" on:change=on_change>
                    {Network::ALL
                        .into_iter()
                        .map(|network| {
                            view! {
                                <option
                                    value=network.as_str()
                                    selected=move || app_ctx.network.get() == network
                                >
                                    {network.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </nav>
    }
}
