//! Docs Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::title::use_page_title;
use crate::utils::constants::{ROUTE_HOME, SDK_URL, SOURCE_URL, TITLE_DOCS};

#[component]
pub fn DocsPage() -> impl IntoView {
    use_page_title(TITLE_DOCS);

    view! {
        <div id="page" class="page-docs">
            <h1>"DOCS"</h1>

            <h2>"Profiles"</h2>
            <p>
                "A profile is a Sui object owned by its creator. It holds a name, an image URL, \
                 a description and arbitrary extra data. Each address can register one profile \
                 per registry, so apps can look up the profile of any address they know."
            </p>

            <h2>"Registries"</h2>
            <p>
                "A registry maps addresses to profile ids. This app works on the default registry, \
                 but anyone can create a registry of their own for their community."
            </p>

            <h2>"Integrations"</h2>
            <p>
                "Third party apps can read and create profiles with the "
                <a href=SDK_URL target="_blank" rel="noopener">"TypeScript SDK"</a>
                ". The Move package and this web app are "
                <a href=SOURCE_URL target="_blank" rel="noopener">"open-source"</a>
                "."
            </p>

            <A href=ROUTE_HOME attr:class="btn">"BACK"</A>
        </div>
    }
}
