//! Home Page
//!
//! Static introduction to Polymedia Profile with a link to the default
//! registry on the explorer and the two entry points of the app.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{ExplorerKind, Network, RenderContext};

use crate::services::title::use_page_title;
use crate::state::app::use_app_context;
use crate::utils::constants::{
    REGISTRY_NAME, ROUTE_DOCS, ROUTE_MANAGE, SDK_URL, SOURCE_URL, SUI_URL, TITLE_HOME,
};

/// A button that navigates to another route of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ACTIONS: [NavAction; 2] = [
    NavAction {
        label: "MANAGE PROFILE",
        href: ROUTE_MANAGE,
    },
    NavAction {
        label: "READ DOCS",
        href: ROUTE_DOCS,
    },
];

/// Everything the home page shows that depends on its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    ctx: RenderContext,
}

impl HomeView {
    pub const TITLE: &'static str = TITLE_HOME;

    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }

    /// Explorer URL of the registry object. `None` when the layout has no
    /// registry for the active network.
    pub fn explorer_href(&self) -> Option<String> {
        self.ctx.explorer_link(ExplorerKind::Object)
    }

    pub fn network(&self) -> Network {
        self.ctx.network
    }

    pub fn nav_actions(&self) -> &'static [NavAction] {
        &NAV_ACTIONS
    }
}

/// Sets the home title once and tracks the home model through network
/// switches.
fn use_home_view() -> Memo<HomeView> {
    use_page_title(HomeView::TITLE);

    let app_ctx = use_app_context();
    Memo::new(move |_| HomeView::new(app_ctx.render_context()))
}

fn registry_link(href: Option<String>) -> AnyView {
    match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener">{REGISTRY_NAME}</a>
        }
        .into_any(),
        None => view! { <span>{REGISTRY_NAME}</span> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let home = use_home_view();

    if home.with_untracked(|h| h.explorer_href().is_none()) {
        log::warn!(
            "No registry configured for {}, rendering home without explorer link",
            home.with_untracked(|h| h.network())
        );
    }

    let nav_actions = home.with_untracked(|h| h.nav_actions());
    let actions = nav_actions
        .iter()
        .copied()
        .enumerate()
        .map(|(i, action)| {
            let style = if i + 1 < nav_actions.len() { "margin-right: 0.5em;" } else { "" };
            view! {
                <A href=action.href attr:class="btn" attr:style=style>
                    {action.label}
                </A>
            }
        })
        .collect_view();

    view! {
        <div id="page" class="page-home">
            <h1>"HOME"</h1>
            <p>
                "Polymedia Profile is a fully on-chain profile system on "
                <a href=SUI_URL target="_blank" rel="noopener">"Sui"</a>
                ". It lets users attach a profile (name, picture, etc) to their Sui address. \
                 Over 137,000 profiles have been created to date."
                <br/>
                <br/>
                "This web app lets users manage their profiles on the default registry, called "
                <i>{move || registry_link(home.with(|h| h.explorer_href()))}</i>
                "."
                <br/>
                <br/>
                "The code is fully "
                <a href=SOURCE_URL target="_blank" rel="noopener">"open-source"</a>
                ", and there is a "
                <a href=SDK_URL target="_blank" rel="noopener">"TypeScript SDK"</a>
                " to facilitate 3rd party integrations."
            </p>
            {actions}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::title::testing::RecordingTitle;
    use crate::services::title::{provide_title_sink, TitleSink};
    use crate::state::app::AppContext;
    use leptos::reactive::owner::Owner;
    use any_spawner::Executor;
    use shared::{link_to_explorer, ProfileManager};

    const REGISTRY: &str = "0x6d6c7a1c0b05f1c8f5f1e2cfa2c1b9f3e64c2a4d0d5f8e7c3b2a1908f7e6d5c4";

    fn test_manager(network: Network) -> Option<ProfileManager> {
        match network {
            Network::Mainnet => Some(ProfileManager::new("0xaaa")),
            Network::Testnet => Some(ProfileManager::new("0xbbb")),
            _ => None,
        }
    }

    /// Run `use_home_view` under a fresh owner with a recording title sink.
    async fn mount_home(
        network: Network,
        check: impl FnOnce(Memo<HomeView>, &RecordingTitle),
    ) {
        let _ = Executor::init_tokio();
        tokio::task::LocalSet::new()
            .run_until(async move {
                let owner = Owner::new();
                owner.set();

                let title = Arc::new(RecordingTitle::default());
                provide_title_sink(TitleSink::new(title.clone()));
                let app_ctx = AppContext::with_resolver(network, test_manager);
                provide_context(app_ctx);

                let home = use_home_view();
                Executor::tick().await;

                check(home, title.as_ref());
            })
            .await;
    }

    #[tokio::test]
    async fn test_mount_sets_home_title_once() {
        mount_home(Network::Mainnet, |home, title| {
            assert_eq!(title.titles(), vec!["Polymedia Profile - Home".to_string()]);
            assert_eq!(
                home.with(|h| h.explorer_href()).as_deref(),
                Some("https://suiexplorer.com/object/0xaaa")
            );
        })
        .await;
    }

    #[tokio::test]
    async fn test_network_switch_updates_href_without_retitling() {
        let _ = Executor::init_tokio();
        tokio::task::LocalSet::new()
            .run_until(async {
                let owner = Owner::new();
                owner.set();

                let title = Arc::new(RecordingTitle::default());
                provide_title_sink(TitleSink::new(title.clone()));
                let app_ctx = AppContext::with_resolver(Network::Mainnet, test_manager);
                provide_context(app_ctx);

                let home = use_home_view();
                Executor::tick().await;
                assert_eq!(
                    home.with(|h| h.explorer_href()).as_deref(),
                    Some("https://suiexplorer.com/object/0xaaa")
                );

                app_ctx.set_network(Network::Testnet);
                Executor::tick().await;

                assert_eq!(
                    home.with(|h| h.explorer_href()).as_deref(),
                    Some("https://suiexplorer.com/object/0xbbb?network=testnet")
                );
                assert_eq!(title.titles().len(), 1);

                app_ctx.set_network(Network::Devnet);
                Executor::tick().await;

                assert_eq!(home.with(|h| h.explorer_href()), None);
                assert_eq!(title.titles().len(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_mount_without_registry_keeps_nav_actions() {
        mount_home(Network::Localnet, |home, title| {
            assert_eq!(home.with(|h| h.explorer_href()), None);
            assert_eq!(home.with(|h| h.nav_actions().len()), 2);
            assert_eq!(title.titles().len(), 1);
        })
        .await;
    }

    #[test]
    fn test_explorer_href_matches_link_formatter() {
        for network in Network::ALL {
            let home = HomeView::new(RenderContext::new(network, REGISTRY));
            assert_eq!(
                home.explorer_href(),
                Some(link_to_explorer(network, ExplorerKind::Object, REGISTRY))
            );
        }
    }

    #[test]
    fn test_explorer_href_passes_malformed_id_through() {
        let home = HomeView::new(RenderContext::new(Network::Mainnet, "zz"));
        assert_eq!(
            home.explorer_href().as_deref(),
            Some("https://suiexplorer.com/object/zz")
        );
    }

    #[test]
    fn test_exactly_two_nav_actions() {
        let contexts = [
            RenderContext::new(Network::Mainnet, REGISTRY),
            RenderContext::new(Network::Localnet, ""),
            RenderContext::from_parts(Network::Testnet, None),
        ];
        for ctx in contexts {
            let home = HomeView::new(ctx);
            let hrefs: Vec<&str> = home.nav_actions().iter().map(|a| a.href).collect();
            assert_eq!(hrefs, vec!["/manage", "/docs"]);
        }
    }
}
