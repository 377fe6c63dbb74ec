//! App-wide state provided by the layout to every page

use leptos::prelude::*;
use shared::{Network, ProfileManager, RenderContext};

use crate::utils::constants::{default_network, profile_manager, NETWORK_QUERY_PARAM};
use crate::utils::url::get_query_param;

/// Global app context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub network: RwSignal<Network>,
    resolve_manager: fn(Network) -> Option<ProfileManager>,
}

impl AppContext {
    pub fn new(network: Network) -> Self {
        Self::with_resolver(network, profile_manager)
    }

    /// Context whose profile managers come from `resolve_manager` instead of
    /// the compile-time configuration.
    pub fn with_resolver(
        network: Network,
        resolve_manager: fn(Network) -> Option<ProfileManager>,
    ) -> Self {
        Self {
            network: RwSignal::new(network),
            resolve_manager,
        }
    }

    /// Snapshot of what a page renders with. Tracks `network` when called
    /// inside a reactive scope.
    pub fn render_context(&self) -> RenderContext {
        let network = self.network.get();
        let manager = (self.resolve_manager)(network);
        RenderContext::from_parts(network, manager.as_ref())
    }

    pub fn set_network(&self, network: Network) {
        if self.network.get_untracked() != network {
            log::info!("Switching network to {}", network);
            self.network.set(network);
        }
    }
}

/// Network to start on: the `?network=` query parameter when it parses,
/// the configured default otherwise.
pub fn initial_network() -> Network {
    match get_query_param(NETWORK_QUERY_PARAM) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring ?{}= query parameter: {}", NETWORK_QUERY_PARAM, e);
            default_network()
        }),
        None => default_network(),
    }
}

pub fn provide_app_context() -> AppContext {
    let context = AppContext::new(initial_network());
    provide_context(context);
    context
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn test_manager(network: Network) -> Option<ProfileManager> {
        match network {
            Network::Mainnet => Some(ProfileManager::new("0xmain")),
            Network::Testnet => Some(ProfileManager::new("0xtest")),
            _ => None,
        }
    }

    #[test]
    fn test_render_context_follows_network() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::with_resolver(Network::Mainnet, test_manager);
            assert_eq!(ctx.render_context(), RenderContext::new(Network::Mainnet, "0xmain"));

            ctx.set_network(Network::Testnet);
            assert_eq!(ctx.network.get(), Network::Testnet);
            assert_eq!(ctx.render_context(), RenderContext::new(Network::Testnet, "0xtest"));
        });
    }

    #[test]
    fn test_render_context_without_manager() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::with_resolver(Network::Devnet, test_manager);
            assert_eq!(ctx.render_context().registry_id, None);
        });
    }
}
