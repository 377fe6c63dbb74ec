//! Application constants
//!
//! Registry ids and the default network are read at compile time, e.g.
//! `PROFILE_REGISTRY_MAINNET=0x... trunk build --release`.

use shared::{Network, ObjectId, ProfileManager};

// Page titles
pub const TITLE_HOME: &str = "Polymedia Profile - Home";
pub const TITLE_MANAGE: &str = "Polymedia Profile - Manage";
pub const TITLE_DOCS: &str = "Polymedia Profile - Docs";

// Routes
pub const ROUTE_HOME: &str = "/";
pub const ROUTE_MANAGE: &str = "/manage";
pub const ROUTE_DOCS: &str = "/docs";

// External links
pub const SUI_URL: &str = "https://sui.io";
pub const SOURCE_URL: &str = "https://github.com/juzybits/polymedia-profile";
pub const SDK_URL: &str = "https://www.npmjs.com/package/@polymedia/profile-sdk";

/// Display name of the default registry.
pub const REGISTRY_NAME: &str = "polymedia-main";

/// Query parameter that selects the network on load.
pub const NETWORK_QUERY_PARAM: &str = "network";

const DEFAULT_NETWORK_ENV: Option<&str> = option_env!("PROFILE_NETWORK");

const REGISTRY_MAINNET: Option<&str> = option_env!("PROFILE_REGISTRY_MAINNET");
const REGISTRY_TESTNET: Option<&str> = option_env!("PROFILE_REGISTRY_TESTNET");
const REGISTRY_DEVNET: Option<&str> = option_env!("PROFILE_REGISTRY_DEVNET");
const REGISTRY_LOCALNET: Option<&str> = option_env!("PROFILE_REGISTRY_LOCALNET");

/// Network used when the URL does not pick one.
pub fn default_network() -> Network {
    match DEFAULT_NETWORK_ENV {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring PROFILE_NETWORK: {}", e);
            Network::default()
        }),
        None => Network::default(),
    }
}

fn registry_id(network: Network) -> Option<ObjectId> {
    let raw = match network {
        Network::Mainnet => REGISTRY_MAINNET,
        Network::Testnet => REGISTRY_TESTNET,
        Network::Devnet => REGISTRY_DEVNET,
        Network::Localnet => REGISTRY_LOCALNET,
    };
    raw.map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Profile manager for `network`, if a registry is configured for it.
pub fn profile_manager(network: Network) -> Option<ProfileManager> {
    registry_id(network).map(ProfileManager::new)
}
