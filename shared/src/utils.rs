//! # Shared Utility Functions
//!
//! ## Explorer Links
//!
//! - [`link_to_explorer`] - URL of an object, address or transaction on the Sui explorer
//!
//! ## Address Formatting
//!
//! Functions for formatting Sui object ids and addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x6d6c7a1c0b05f1c8f5f1e2cfa2c1b9f3e64c2a4d0d5f8e7c3b2a1908f7e6d5c4";
//! assert_eq!(format_address(address, 6, 4), "0x6d6c...d5c4");
//! ```

use crate::dto::network::Network;

const EXPLORER_URL: &str = "https://suiexplorer.com";

/// What an explorer link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorerKind {
    Object,
    Address,
    TxBlock,
}

impl ExplorerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplorerKind::Object => "object",
            ExplorerKind::Address => "address",
            ExplorerKind::TxBlock => "txblock",
        }
    }
}

/// Build a Sui explorer URL.
///
/// `id` is inserted as given; a malformed id produces a malformed link.
///
/// # Examples
///
/// ```rust
/// use shared::{link_to_explorer, ExplorerKind, Network};
///
/// assert_eq!(
///     link_to_explorer(Network::Devnet, ExplorerKind::TxBlock, "Abc1"),
///     "https://suiexplorer.com/txblock/Abc1?network=devnet",
/// );
/// assert_eq!(
///     link_to_explorer(Network::Localnet, ExplorerKind::Object, "0x2"),
///     "https://suiexplorer.com/object/0x2?network=local",
/// );
/// ```
pub fn link_to_explorer(network: Network, kind: ExplorerKind, id: &str) -> String {
    let base = format!("{}/{}/{}", EXPLORER_URL, kind.as_str(), id);
    match network {
        Network::Mainnet => base,
        Network::Localnet => format!("{}?network=local", base),
        Network::Testnet | Network::Devnet => format!("{}?network={}", base, network),
    }
}

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1a2b3c4d5e6f7a8b9c0d";
/// assert_eq!(format_address(addr, 6, 4), "0x1a2b...9c0d");
/// assert_eq!(format_address("0x1", 4, 4), "0x1");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address with a `0x` plus 4-character prefix and a 4-character suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0x1a2b3c4d5e6f7a8b9c0d"), "0x1a2b...9c0d");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
