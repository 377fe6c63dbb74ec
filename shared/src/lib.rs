//! # Shared Types for Polymedia Profile
//!
//! Target-independent types and helpers used by the web front-end. Nothing in
//! this crate touches the DOM, so it is unit tested natively.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data types passed between the app layout and its pages
//!   - **[`dto::network`]**: The [`Network`](dto::network::Network) a page is rendered against
//!   - **[`dto::context`]**: [`RenderContext`](dto::context::RenderContext) and
//!     [`ProfileManager`](dto::context::ProfileManager)
//! - **[`utils`]**: Formatting helpers
//!   - **[`utils::link_to_explorer`]**: Build a block-explorer URL for an object
//!   - **[`utils::format_address`]** / **[`utils::truncate_address`]**: Shorten ids for display
//!
//! ## Usage
//!
//! ```rust
//! use shared::{ExplorerKind, Network, ProfileManager, RenderContext, link_to_explorer};
//!
//! let manager = ProfileManager::new("0xabc");
//! let ctx = RenderContext::from_parts(Network::Testnet, Some(&manager));
//!
//! assert_eq!(
//!     ctx.explorer_link(ExplorerKind::Object).as_deref(),
//!     Some("https://suiexplorer.com/object/0xabc?network=testnet"),
//! );
//! assert_eq!(
//!     link_to_explorer(Network::Mainnet, ExplorerKind::Address, "0x1"),
//!     "https://suiexplorer.com/address/0x1",
//! );
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
