//! # Data Types
//!
//! - [`network`] - Sui network identifiers
//! - [`context`] - The read-only context a page is rendered with
//!
//! ## Serialization Format
//!
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`

pub mod context;
pub mod network;

pub use context::*;
pub use network::*;
