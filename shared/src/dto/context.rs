//! # Render Context
//!
//! The values a page reads from its parent layout. The layout builds a
//! [`RenderContext`] and hands it to the page; the page never mutates it and
//! gets a fresh one whenever the layout's network changes.

use serde::{Deserialize, Serialize};

use crate::dto::network::Network;
use crate::utils::{link_to_explorer, ExplorerKind};

/// Id of an on-chain Sui object. Opaque: never validated on this side.
pub type ObjectId = String;

/// The subset of the profile manager the front-end pages use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileManager {
    /// The default registry that profiles are created under.
    pub registry_id: ObjectId,
}

impl ProfileManager {
    pub fn new(registry_id: impl Into<ObjectId>) -> Self {
        Self {
            registry_id: registry_id.into(),
        }
    }
}

/// Read-only inputs for rendering a page.
///
/// `registry_id` is `None` when the layout has no profile manager for the
/// active network. Pages render without the registry link in that case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    pub network: Network,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<ObjectId>,
}

impl RenderContext {
    pub fn new(network: Network, registry_id: impl Into<ObjectId>) -> Self {
        Self {
            network,
            registry_id: Some(registry_id.into()),
        }
    }

    pub fn from_parts(network: Network, manager: Option<&ProfileManager>) -> Self {
        Self {
            network,
            registry_id: manager.map(|m| m.registry_id.clone()),
        }
    }

    /// Explorer URL for the registry, if there is one.
    pub fn explorer_link(&self, kind: ExplorerKind) -> Option<String> {
        self.registry_id
            .as_deref()
            .map(|id| link_to_explorer(self.network, kind, id))
    }
}
