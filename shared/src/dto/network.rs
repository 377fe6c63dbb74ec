//! Sui network identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The Sui network the app is pointed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    /// Every network, in the order they are offered to the user.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet,
        Network::Devnet,
        Network::Localnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Network::ALL
            .into_iter()
            .find(|network| network.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| NetworkError::Unknown(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("unknown network: {0:?}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!(" Testnet ".parse::<Network>(), Ok(Network::Testnet));
        assert_eq!("DEVNET".parse::<Network>(), Ok(Network::Devnet));
        assert_eq!("localnet".parse::<Network>(), Ok(Network::Localnet));
    }

    #[test]
    fn test_parse_unknown_network() {
        let err = "solana".parse::<Network>().unwrap_err();
        assert_eq!(err, NetworkError::Unknown("solana".to_string()));
        assert_eq!(err.to_string(), "unknown network: \"solana\"");
    }

    #[test]
    fn test_display_matches_parse() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Network::Devnet).unwrap();
        assert_eq!(json, "\"devnet\"");
        let network: Network = serde_json::from_str("\"localnet\"").unwrap();
        assert_eq!(network, Network::Localnet);
    }

    #[test]
    fn test_default_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
    }
}
