use std::fmt;

use serde::{Deserialize, Serialize};

/// Network a chain belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChainNetwork {
    /// The home ledger network
    Pell,
    /// Ethereum and derived networks
    Eth,
    /// BNB Smart Chain networks
    Bsc,
    /// Polygon PoS networks
    Polygon,
}

/// Deployment tier of a network
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NetworkType {
    Mainnet,
    Testnet,
    Privnet,
}

/// Execution environment of a chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VmType {
    Evm,
    None,
}

/// Static chain descriptor
///
/// Descriptors are compiled in and immutable; the `id` is globally unique
/// across the table and is the only lookup key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Chain {
    pub id: i64,
    pub network: ChainNetwork,
    pub network_type: NetworkType,
    pub vm_type: VmType,
}

impl Chain {
    pub fn is_evm(&self) -> bool {
        self.vm_type == VmType::Evm
    }

    pub fn is_home(&self) -> bool {
        self.network == ChainNetwork::Pell
    }
}

impl fmt::Display for ChainNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainNetwork::Pell => write!(f, "pell"),
            ChainNetwork::Eth => write!(f, "eth"),
            ChainNetwork::Bsc => write!(f, "bsc"),
            ChainNetwork::Polygon => write!(f, "polygon"),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Mainnet => write!(f, "mainnet"),
            NetworkType::Testnet => write!(f, "testnet"),
            NetworkType::Privnet => write!(f, "privnet"),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}:{}", self.network, self.network_type, self.id)
    }
}
