use once_cell::sync::Lazy;

use super::types::{Chain, ChainNetwork, NetworkType, VmType};

/// Compiled-in table of known chains.
///
/// The home network appears once per deployment tier; every other entry is
/// an external chain the ledger bridges to. Ids are unique across the table.
static CHAINS: Lazy<Vec<Chain>> = Lazy::new(|| {
    use ChainNetwork::*;
    use NetworkType::*;

    vec![
        // Home network
        chain(186, Pell, Mainnet, VmType::Evm),
        chain(187, Pell, Testnet, VmType::Evm),
        chain(101, Pell, Privnet, VmType::Evm),
        // Ethereum
        chain(1, Eth, Mainnet, VmType::Evm),
        chain(11155111, Eth, Testnet, VmType::Evm),
        chain(1337, Eth, Privnet, VmType::Evm),
        // BNB Smart Chain
        chain(56, Bsc, Mainnet, VmType::Evm),
        chain(97, Bsc, Testnet, VmType::Evm),
        // Polygon
        chain(137, Polygon, Mainnet, VmType::Evm),
        chain(80002, Polygon, Testnet, VmType::Evm),
    ]
});

const fn chain(id: i64, network: ChainNetwork, network_type: NetworkType, vm_type: VmType) -> Chain {
    Chain {
        id,
        network,
        network_type,
        vm_type,
    }
}

/// All known chain descriptors
pub fn all_chains() -> &'static [Chain] {
    &CHAINS
}

/// Resolve a chain descriptor by exact id match
pub fn lookup_by_id(id: i64) -> Option<&'static Chain> {
    CHAINS.iter().find(|chain| chain.id == id)
}

/// Whether `id` resolves to a chain running an EVM
pub fn is_evm_chain(id: i64) -> bool {
    lookup_by_id(id).is_some_and(Chain::is_evm)
}

/// Whether `id` resolves to the home network
pub fn is_home_chain(id: i64) -> bool {
    lookup_by_id(id).is_some_and(Chain::is_home)
}
