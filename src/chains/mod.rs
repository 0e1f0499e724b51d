mod registry;
mod types;

pub use registry::{all_chains, is_evm_chain, is_home_chain, lookup_by_id};
pub use types::{Chain, ChainNetwork, NetworkType, VmType};
