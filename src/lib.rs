pub mod chains;
pub mod ratelimiter;
pub mod xmsg;

// Re-exports
pub use chains::{Chain, ChainNetwork, NetworkType, VmType};
pub use ratelimiter::{RateLimiterFlags, RateLimiterInput, RateLimiterOutput};
pub use xmsg::{InboundVote, Status, Xmsg, XmsgError, XmsgStatus};

// Core types
pub type Result<T> = std::result::Result<T, Error>;
pub use error::Error;

pub mod error;
