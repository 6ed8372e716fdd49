pub mod client;
pub mod fixtures;
pub mod metainfo;
pub mod runtime;

pub use crate::domain::ports::ClientParamProvider;
pub use crate::utils::error::Result;
