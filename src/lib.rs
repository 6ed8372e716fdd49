pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, FixtureKind};
pub use crate::config::HarnessConfig;

pub use crate::core::client::{
    create_client, create_client_from, ClientInitParam, ClientOption, ConnectionPolicy,
    IdleConfig, StServiceClient,
};
pub use crate::core::fixtures::{create_obj_req, create_st_request};
pub use crate::core::metainfo::Context;
pub use crate::domain::conn_mode::ConnectionMode;
pub use crate::domain::protocol::Protocol;
pub use crate::utils::error::{HarnessError, Result};
