use crate::config::toml_config::HarnessConfig;
use crate::core::client::{ClientInitParam, ClientOption};
use crate::domain::conn_mode::ConnectionMode;
use crate::domain::ports::ClientParamProvider;
use crate::domain::protocol::Protocol;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_host_port, validate_non_empty_string, validate_timeout_ms, Validate,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureKind {
    /// Flat request with boundary scalars and random strings.
    St,
    /// Nested request with message-keyed map and set.
    Obj,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "thriftrpc-harness")]
#[command(about = "Build a stability-service client and print a request fixture")]
pub struct CliConfig {
    #[arg(long, help = "TOML file; overrides the client flags below")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "stability.server")]
    pub service: String,

    #[arg(long, value_delimiter = ',')]
    pub host_ports: Vec<String>,

    #[arg(long, default_value = "pure_payload")]
    pub protocol: Protocol,

    #[arg(long, default_value = "short")]
    pub conn_mode: ConnectionMode,

    #[arg(long)]
    pub rpc_timeout_ms: Option<u64>,

    #[arg(long, value_enum, default_value = "st")]
    pub fixture: FixtureKind,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file when one was given.
    pub fn resolve(&self) -> Result<Box<dyn ClientParamProvider>> {
        match &self.config {
            Some(path) => {
                let config = HarnessConfig::from_file(path)?;
                config.validate()?;
                Ok(Box::new(config))
            }
            None => {
                self.validate()?;
                Ok(Box::new(self.clone()))
            }
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("service", &self.service)?;
        for hp in &self.host_ports {
            validate_host_port("host_ports", hp)?;
        }
        if let Some(ms) = self.rpc_timeout_ms {
            validate_timeout_ms("rpc_timeout_ms", ms)?;
        }
        Ok(())
    }
}

impl ClientParamProvider for CliConfig {
    fn client_init_param(&self) -> ClientInitParam {
        ClientInitParam {
            target_service_name: self.service.clone(),
            host_ports: self.host_ports.clone(),
            protocol: self.protocol,
            conn_mode: self.conn_mode,
        }
    }

    fn extra_options(&self) -> Vec<ClientOption> {
        self.rpc_timeout_ms
            .map(|ms| ClientOption::RpcTimeout(Duration::from_millis(ms)))
            .into_iter()
            .collect()
    }
}
