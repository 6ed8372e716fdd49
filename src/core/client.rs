use crate::domain::conn_mode::ConnectionMode;
use crate::domain::ports::ClientParamProvider;
use crate::domain::protocol::Protocol;
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{validate_host_port, validate_non_empty_string};
use std::time::Duration;

pub const MAX_IDLE_PER_ADDRESS: usize = 1000;
pub const MAX_IDLE_GLOBAL: usize = MAX_IDLE_PER_ADDRESS * 10;
pub const MAX_IDLE_TIMEOUT: Duration = Duration::from_secs(30);
pub const MUX_CONNECTIONS: usize = 4;

const MIN_IDLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Idle-pool limits for long connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleConfig {
    pub max_idle_per_address: usize,
    pub max_idle_global: usize,
    pub max_idle_timeout: Duration,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            max_idle_per_address: MAX_IDLE_PER_ADDRESS,
            max_idle_global: MAX_IDLE_GLOBAL,
            max_idle_timeout: MAX_IDLE_TIMEOUT,
        }
    }
}

impl IdleConfig {
    /// Clamps out-of-range limits the way the pool would at creation.
    pub fn normalized(self) -> Self {
        let max_idle_timeout = if self.max_idle_timeout.is_zero() {
            MAX_IDLE_TIMEOUT
        } else {
            self.max_idle_timeout.max(MIN_IDLE_TIMEOUT)
        };
        let max_idle_per_address = self.max_idle_per_address.max(1);
        let max_idle_global = self.max_idle_global.max(max_idle_per_address);
        Self {
            max_idle_per_address,
            max_idle_global,
            max_idle_timeout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOption {
    HostPorts(Vec<String>),
    TransportProtocol(Protocol),
    LongConnection(IdleConfig),
    MuxConnection(usize),
    RpcTimeout(Duration),
    ConnectTimeout(Duration),
}

impl ClientOption {
    pub fn name(&self) -> &'static str {
        match self {
            ClientOption::HostPorts(_) => "WithHostPorts",
            ClientOption::TransportProtocol(_) => "WithTransportProtocol",
            ClientOption::LongConnection(_) => "WithLongConnection",
            ClientOption::MuxConnection(_) => "WithMuxConnection",
            ClientOption::RpcTimeout(_) => "WithRPCTimeout",
            ClientOption::ConnectTimeout(_) => "WithConnectTimeout",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionPolicy {
    #[default]
    Short,
    Long(IdleConfig),
    Mux { connections: usize },
}

/// Parameters the suites use to pick a client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientInitParam {
    pub target_service_name: String,
    pub host_ports: Vec<String>,
    pub protocol: Protocol,
    pub conn_mode: ConnectionMode,
}

/// Client for the stability service, holding the options it was built from.
#[derive(Debug, Clone)]
pub struct StServiceClient {
    service_name: String,
    host_ports: Vec<String>,
    protocol: Protocol,
    connection: ConnectionPolicy,
    rpc_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    applied: Vec<&'static str>,
}

impl StServiceClient {
    pub fn new(service_name: &str, opts: Vec<ClientOption>) -> Result<Self> {
        validate_non_empty_string("target_service_name", service_name).map_err(|e| {
            HarnessError::ClientBuildError {
                service: service_name.to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut client = Self {
            service_name: service_name.to_string(),
            host_ports: Vec::new(),
            protocol: Protocol::PURE_PAYLOAD,
            connection: ConnectionPolicy::Short,
            rpc_timeout: None,
            connect_timeout: None,
            applied: Vec::with_capacity(opts.len()),
        };

        for opt in opts {
            client.applied.push(opt.name());
            client.apply(opt).map_err(|e| HarnessError::ClientBuildError {
                service: service_name.to_string(),
                reason: e.to_string(),
            })?;
        }

        tracing::debug!(
            service = %client.service_name,
            host_ports = ?client.host_ports,
            protocol = %client.protocol,
            connection = ?client.connection,
            "client created"
        );
        Ok(client)
    }

    fn apply(&mut self, opt: ClientOption) -> Result<()> {
        match opt {
            ClientOption::HostPorts(host_ports) => {
                for hp in &host_ports {
                    validate_host_port("host_ports", hp)?;
                }
                self.host_ports = host_ports;
            }
            ClientOption::TransportProtocol(protocol) => self.protocol |= protocol,
            ClientOption::LongConnection(idle) => {
                self.connection = ConnectionPolicy::Long(idle.normalized());
            }
            ClientOption::MuxConnection(connections) => {
                if connections == 0 {
                    return Err(HarnessError::invalid_value(
                        "mux_connections",
                        connections,
                        "At least one connection is required",
                    ));
                }
                self.connection = ConnectionPolicy::Mux { connections };
                // mux frames ride on TTHeader
                self.protocol |= Protocol::TTHEADER;
            }
            ClientOption::RpcTimeout(timeout) => self.rpc_timeout = Some(timeout),
            ClientOption::ConnectTimeout(timeout) => self.connect_timeout = Some(timeout),
        }
        Ok(())
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn host_ports(&self) -> &[String] {
        &self.host_ports
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn connection(&self) -> ConnectionPolicy {
        self.connection
    }

    pub fn rpc_timeout(&self) -> Option<Duration> {
        self.rpc_timeout
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Names of the options in the order they were applied.
    pub fn applied_options(&self) -> &[&'static str] {
        &self.applied
    }
}

/// Expands `param` into client options and builds the client.
///
/// Host ports from `param` go first so that a `HostPorts` entry in `opts`
/// replaces them. The protocol is only set when it is not a pure payload.
pub fn create_client(param: &ClientInitParam, opts: Vec<ClientOption>) -> Result<StServiceClient> {
    StServiceClient::new(&param.target_service_name, client_options(param, opts))
}

pub fn create_client_from<P: ClientParamProvider + ?Sized>(provider: &P) -> Result<StServiceClient> {
    create_client(&provider.client_init_param(), provider.extra_options())
}

pub fn client_options(param: &ClientInitParam, opts: Vec<ClientOption>) -> Vec<ClientOption> {
    let mut all = Vec::with_capacity(opts.len() + 3);
    if !param.host_ports.is_empty() {
        all.push(ClientOption::HostPorts(param.host_ports.clone()));
    }
    all.extend(opts);

    if !param.protocol.is_pure_payload() {
        all.push(ClientOption::TransportProtocol(param.protocol));
    }

    match param.conn_mode {
        ConnectionMode::Long => all.push(ClientOption::LongConnection(IdleConfig::default())),
        ConnectionMode::Multiplexed => all.push(ClientOption::MuxConnection(MUX_CONNECTIONS)),
        ConnectionMode::Short => {}
    }
    all
}
