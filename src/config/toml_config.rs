use crate::core::client::{ClientInitParam, ClientOption};
use crate::core::runtime::RuntimeSettings;
use crate::domain::conn_mode::ConnectionMode;
use crate::domain::ports::ClientParamProvider;
use crate::domain::protocol::Protocol;
use crate::utils::error::{HarnessError, Result};
use crate::utils::validation::{
    validate_host_port, validate_non_empty_string, validate_timeout_ms, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    pub client: ClientSection,
    pub runtime: Option<RuntimeSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub service_name: String,
    #[serde(default)]
    pub host_ports: Vec<String>,
    #[serde(default)]
    pub protocol: Protocol,
    #[serde(default)]
    pub conn_mode: ConnectionMode,
    pub rpc_timeout_ms: Option<u64>,
    pub connect_timeout_ms: Option<u64>,
}

impl HarnessConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HarnessError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HarnessError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TARGET_ADDR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HarnessError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("client.service_name", &self.client.service_name)?;
        for hp in &self.client.host_ports {
            validate_host_port("client.host_ports", hp)?;
        }
        if let Some(ms) = self.client.rpc_timeout_ms {
            validate_timeout_ms("client.rpc_timeout_ms", ms)?;
        }
        if let Some(ms) = self.client.connect_timeout_ms {
            validate_timeout_ms("client.connect_timeout_ms", ms)?;
        }
        if let Some(runtime) = &self.runtime {
            runtime.validate()?;
        }
        Ok(())
    }
}

impl ClientParamProvider for HarnessConfig {
    fn client_init_param(&self) -> ClientInitParam {
        ClientInitParam {
            target_service_name: self.client.service_name.clone(),
            host_ports: self.client.host_ports.clone(),
            protocol: self.client.protocol,
            conn_mode: self.client.conn_mode,
        }
    }

    fn extra_options(&self) -> Vec<ClientOption> {
        let mut opts = Vec::new();
        if let Some(ms) = self.client.rpc_timeout_ms {
            opts.push(ClientOption::RpcTimeout(Duration::from_millis(ms)));
        }
        if let Some(ms) = self.client.connect_timeout_ms {
            opts.push(ClientOption::ConnectTimeout(Duration::from_millis(ms)));
        }
        opts
    }

    fn runtime_settings(&self) -> RuntimeSettings {
        self.runtime.clone().unwrap_or_default()
    }
}
