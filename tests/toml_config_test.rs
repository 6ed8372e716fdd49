use std::time::Duration;
use tempfile::TempDir;
use thriftrpc_harness::core::runtime::RuntimeSettings;
use thriftrpc_harness::domain::ports::ClientParamProvider;
use thriftrpc_harness::utils::validation::Validate;
use thriftrpc_harness::{
    create_client_from, ConnectionMode, ConnectionPolicy, HarnessConfig, HarnessError, Protocol,
};

#[test]
fn test_load_full_config_and_build_client() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("harness.toml");
    std::fs::write(
        &config_path,
        r#"
[client]
service_name = "stability.server"
host_ports = ["127.0.0.1:8001", "[::1]:8002"]
protocol = "ttheader_framed"
conn_mode = "mux"
rpc_timeout_ms = 1500
connect_timeout_ms = 200

[runtime]
worker_threads = 2
"#,
    )?;

    let config = HarnessConfig::from_file(&config_path)?;
    config.validate()?;

    let param = config.client_init_param();
    assert_eq!(param.protocol, Protocol::TTHEADER_FRAMED);
    assert_eq!(param.conn_mode, ConnectionMode::Multiplexed);
    assert_eq!(
        config.runtime_settings(),
        RuntimeSettings {
            worker_threads: 2,
            log_level: "error".to_string(),
        }
    );

    let client = create_client_from(&config)?;
    assert_eq!(client.host_ports().len(), 2);
    assert_eq!(client.rpc_timeout(), Some(Duration::from_millis(1500)));
    assert_eq!(client.connect_timeout(), Some(Duration::from_millis(200)));
    assert_eq!(client.connection(), ConnectionPolicy::Mux { connections: 4 });
    assert_eq!(
        client.applied_options(),
        [
            "WithHostPorts",
            "WithRPCTimeout",
            "WithConnectTimeout",
            "WithTransportProtocol",
            "WithMuxConnection"
        ]
    );
    Ok(())
}

#[test]
fn test_env_var_substitution() -> anyhow::Result<()> {
    std::env::set_var("THRIFTRPC_HARNESS_TEST_ADDR", "192.168.1.10:8888");
    let config = HarnessConfig::from_toml_str(
        r#"
[client]
service_name = "stability.server"
host_ports = ["${THRIFTRPC_HARNESS_TEST_ADDR}"]
conn_mode = "long"
"#,
    )?;

    assert_eq!(config.client.host_ports, vec!["192.168.1.10:8888".to_string()]);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = HarnessConfig::from_file(temp_dir.path().join("absent.toml"));
    assert!(matches!(result, Err(HarnessError::IoError(_))));
}

#[test]
fn test_invalid_runtime_section_fails_validation() {
    let config = HarnessConfig::from_toml_str(
        r#"
[client]
service_name = "stability.server"

[runtime]
worker_threads = 0
"#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}
