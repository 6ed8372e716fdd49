use std::time::Duration;
use thriftrpc_harness::{
    create_client, ClientInitParam, ClientOption, ConnectionMode, ConnectionPolicy, HarnessError,
    IdleConfig, Protocol,
};

fn param(protocol: Protocol, conn_mode: ConnectionMode) -> ClientInitParam {
    ClientInitParam {
        target_service_name: "stability.server".to_string(),
        host_ports: vec!["127.0.0.1:8001".to_string()],
        protocol,
        conn_mode,
    }
}

#[test]
fn test_short_connection_pure_payload() {
    let client = create_client(&param(Protocol::PURE_PAYLOAD, ConnectionMode::Short), vec![]).unwrap();

    assert_eq!(client.service_name(), "stability.server");
    assert_eq!(client.host_ports(), ["127.0.0.1:8001".to_string()]);
    assert!(client.protocol().is_pure_payload());
    assert_eq!(client.connection(), ConnectionPolicy::Short);
    assert_eq!(client.applied_options(), ["WithHostPorts"]);
}

#[test]
fn test_long_connection_uses_fixed_pool_limits() {
    let client = create_client(&param(Protocol::TTHEADER, ConnectionMode::Long), vec![]).unwrap();

    assert_eq!(client.protocol(), Protocol::TTHEADER);
    assert_eq!(
        client.connection(),
        ConnectionPolicy::Long(IdleConfig {
            max_idle_per_address: 1000,
            max_idle_global: 10_000,
            max_idle_timeout: Duration::from_secs(30),
        })
    );
    assert_eq!(
        client.applied_options(),
        ["WithHostPorts", "WithTransportProtocol", "WithLongConnection"]
    );
}

#[test]
fn test_multiplexed_uses_four_connections_over_ttheader() {
    let client = create_client(&param(Protocol::PURE_PAYLOAD, ConnectionMode::Multiplexed), vec![]).unwrap();

    assert_eq!(client.connection(), ConnectionPolicy::Mux { connections: 4 });
    assert!(client.protocol().contains(Protocol::TTHEADER));

    let framed = create_client(&param(Protocol::FRAMED, ConnectionMode::Multiplexed), vec![]).unwrap();
    assert_eq!(framed.protocol(), Protocol::TTHEADER_FRAMED);
}

#[test]
fn test_caller_host_ports_take_priority() {
    let client = create_client(
        &param(Protocol::PURE_PAYLOAD, ConnectionMode::Short),
        vec![ClientOption::HostPorts(vec!["10.0.0.1:9000".to_string()])],
    )
    .unwrap();

    assert_eq!(client.host_ports(), ["10.0.0.1:9000".to_string()]);
    assert_eq!(client.applied_options(), ["WithHostPorts", "WithHostPorts"]);
}

#[test]
fn test_empty_host_ports_adds_no_option() {
    let mut p = param(Protocol::PURE_PAYLOAD, ConnectionMode::Short);
    p.host_ports.clear();
    let client = create_client(&p, vec![ClientOption::RpcTimeout(Duration::from_millis(500))]).unwrap();

    assert!(client.host_ports().is_empty());
    assert_eq!(client.rpc_timeout(), Some(Duration::from_millis(500)));
    assert_eq!(client.connect_timeout(), None);
    assert_eq!(client.applied_options(), ["WithRPCTimeout"]);
}

#[test]
fn test_mode_from_param_overrides_caller_connection_option() {
    let client = create_client(
        &param(Protocol::PURE_PAYLOAD, ConnectionMode::Long),
        vec![ClientOption::MuxConnection(8)],
    )
    .unwrap();

    assert!(matches!(client.connection(), ConnectionPolicy::Long(_)));
}

#[test]
fn test_invalid_host_port_fails_construction() {
    let mut p = param(Protocol::PURE_PAYLOAD, ConnectionMode::Short);
    p.host_ports = vec!["not-an-address".to_string()];

    match create_client(&p, vec![]) {
        Err(HarnessError::ClientBuildError { service, reason }) => {
            assert_eq!(service, "stability.server");
            assert!(reason.contains("not-an-address"));
        }
        other => panic!("expected ClientBuildError, got {:?}", other),
    }
}

#[test]
fn test_empty_service_name_fails_construction() {
    let mut p = param(Protocol::PURE_PAYLOAD, ConnectionMode::Short);
    p.target_service_name = "  ".to_string();

    assert!(matches!(
        create_client(&p, vec![]),
        Err(HarnessError::ClientBuildError { .. })
    ));
}

#[test]
fn test_unbalanced_brackets_fail_construction() {
    for addr in ["[::1:8888", "]:80", "a]b:80", "[x:80"] {
        let mut p = param(Protocol::PURE_PAYLOAD, ConnectionMode::Short);
        p.host_ports = vec![addr.to_string()];

        assert!(
            matches!(create_client(&p, vec![]), Err(HarnessError::ClientBuildError { .. })),
            "{} should be rejected",
            addr
        );
    }
}
