use crate::utils::error::{HarnessError, Result};
use std::net::Ipv6Addr;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarnessError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HarnessError::invalid_value(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_timeout_ms(field_name: &str, ms: u64) -> Result<()> {
    if ms == 0 {
        return Err(HarnessError::invalid_value(
            field_name,
            ms,
            "Timeout must be at least 1ms",
        ));
    }
    Ok(())
}

/// Accepts `host:port` and `[v6addr]:port`; the host may be a name.
pub fn validate_host_port(field_name: &str, addr: &str) -> Result<()> {
    let Some((host, port)) = addr.rsplit_once(':') else {
        return Err(HarnessError::invalid_value(
            field_name,
            addr,
            "Expected host:port",
        ));
    };

    let (host, bracketed) = match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(inner) => (inner, true),
        None => (host, false),
    };
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(HarnessError::invalid_value(
            field_name,
            addr,
            "Host cannot be empty or contain whitespace",
        ));
    }
    if host.contains(['[', ']']) {
        return Err(HarnessError::invalid_value(
            field_name,
            addr,
            "Unbalanced brackets around host",
        ));
    }
    if bracketed && host.parse::<Ipv6Addr>().is_err() {
        return Err(HarnessError::invalid_value(
            field_name,
            addr,
            "Bracketed host must be an IPv6 address",
        ));
    }
    if !bracketed && host.contains(':') {
        return Err(HarnessError::invalid_value(
            field_name,
            addr,
            "IPv6 hosts must be bracketed",
        ));
    }

    match port.parse::<u16>() {
        Ok(0) => Err(HarnessError::invalid_value(field_name, addr, "Port cannot be 0")),
        Ok(_) => Ok(()),
        Err(e) => Err(HarnessError::invalid_value(
            field_name,
            addr,
            format!("Invalid port: {}", e),
        )),
    }
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    LevelFilter::from_str(level)
        .map(|_| ())
        .map_err(|e| HarnessError::invalid_value(field_name, level, e.to_string()))
}
