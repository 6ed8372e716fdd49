use crate::utils::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the client holds connections to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionMode {
    /// One connection per call.
    #[default]
    Short,
    /// Pooled, reused across calls.
    Long,
    /// A few shared connections carrying concurrent calls.
    #[serde(alias = "mux")]
    Multiplexed,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionMode::Short => "short",
            ConnectionMode::Long => "long",
            ConnectionMode::Multiplexed => "multiplexed",
        };
        f.write_str(name)
    }
}

impl FromStr for ConnectionMode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(ConnectionMode::Short),
            "long" => Ok(ConnectionMode::Long),
            "mux" | "multiplexed" => Ok(ConnectionMode::Multiplexed),
            _ => Err(HarnessError::invalid_value(
                "conn_mode",
                s,
                "Expected one of: short, long, mux",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conn_mode() {
        assert_eq!("Long".parse::<ConnectionMode>().unwrap(), ConnectionMode::Long);
        assert_eq!("mux".parse::<ConnectionMode>().unwrap(), ConnectionMode::Multiplexed);
        assert!("pooled".parse::<ConnectionMode>().is_err());
        assert_eq!(ConnectionMode::default(), ConnectionMode::Short);
    }

    #[test]
    fn test_serde_snake_case_with_mux_alias() {
        let json = serde_json::to_string(&ConnectionMode::Multiplexed).unwrap();
        assert_eq!(json, "\"multiplexed\"");
        let back: ConnectionMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ConnectionMode::Multiplexed);

        let alias: ConnectionMode = serde_json::from_str("\"mux\"").unwrap();
        assert_eq!(alias, ConnectionMode::Multiplexed);
        let long: ConnectionMode = serde_json::from_str("\"long\"").unwrap();
        assert_eq!(long, ConnectionMode::Long);
    }
}
