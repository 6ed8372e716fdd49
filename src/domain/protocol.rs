use crate::utils::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Transport protocol bit set. The empty set is a bare payload with no framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Protocol(u8);

const NAMES: [(Protocol, &str); 5] = [
    (Protocol::TTHEADER, "TTHeader"),
    (Protocol::FRAMED, "Framed"),
    (Protocol::HTTP, "HTTP"),
    (Protocol::GRPC, "GRPC"),
    (Protocol::HESSIAN2, "HESSIAN2"),
];

impl Protocol {
    pub const PURE_PAYLOAD: Protocol = Protocol(0);
    pub const TTHEADER: Protocol = Protocol(1 << 0);
    pub const FRAMED: Protocol = Protocol(1 << 1);
    pub const HTTP: Protocol = Protocol(1 << 2);
    pub const GRPC: Protocol = Protocol(1 << 3);
    pub const HESSIAN2: Protocol = Protocol(1 << 4);
    pub const TTHEADER_FRAMED: Protocol = Protocol(Self::TTHEADER.0 | Self::FRAMED.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Protocol) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_pure_payload(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Protocol {
    type Output = Protocol;

    fn bitor(self, rhs: Protocol) -> Protocol {
        Protocol(self.0 | rhs.0)
    }
}

impl BitOrAssign for Protocol {
    fn bitor_assign(&mut self, rhs: Protocol) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pure_payload() {
            return f.write_str("PurePayload");
        }
        let names: Vec<&str> = NAMES
            .iter()
            .filter(|(p, _)| self.contains(*p))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join("|"))
    }
}

impl FromStr for Protocol {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|').try_fold(Protocol::PURE_PAYLOAD, |acc, part| {
            let single = match part.trim().to_ascii_lowercase().replace('-', "_").as_str() {
                "pure_payload" | "purepayload" => Protocol::PURE_PAYLOAD,
                "ttheader" => Protocol::TTHEADER,
                "framed" => Protocol::FRAMED,
                "ttheader_framed" | "ttheaderframed" => Protocol::TTHEADER_FRAMED,
                "http" => Protocol::HTTP,
                "grpc" => Protocol::GRPC,
                "hessian2" => Protocol::HESSIAN2,
                _ => {
                    return Err(HarnessError::invalid_value(
                        "protocol",
                        s,
                        "Unknown transport protocol",
                    ))
                }
            };
            Ok(acc | single)
        })
    }
}

impl TryFrom<String> for Protocol {
    type Error = HarnessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Protocol> for String {
    fn from(value: Protocol) -> Self {
        value.to_string()
    }
}
