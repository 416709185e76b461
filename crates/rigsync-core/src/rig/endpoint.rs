use std::fmt;
use std::str::FromStr;

use crate::config::RigConfig;
use crate::Error;

/// Address of one rig-control endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RigEndpoint {
    /// Hostname or IP address of the machine running rigctld
    pub host: String,
    /// TCP port rigctld listens on
    pub port: u16,
}

impl RigEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl From<&RigConfig> for RigEndpoint {
    fn from(config: &RigConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }
}

impl fmt::Display for RigEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for RigEndpoint {
    type Err = Error;

    /// Parse a `host:port` string, as passed on the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s.rsplit_once(':').ok_or_else(|| Error::Address {
            input: s.to_string(),
            reason: "expected host:port".to_string(),
        })?;

        if host.is_empty() {
            return Err(Error::Address {
                input: s.to_string(),
                reason: "host must not be empty".to_string(),
            });
        }

        let port = port.parse::<u16>().map_err(|_| Error::Address {
            input: s.to_string(),
            reason: format!("port '{}' should be a number from 0 to 65535", port),
        })?;

        Ok(Self::new(host, port))
    }
}
