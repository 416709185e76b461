use tracing::warn;

use super::connection::RigConnection;
use super::endpoint::RigEndpoint;
use crate::config::AppConfig;
use crate::Result;

/// The primary and secondary rig connections, owned together.
///
/// The primary is the rig whose frequency is authoritative; the secondary
/// is commanded to follow it. The two connections are independent and are
/// never accessed concurrently.
pub struct RigPair {
    pub primary: RigConnection,
    pub secondary: RigConnection,
}

impl RigPair {
    /// Open connections to both rigs, primary first.
    ///
    /// If the secondary connect fails the error propagates and the
    /// already-open primary is released by drop.
    pub async fn open(config: &AppConfig) -> Result<Self> {
        let read_timeout = config.sync.read_timeout();

        let primary =
            RigConnection::connect(RigEndpoint::from(&config.primary), read_timeout).await?;
        let secondary =
            RigConnection::connect(RigEndpoint::from(&config.secondary), read_timeout).await?;

        Ok(Self { primary, secondary })
    }

    /// Close both connections.
    ///
    /// Both closes are always attempted; the first failure is reported
    /// after the second close has run. Neither stream can leak since both
    /// are consumed here.
    pub async fn close(self) -> Result<()> {
        let primary_result = self.primary.close().await;
        if let Err(ref e) = primary_result {
            warn!("Failed to close primary connection: {}", e);
        }

        let secondary_result = self.secondary.close().await;
        if let Err(ref e) = secondary_result {
            warn!("Failed to close secondary connection: {}", e);
        }

        primary_result.and(secondary_result)
    }
}
