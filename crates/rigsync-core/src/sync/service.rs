use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::rig::protocol::{set_frequency_command, GET_FREQUENCY};
use crate::rig::RigPair;
use crate::Result;

/// Keeps the secondary rig's frequency in lockstep with the primary's.
///
/// One logical task drives everything: each iteration reads the primary,
/// compares against the last propagated frequency, and pushes a change to
/// the secondary before sleeping out the poll interval. Commands are never
/// pipelined; at most one is in flight per connection.
pub struct SyncService {
    pair: RigPair,
    poll_interval: Duration,
    last_frequency: Option<String>,
}

impl SyncService {
    pub fn new(pair: RigPair, config: &AppConfig) -> Self {
        Self {
            pair,
            poll_interval: config.sync.poll_interval(),
            last_frequency: None,
        }
    }

    /// The last frequency successfully propagated to the secondary
    pub fn last_frequency(&self) -> Option<&str> {
        self.last_frequency.as_deref()
    }

    /// Release the connections after the loop has exited so the caller can
    /// close them on every exit path.
    pub fn into_pair(self) -> RigPair {
        self.pair
    }

    /// Poll until the shutdown signal flips.
    ///
    /// The signal is consulted between iterations only; an in-flight
    /// exchange is never cancelled. A transport or decode failure while
    /// polling the primary aborts the loop with the error — the caller
    /// still owns the connections through `into_pair`.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(
            "Sync started: {} -> {}, interval={}ms",
            self.pair.primary.endpoint(),
            self.pair.secondary.endpoint(),
            self.poll_interval.as_millis()
        );

        // First tick fires immediately, so the rigs are aligned on startup
        // rather than one interval later.
        let mut poll = tokio::time::interval(self.poll_interval);

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_ok() && *shutdown.borrow() {
                        info!("Sync received shutdown signal");
                        break;
                    }
                }

                _ = poll.tick() => {
                    self.poll_once().await?;
                }
            }
        }

        info!("Sync stopped");
        Ok(())
    }

    /// Run a single read-compare-set iteration.
    ///
    /// An empty frequency read (a truncated or lost response under the
    /// single-read framing) is treated as "no change": it is never stored
    /// and never pushed, so the secondary cannot be commanded to an empty
    /// frequency. A failed set leaves `last_frequency` unchanged, which
    /// re-attempts the same change on the next iteration.
    pub async fn poll_once(&mut self) -> Result<()> {
        let freq = self.pair.primary.exchange(GET_FREQUENCY).await?;

        if freq.is_empty() || self.last_frequency.as_deref() == Some(freq.as_str()) {
            return Ok(());
        }

        info!(
            "Frequency changed: {} -> {}",
            self.last_frequency.as_deref().unwrap_or("(unset)"),
            freq
        );

        match self.pair.secondary.exchange(&set_frequency_command(&freq)).await {
            Ok(_) => {
                info!("Set frequency on secondary rig to {}", freq);
                self.last_frequency = Some(freq);
            }
            Err(e) => {
                warn!(
                    "Failed to set frequency {} on secondary rig: {}",
                    freq, e
                );
            }
        }

        Ok(())
    }
}
