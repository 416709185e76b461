use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};

use rigsync_core::{AppConfig, RigPair, SyncService};

pub async fn run(config: AppConfig) -> Result<()> {
    println!(
        "Syncing frequency from {}:{} to {}:{}. Press Ctrl+C to stop.",
        config.primary.host, config.primary.port, config.secondary.host, config.secondary.port
    );

    let pair = RigPair::open(&config).await?;
    let mut service = SyncService::new(pair, &config);

    // Shutdown channel flipped by Ctrl+C; the loop exits at the next
    // iteration boundary.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx.send(true);
    });

    let result = service.run(shutdown_rx).await;

    // Close both connections whether the loop ended by shutdown or error
    if let Err(e) = service.into_pair().close().await {
        warn!("Error while closing connections: {}", e);
    }

    result?;
    println!("Sync stopped.");

    Ok(())
}
