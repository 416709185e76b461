use anyhow::Result;

use rigsync_core::rig::protocol::GET_FREQUENCY;
use rigsync_core::{AppConfig, RigPair};

pub async fn run(config: AppConfig) -> Result<()> {
    let mut pair = RigPair::open(&config).await?;

    let freq = pair.primary.exchange(GET_FREQUENCY).await?;
    if freq.is_empty() {
        println!("Primary rig returned an empty response.");
    } else {
        println!("Primary rig frequency: {}", freq);
    }

    pair.close().await?;

    Ok(())
}
