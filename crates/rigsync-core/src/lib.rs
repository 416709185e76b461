pub mod config;
pub mod error;
pub mod rig;
pub mod sync;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use rig::{RigConnection, RigEndpoint, RigPair};
pub use sync::SyncService;
