//! The frequency synchronization loop

mod service;

pub use service::SyncService;
