//! Side-effecting persistence for the lab directory.
//!
//! Everything that touches the filesystem lives here so the core stays pure.

pub mod config;
pub mod history_store;
pub mod init;
