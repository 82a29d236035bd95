pub mod config;
pub mod error;
pub mod matchmaking;
pub mod session;
pub mod telemetry;
