//! System orchestration, configuration, startup and shutdown.

pub mod cinema_system;
pub mod config;
pub mod error;
pub mod telemetry;

pub use cinema_system::*;
pub use config::*;
pub use error::*;
pub use telemetry::*;
