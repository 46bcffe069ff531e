// Frameworks layer: environment config, tracing bootstrap, and default wiring.

pub mod cli;
pub mod client;
pub mod config;
