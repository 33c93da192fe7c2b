// Sample custom job extensions for a certificate-management orchestrator host

pub mod client;
pub mod config;
pub mod errors;
pub mod extension;
pub mod jobs;
pub mod models;
pub mod telemetry;
