// API module - Divio Cloud REST client

mod client;
mod environments;
mod types;

pub use client::ApiClient;
pub use environments::{find_environment, resolve_environment};
pub use types::{Environment, EnvironmentList, LogRecord, Page};
