// Library exports for the Divio log exporter

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logs;
