pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use crate::core::{engine::SignalEngine, pipeline::SimplePipeline};
pub use domain::model::{Packet, PacketPair, SignalReport};
pub use utils::error::{Result, SignalError};
