pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::shell::{load_or_create, Console, Shell};
pub use crate::config::{cli::JsonFileStore, toml_config::TomlConfig, CliConfig};
pub use crate::core::{persistence, session::PetSession, Pet, PetRecord, PetStore, Status, TricksSummary};
pub use crate::utils::error::{PetError, Result};
