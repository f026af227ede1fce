pub mod challenge;
pub mod persistence;
pub mod session;

pub use crate::domain::model::{Pet, PetRecord, Status, TricksSummary};
pub use crate::domain::ports::{ConfigProvider, PetStore};
pub use crate::utils::error::Result;
