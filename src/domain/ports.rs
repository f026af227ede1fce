use crate::domain::model::Pet;
use crate::utils::error::Result;

pub trait PetStore {
    /// Human-readable location, used in log lines and error messages.
    fn location(&self) -> String;
    fn save(&self, pet: &Pet) -> Result<()>;
    fn load(&self) -> Result<Pet>;
}

pub trait ConfigProvider {
    fn save_file(&self) -> &str;
    fn default_name(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
}
