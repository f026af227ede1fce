use crate::domain::model::{Pet, PetRecord};
use crate::utils::error::{PetError, Result};

pub fn serialize(pet: &Pet) -> PetRecord {
    PetRecord::from(pet)
}

/// Any record that fails validation is reported as a load failure.
pub fn deserialize(record: PetRecord) -> Result<Pet> {
    Pet::try_from(record).map_err(|e| PetError::load("record", e))
}

pub fn to_json(pet: &Pet) -> Result<String> {
    Ok(serde_json::to_string(&serialize(pet))?)
}

pub fn from_json(source_name: &str, content: &str) -> Result<Pet> {
    let record: PetRecord =
        serde_json::from_str(content).map_err(|e| PetError::load(source_name, e))?;
    Pet::try_from(record).map_err(|e| PetError::load(source_name, e))
}
