use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;
use tempfile::TempDir;
use virtual_pet::core::challenge::MathChallenge;
use virtual_pet::utils::error::ErrorCategory;
use virtual_pet::{load_or_create, Console, JsonFileStore, Pet, PetSession, PetStore, Shell};

fn scripted_console(script: String) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(script), Vec::new())
}

/// 完整流程：訓練、重複訓練、存檔、再讀回
#[test]
fn test_train_and_save_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let save_path = temp_dir.path().join("pet_data.json");

    let rng = StdRng::seed_from_u64(9);
    let mut preview = rng.clone();
    let first = MathChallenge::generate(&mut preview).answer();
    let second = MathChallenge::generate(&mut preview).answer();

    let script = format!("train\n{}\nsit\ntrain\n{}\nsit\nsave\nquit\n", first, second);
    let pet = Pet::with_levels("Rex", 2, 2, 2, Vec::new())?;
    let mut shell = Shell::new(
        scripted_console(script),
        PetSession::new(pet, rng),
        JsonFileStore::new(&save_path),
    );
    shell.run()?;

    assert_eq!(shell.session().pet().tricks(), ["sit".to_string()]);

    let (console, _) = shell.into_parts();
    let output = String::from_utf8(console.into_output())?;
    assert!(output.contains("Rex learned a new trick: sit!"));
    assert!(output.contains("Rex already knows this trick!"));
    assert!(output.contains("Pet state saved!"));

    let restored = JsonFileStore::new(&save_path).load()?;
    assert_eq!(restored.name(), "Rex");
    assert_eq!(restored.tricks(), ["sit".to_string()]);
    Ok(())
}

#[test]
fn test_wrong_answer_teaches_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let rng = StdRng::seed_from_u64(3);
    let expected = MathChallenge::generate(&mut rng.clone()).answer();

    let pet = Pet::with_levels("Rex", 2, 2, 2, Vec::new())?;
    let mut shell = Shell::new(
        scripted_console("train\n1000\ntricks\n".to_string()),
        PetSession::new(pet, rng),
        JsonFileStore::new(temp_dir.path().join("pet.json")),
    );
    shell.run()?;

    assert!(shell.session().pet().tricks().is_empty());
    let (console, _) = shell.into_parts();
    let output = String::from_utf8(console.into_output())?;
    assert!(output.contains(&format!("Incorrect! The correct answer was: {}", expected)));
    assert!(output.contains("Tricks: No tricks learned yet."));
    Ok(())
}

#[test]
fn test_saved_pet_is_restored_on_startup() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = JsonFileStore::new(temp_dir.path().join("pet.json"));

    let mut pet = Pet::new("Biscuit")?;
    pet.train("roll over")?;
    pet.rest();
    store.save(&pet)?;

    let mut console = scripted_console(String::new());
    let restored = load_or_create(&mut console, &store, None)?.expect("saved pet");
    assert_eq!(restored, pet);

    let output = String::from_utf8(console.into_output())?;
    assert!(output.contains("Welcome back, Biscuit!"));
    Ok(())
}

#[test]
fn test_corrupt_save_falls_back_to_fresh_pet() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("pet.json");
    std::fs::write(&path, "{ this is not json")?;
    let store = JsonFileStore::new(&path);

    assert_eq!(store.load().unwrap_err().category(), ErrorCategory::Load);

    let mut console = scripted_console(String::new());
    let pet = load_or_create(&mut console, &store, Some("Fresh"))?.expect("fresh pet");
    assert_eq!(pet, Pet::new("Fresh")?);

    let output = String::from_utf8(console.into_output())?;
    assert!(output.contains("Could not load a saved pet"));
    Ok(())
}

#[test]
fn test_failed_save_does_not_end_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("file");
    std::fs::write(&blocker, "")?;

    let pet = Pet::with_levels("Rex", 8, 8, 8, Vec::new())?;
    let mut shell = Shell::new(
        scripted_console("save\nfeed\nquit\n".to_string()),
        PetSession::new(pet, StdRng::seed_from_u64(0)),
        JsonFileStore::new(blocker.join("pet.json")),
    );
    shell.run()?;

    let (console, session) = shell.into_parts();
    let output = String::from_utf8(console.into_output())?;
    assert!(output.contains("Failed to access the save file"));
    assert!(output.contains("Goodbye!"));
    assert_eq!(session.pet().status().hunger, 5);
    Ok(())
}
