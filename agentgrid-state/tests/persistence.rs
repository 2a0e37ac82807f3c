use agentgrid_state::{
    grid_seed, GridState, JsonStateFile, LoadOutcome, PersistencePolicy, SeedReason,
};
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips_the_state() {
    let dir = tempdir().unwrap();
    let file = JsonStateFile::new(dir.path().join("grid_state.json"));

    let mut state = grid_seed();
    state.add_row("X", "Software", "notes");
    file.save(&state).unwrap();

    match file.load_or_seed(grid_seed) {
        LoadOutcome::Loaded(loaded) => assert_eq!(loaded, state),
        other => panic!("expected loaded state, got {other:?}"),
    }
}

#[test]
fn missing_file_seeds_defaults() {
    let dir = tempdir().unwrap();
    let file = JsonStateFile::new(dir.path().join("absent.json"));

    match file.load_or_seed(grid_seed) {
        LoadOutcome::Seeded { state, reason } => {
            assert_eq!(reason, SeedReason::Missing);
            assert_eq!(state, grid_seed());
        }
        other => panic!("expected seeded state, got {other:?}"),
    }
}

#[test]
fn corrupt_file_seeds_defaults_without_raising() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid_state.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let file = JsonStateFile::new(&path);
    match file.load_or_seed(grid_seed) {
        LoadOutcome::Seeded { state, reason } => {
            assert!(matches!(reason, SeedReason::Unreadable(_)));
            assert_eq!(state, grid_seed());
        }
        other => panic!("expected seeded state, got {other:?}"),
    }
}

#[test]
fn save_creates_the_containing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("grid_state.json");
    let file = JsonStateFile::new(&path);

    file.save(&grid_seed()).unwrap();
    assert!(path.exists());
}

#[test]
fn persisted_document_mirrors_the_state_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid_state.json");
    JsonStateFile::new(&path).save(&grid_seed()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["next_id"], 10);
    assert_eq!(doc["rows"].as_array().unwrap().len(), 9);
    assert_eq!(doc["rows"][0]["product_name"], "Alpha Project");
    assert_eq!(doc["rows"][2]["key_points"], "High Performance: 80% revenue increase in Q4.");
}

#[test]
fn ephemeral_policy_writes_nothing() {
    let policy = PersistencePolicy::Ephemeral;
    policy.persist(&GridState::default()).unwrap();
    assert!(!policy.is_durable());
}

#[test]
fn durable_policy_overwrites_on_each_persist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grid_state.json");
    let policy = PersistencePolicy::Durable(JsonStateFile::new(&path));

    let mut state = grid_seed();
    policy.persist(&state).unwrap();
    state.add_row("X", "Software", "notes");
    policy.persist(&state).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let rows = doc["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows.last().unwrap()["product_name"], "X");
}
