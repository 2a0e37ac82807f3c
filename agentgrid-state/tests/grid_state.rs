use agentgrid_state::{grid_seed, GridState, RowPatch, RowUpdate};

#[test]
fn ids_never_repeat_across_a_sequence_of_adds() {
    let mut state = GridState::default();
    let initial_next = state.next_id;

    let mut seen = Vec::new();
    for n in 0..20 {
        let row = state.add_row(format!("P{n}"), "Software", "");
        assert!(!seen.contains(&row.id));
        if let Some(last) = seen.last() {
            assert!(row.id > *last);
        }
        seen.push(row.id);
    }

    assert_eq!(state.next_id, initial_next + 20);
}

#[test]
fn adding_identical_rows_still_creates_distinct_rows() {
    let mut state = GridState::default();
    let first = state.add_row("Same", "Service", "same notes");
    let second = state.add_row("Same", "Service", "same notes");

    assert_ne!(first.id, second.id);
    assert_eq!(state.rows.len(), 2);
}

#[test]
fn next_id_stays_above_every_present_id() {
    let mut state = grid_seed();
    state.add_row("X", "Software", "notes");
    let max_id = state.rows.iter().map(|row| row.id).max().unwrap();
    assert!(state.next_id > max_id);
}

#[test]
fn seed_scenario_add_row_lands_last_with_id_ten() {
    let mut state = grid_seed();
    let row = state.add_row("X", "Software", "notes");

    assert_eq!(row.id, 10);
    assert_eq!(row.product_name, "X");
    assert_eq!(row.product_type, "Software");
    assert_eq!(row.key_points, "notes");
    assert_eq!(state.rows.len(), 10);
    assert_eq!(state.next_id, 11);
    assert_eq!(state.rows.last().unwrap().id, 10);
}

#[test]
fn full_patch_replaces_every_field() {
    let mut state = grid_seed();
    let outcome = state.update_row(
        3,
        RowPatch {
            product_name: Some("Gamma Ray II".to_string()),
            product_type: Some("Service".to_string()),
            key_points: Some("Rewritten.".to_string()),
        },
    );

    let RowUpdate::Updated(row) = outcome else {
        panic!("expected update");
    };
    assert_eq!(row.id, 3);
    assert_eq!(row.product_name, "Gamma Ray II");
    assert_eq!(row.product_type, "Service");
    assert_eq!(row.key_points, "Rewritten.");
}
