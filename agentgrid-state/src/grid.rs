use serde::{Deserialize, Serialize};

/// Single row in the data grid. The id is allocated by the store and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub id: u64,
    pub product_name: String,
    pub product_type: String,
    pub key_points: String,
}

/// Complete grid state. Row order is insertion order and doubles as
/// display order; `next_id` is monotonic and ids are never recycled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub rows: Vec<GridRow>,
    pub next_id: u64,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// Partial update for one row. Fields left as `None` keep their current
/// value (PATCH semantics, not replace).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RowPatch {
    pub product_name: Option<String>,
    pub product_type: Option<String>,
    pub key_points: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowUpdate {
    Updated(GridRow),
    NotFound,
}

impl GridState {
    /// Append a new row, allocating the next id. Never idempotent: equal
    /// field values still produce a distinct row.
    pub fn add_row(
        &mut self,
        product_name: impl Into<String>,
        product_type: impl Into<String>,
        key_points: impl Into<String>,
    ) -> GridRow {
        let row = GridRow {
            id: self.next_id,
            product_name: product_name.into(),
            product_type: product_type.into(),
            key_points: key_points.into(),
        };
        self.next_id += 1;
        self.rows.push(row.clone());
        row
    }

    /// Overwrite only the fields supplied in the patch. Returns `NotFound`
    /// when no row carries the id; callers decide whether that is an error
    /// or a tolerated no-op.
    pub fn update_row(&mut self, row_id: u64, patch: RowPatch) -> RowUpdate {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == row_id) else {
            return RowUpdate::NotFound;
        };

        if let Some(product_name) = patch.product_name {
            row.product_name = product_name;
        }
        if let Some(product_type) = patch.product_type {
            row.product_type = product_type;
        }
        if let Some(key_points) = patch.key_points {
            row.key_points = key_points;
        }

        RowUpdate::Updated(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_row_allocates_strictly_increasing_ids() {
        let mut state = GridState::default();
        let first = state.add_row("A", "Software", "a");
        let second = state.add_row("B", "Hardware", "b");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(state.next_id, 3);
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn update_row_patches_only_supplied_fields() {
        let mut state = GridState::default();
        state.add_row("Alpha", "Software", "original notes");

        let outcome = state.update_row(
            1,
            RowPatch {
                product_type: Some("Service".to_string()),
                ..RowPatch::default()
            },
        );

        let RowUpdate::Updated(row) = outcome else {
            panic!("expected update");
        };
        assert_eq!(row.product_name, "Alpha");
        assert_eq!(row.product_type, "Service");
        assert_eq!(row.key_points, "original notes");
    }

    #[test]
    fn update_row_with_unknown_id_reports_not_found() {
        let mut state = GridState::default();
        state.add_row("Alpha", "Software", "notes");
        let before = state.clone();

        assert_eq!(state.update_row(42, RowPatch::default()), RowUpdate::NotFound);
        assert_eq!(state, before);
    }

    #[test]
    fn empty_patch_is_a_legal_no_op() {
        let mut state = GridState::default();
        state.add_row("Alpha", "Software", "notes");
        let before = state.clone();

        let outcome = state.update_row(1, RowPatch::default());
        assert!(matches!(outcome, RowUpdate::Updated(_)));
        assert_eq!(state, before);
    }
}
