use crate::{GridRow, GridState};

/// Hardcoded sample data used whenever no usable grid file exists.
pub fn grid_seed() -> GridState {
    let rows = [
        (
            1,
            "Alpha Project",
            "Software",
            "Cloud-native scalable solution with multi-region support.",
        ),
        (
            2,
            "Beta Stream",
            "Service",
            "Real-time data pipeline processing with low latency architecture.",
        ),
        (
            3,
            "Gamma Ray",
            "Hardware",
            "High Performance: 80% revenue increase in Q4.",
        ),
        (
            4,
            "Delta Force",
            "Software",
            "Advanced endpoint security suite with zero-trust implementation.",
        ),
        (
            5,
            "Epsilon Edge",
            "Hardware",
            "Edge computing units featuring ultra-low power consumption.",
        ),
        (
            6,
            "Zeta Zone",
            "Service",
            "Consulting framework for virtualized zone architecture.",
        ),
        (
            7,
            "Eta Energy",
            "Utility",
            "Renewable energy grid management optimization algorithms.",
        ),
        (
            8,
            "Theta Time",
            "Consumer",
            "Smart scheduling app with AI-powered time optimization.",
        ),
        (
            9,
            "Iota Innovation",
            "R&D",
            "Early stage interface prototype showing promising user engagement.",
        ),
    ];

    GridState {
        rows: rows
            .into_iter()
            .map(|(id, product_name, product_type, key_points)| GridRow {
                id,
                product_name: product_name.to_string(),
                product_type: product_type.to_string(),
                key_points: key_points.to_string(),
            })
            .collect(),
        next_id: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_rows_and_next_id_ten() {
        let seed = grid_seed();
        assert_eq!(seed.rows.len(), 9);
        assert_eq!(seed.next_id, 10);
        let ids: Vec<u64> = seed.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
        assert_eq!(seed.rows[0].product_name, "Alpha Project");
        assert_eq!(seed.rows[8].product_type, "R&D");
    }
}
