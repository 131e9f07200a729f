use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::model::{ArffTable, AttrKind, Cell};

// ---------------------------------------------------------------------------
// Column dropping
// ---------------------------------------------------------------------------

/// Remove a column from the declarations and from every row.
pub fn drop_column(table: &mut ArffTable, name: &str) -> Result<()> {
    let idx = table
        .column_index(name)
        .with_context(|| format!("no column named '{name}' to drop"))?;

    table.attributes.remove(idx);
    for row in &mut table.rows {
        row.remove(idx);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Label mapping
// ---------------------------------------------------------------------------

/// Rewrite the nominal label column to integers: `yes` → 1, `no` → 0.
///
/// The mapping is a fixed two-entry table. Any other value, including a
/// missing `?`, aborts the run rather than passing through.
pub fn map_label_column(table: &mut ArffTable, name: &str) -> Result<()> {
    let idx = table
        .column_index(name)
        .with_context(|| format!("no label column named '{name}'"))?;

    for (row_no, row) in table.rows.iter_mut().enumerate() {
        let mapped = match &row[idx] {
            Cell::Nominal(v) if v == "yes" => 1,
            Cell::Nominal(v) if v == "no" => 0,
            other => bail!("row {row_no}: unexpected label value '{other}'"),
        };
        row[idx] = Cell::Int(mapped);
    }
    table.attributes[idx].kind = AttrKind::Int;
    Ok(())
}

// ---------------------------------------------------------------------------
// Shuffling
// ---------------------------------------------------------------------------

/// Permute all rows with an RNG seeded from `seed`.
///
/// A fixed seed makes the permutation reproducible across runs. The file
/// order is discarded; position after the shuffle is the only row identity
/// left.
pub fn shuffle_rows(table: &mut ArffTable, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    table.rows.shuffle(&mut rng);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::model::Attribute;
    use super::*;

    /// Table with `att1`, `id` and `outlier` columns; `att1` holds the row's
    /// original position so tests can track rows across a shuffle.
    fn sample_table(n: usize) -> ArffTable {
        let attributes = vec![
            Attribute {
                name: "att1".to_string(),
                kind: AttrKind::Numeric,
            },
            Attribute {
                name: "id".to_string(),
                kind: AttrKind::Int,
            },
            Attribute {
                name: "outlier".to_string(),
                kind: AttrKind::Nominal(vec!["no".to_string(), "yes".to_string()]),
            },
        ];
        let rows = (0..n)
            .map(|i| {
                let flag = if i % 3 == 0 { "yes" } else { "no" };
                vec![
                    Cell::Numeric(i as f64),
                    Cell::Int(i as i64),
                    Cell::Nominal(flag.to_string()),
                ]
            })
            .collect();
        ArffTable {
            relation: "sample".to_string(),
            attributes,
            rows,
        }
    }

    #[test]
    fn drop_column_removes_declaration_and_cells() {
        let mut table = sample_table(4);
        drop_column(&mut table, "id").unwrap();

        assert!(table.column_index("id").is_none());
        assert!(table.rows.iter().all(|r| r.len() == 2));
        assert_eq!(table.rows[2][0], Cell::Numeric(2.0));
    }

    #[test]
    fn drop_column_fails_for_unknown_name() {
        let mut table = sample_table(2);
        assert!(drop_column(&mut table, "nope").is_err());
    }

    #[test]
    fn labels_map_to_zero_and_one() {
        let mut table = sample_table(6);
        map_label_column(&mut table, "outlier").unwrap();

        let idx = table.column_index("outlier").unwrap();
        assert_eq!(table.attributes[idx].kind, AttrKind::Int);
        for (i, row) in table.rows.iter().enumerate() {
            let expected = if i % 3 == 0 { 1 } else { 0 };
            assert_eq!(row[idx], Cell::Int(expected));
        }
    }

    #[test]
    fn unexpected_label_value_is_fatal() {
        let mut table = sample_table(2);
        table.rows[1][2] = Cell::Nominal("maybe".to_string());
        let err = map_label_column(&mut table, "outlier").unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn missing_label_marker_is_fatal() {
        let mut table = sample_table(2);
        table.rows[0][2] = Cell::Nominal("?".to_string());
        assert!(map_label_column(&mut table, "outlier").is_err());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut table = sample_table(50);
        let before = table.rows.clone();
        shuffle_rows(&mut table, 2718);

        assert_eq!(table.len(), before.len());
        // Same multiset of rows: every original row appears exactly once.
        let mut seen = vec![false; before.len()];
        for row in &table.rows {
            let pos = before
                .iter()
                .enumerate()
                .position(|(i, r)| !seen[i] && r == row)
                .expect("shuffled row not found in original");
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a = sample_table(50);
        let mut b = sample_table(50);
        shuffle_rows(&mut a, 2718);
        shuffle_rows(&mut b, 2718);
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let mut a = sample_table(50);
        let mut b = sample_table(50);
        shuffle_rows(&mut a, 2718);
        shuffle_rows(&mut b, 2719);
        assert_ne!(a.rows, b.rows);
    }
}
