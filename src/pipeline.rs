use std::path::Path;

use anyhow::{Context, Result};

use crate::config;
use crate::data::{loader, transform, writer};

// ---------------------------------------------------------------------------
// The preparation pipeline
// ---------------------------------------------------------------------------

/// Run the whole preparation once: load the ARFF file, drop the `id` column,
/// map the outlier labels, shuffle with the fixed seed, and write the
/// features and labels as two row-aligned Parquet files.
pub fn run(input: &Path, features_out: &Path, labels_out: &Path, seed: u64) -> Result<()> {
    log::info!("loading {}", input.display());
    let mut table =
        loader::load_arff(input).with_context(|| format!("loading {}", input.display()))?;
    log::info!(
        "loaded '{}': {} rows x {} columns",
        table.relation,
        table.len(),
        table.attributes.len()
    );

    transform::drop_column(&mut table, config::ID_COLUMN)?;
    transform::map_label_column(&mut table, config::LABEL_COLUMN)?;

    log::info!("shuffling {} rows (seed {seed})", table.len());
    transform::shuffle_rows(&mut table, seed);

    writer::write_features(&table, config::LABEL_COLUMN, features_out)
        .with_context(|| format!("writing {}", features_out.display()))?;
    writer::write_labels(&table, config::LABEL_COLUMN, labels_out)
        .with_context(|| format!("writing {}", labels_out.display()))?;

    println!("Written output to: {}", features_out.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
