use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::{ArffTable, Cell};

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

/// Write every column except `label_column` to a Parquet file, one `Float64`
/// column per attribute. Rows are written in table order, which keeps the
/// file aligned with the labels file by position.
pub fn write_features(table: &ArffTable, label_column: &str, path: &Path) -> Result<()> {
    let mut fields = Vec::new();
    let mut columns: Vec<ArrayRef> = Vec::new();

    for (idx, attr) in table.attributes.iter().enumerate() {
        if attr.name == label_column {
            continue;
        }
        let mut values = Vec::with_capacity(table.len());
        for (row_no, row) in table.rows.iter().enumerate() {
            match row[idx].as_f64() {
                Some(v) => values.push(v),
                None => bail!(
                    "row {row_no}, column '{}': non-numeric feature cell '{}'",
                    attr.name,
                    row[idx]
                ),
            }
        }
        fields.push(Field::new(&attr.name, DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from(values)));
    }

    log::info!(
        "writing {} rows x {} feature columns to {}",
        table.len(),
        columns.len(),
        path.display()
    );
    write_batch(fields, columns, path)
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Write the label column alone as a single-column `Int64` Parquet file.
pub fn write_labels(table: &ArffTable, label_column: &str, path: &Path) -> Result<()> {
    let idx = table
        .column_index(label_column)
        .with_context(|| format!("no label column named '{label_column}'"))?;

    let mut values = Vec::with_capacity(table.len());
    for (row_no, row) in table.rows.iter().enumerate() {
        match &row[idx] {
            Cell::Int(v) => values.push(*v),
            other => bail!("row {row_no}: unmapped label cell '{other}'"),
        }
    }

    log::info!("writing {} labels to {}", values.len(), path.display());
    write_batch(
        vec![Field::new(label_column, DataType::Int64, false)],
        vec![Arc::new(Int64Array::from(values))],
        path,
    )
}

// -- shared Parquet plumbing --

/// Assemble one record batch and write it out, truncating any previous file.
fn write_batch(fields: Vec<Field>, columns: Vec<ArrayRef>, path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
