//! Fixed run configuration.
//!
//! The preparation is a one-shot batch job over a known file, so the paths
//! and the shuffle seed are compile-time constants rather than CLI flags.

/// Source ARFF file (DAMI benchmark release, duplicates removed, normalized).
pub const ARFF_PATH: &str = "data/PenDigits_withoutdupl_norm_v01.arff";

/// Output path for the features table.
pub const FEATURES_PATH: &str = "data/x_pendigits.parquet";

/// Output path for the label series.
pub const LABELS_PATH: &str = "data/y_pendigits.parquet";

/// Seed for the row shuffle. Fixed so repeated runs produce the same order.
pub const SHUFFLE_SEED: u64 = 2718;

/// Identifier column dropped before writing (not predictive).
pub const ID_COLUMN: &str = "id";

/// Nominal column remapped to the binary target.
pub const LABEL_COLUMN: &str = "outlier";
