/// Data layer: core types, ARFF loading, transforms, and Parquet output.
///
/// Architecture:
/// ```text
///  .arff
///     │
///     ▼
///  ┌──────────┐
///  │  loader   │  parse file → ArffTable
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │ ArffTable │  attributes + row-major cells
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │ transform │  drop id, map labels, shuffle
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │  writer   │  split → features.parquet + labels.parquet
///  └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod transform;
pub mod writer;
