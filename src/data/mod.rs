/// Data layer: core types, file parsing, and the dataset-source seam.
///
/// Architecture:
/// ```text
///  .parquet / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MovieMap
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ DatasetSource │  resolve dataset id → MovieMap
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  catalog  │  MovieMap → sorted Vec<Movie>
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod source;
