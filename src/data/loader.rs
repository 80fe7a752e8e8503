use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, LargeListArray, ListArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::MovieMap;
use super::source::DatasetError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a movie feature-vector mapping from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – Parquet file with `id` and `vector` columns (recommended)
/// * `.json`    – `{ "Movie A": [0.1, 0.2, ...], "Movie B": [...], ... }`
/// * `.csv`     – columns `id` and `vector`, the latter semicolon-separated floats
pub fn load_file(path: &Path) -> Result<MovieMap> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(DatasetError::UnsupportedFormat(other.to_string()).into()),
    }
}

/// Insert one parsed entry, warning when a duplicate id overwrites an
/// earlier row.  The mapping keeps the last occurrence.
fn insert_entry(map: &mut MovieMap, id: String, vector: Vec<f64>) {
    if map.insert(id.clone(), vector).is_some() {
        log::warn!("duplicate movie id '{id}', keeping the last occurrence");
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level object mapping each movie id to its
/// feature vector.
///
/// ```json
/// {
///   "Alien": [0.12, 0.14, 0.09],
///   "Blade Runner": [0.31, 0.02, 0.44]
/// }
/// ```
fn load_json(path: &Path) -> Result<MovieMap> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let entries = root
        .as_object()
        .context("Expected top-level JSON object mapping id to vector")?;

    let mut map = MovieMap::new();
    for (id, val) in entries {
        let vector = json_array_to_f64(val, id)?;
        insert_entry(&mut map, id.clone(), vector);
    }
    Ok(map)
}

fn json_array_to_f64(val: &JsonValue, id: &str) -> Result<Vec<f64>> {
    let arr = val
        .as_array()
        .with_context(|| format!("'{id}': value is not an array"))?;

    arr.iter()
        .enumerate()
        .map(|(j, v)| {
            v.as_f64()
                .with_context(|| format!("'{id}'[{j}]: not a number"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names.  The `id` column holds the
/// movie title; the `vector` column holds semicolon-separated floats:
///   `"0.12;0.14;0.11"`
/// Any other columns are ignored.
fn load_csv(path: &Path) -> Result<MovieMap> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let id_idx = headers
        .iter()
        .position(|h| h == "id")
        .context("CSV missing 'id' column")?;
    let vec_idx = headers
        .iter()
        .position(|h| h == "vector")
        .context("CSV missing 'vector' column")?;

    let mut map = MovieMap::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let id = record.get(id_idx).unwrap_or("").trim();
        if id.is_empty() {
            bail!("CSV row {row_no}: empty 'id'");
        }
        let vector = parse_semicolon_floats(record.get(vec_idx).unwrap_or(""), row_no)?;

        insert_entry(&mut map, id.to_string(), vector);
    }

    Ok(map)
}

fn parse_semicolon_floats(s: &str, row: usize) -> Result<Vec<f64>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(';')
        .enumerate()
        .map(|(j, tok)| {
            tok.trim()
                .parse::<f64>()
                .with_context(|| format!("Row {row}, vector[{j}]: '{tok}' is not a number"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing movie vectors.
///
/// Expected schema:
/// - `id`: Utf8 – movie titles
/// - `vector`: List<Float64> or LargeList<Float64> – feature vectors
///   (Float32 inner values are accepted and widened)
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<MovieMap> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut map = MovieMap::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let id_idx = schema
            .index_of("id")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'id' column"))?;
        let vec_idx = schema
            .index_of("vector")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'vector' column"))?;

        let id_col = batch.column(id_idx);
        let vec_col = batch.column(vec_idx);

        let ids = extract_utf8(id_col)
            .context("reading 'id' column")?;

        for (row, id) in ids.into_iter().enumerate() {
            let vector = extract_f64_list(vec_col, row)
                .with_context(|| format!("Row {row}: failed to read 'vector'"))?;
            insert_entry(&mut map, id, vector);
        }
    }

    Ok(map)
}

// -- Parquet / Arrow helpers --

/// Extract all values of a Utf8 or LargeUtf8 column as owned strings.
fn extract_utf8(col: &Arc<dyn Array>) -> Result<Vec<String>> {
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col.as_string::<i32>();
            collect_strings(arr.iter())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            collect_strings(arr.iter())
        }
        other => bail!("Expected Utf8 'id' column, got {other:?}"),
    }
}

fn collect_strings<'a>(iter: impl Iterator<Item = Option<&'a str>>) -> Result<Vec<String>> {
    iter.enumerate()
        .map(|(row, v)| {
            v.map(str::to_string)
                .with_context(|| format!("Row {row}: null 'id'"))
        })
        .collect()
}

/// Extract a `Vec<f64>` from a List or LargeList column at the given row.
fn extract_f64_list(col: &Arc<dyn Array>, row: usize) -> Result<Vec<f64>> {
    if col.is_null(row) {
        bail!("null value in list column");
    }

    let values_array = match col.data_type() {
        DataType::List(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<ListArray>()
                .context("expected ListArray")?;
            list_arr.value(row)
        }
        DataType::LargeList(_) => {
            let list_arr = col
                .as_any()
                .downcast_ref::<LargeListArray>()
                .context("expected LargeListArray")?;
            list_arr.value(row)
        }
        other => bail!("Expected List or LargeList column, got {other:?}"),
    };

    // The inner array can be Float64 or Float32
    if let Some(f64_arr) = values_array.as_any().downcast_ref::<Float64Array>() {
        Ok(f64_arr.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    } else if let Some(f32_arr) = values_array.as_any().downcast_ref::<Float32Array>() {
        Ok(f32_arr.iter().map(|v| v.unwrap_or(f32::NAN) as f64).collect())
    } else {
        bail!(
            "List inner type is {:?}, expected Float64 or Float32",
            values_array.data_type()
        )
    }
}
