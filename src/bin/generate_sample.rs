use std::sync::Arc;

use arrow::array::{Float64Builder, ListBuilder, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

const VECTOR_DIM: usize = 16;

const ADJECTIVES: [&str; 8] = [
    "Silent", "Crimson", "Electric", "Forgotten", "Midnight", "Golden", "Savage", "Lunar",
];
const NOUNS: [&str; 8] = [
    "Harvest", "Voyage", "Reckoning", "Garden", "Frontier", "Protocol", "Mirage", "Signal",
];

/// One synthetic feature vector; each component in [0, 1).
fn generate_vector(rng: &mut SimpleRng) -> Vec<f64> {
    (0..VECTOR_DIM).map(|_| rng.next_f64()).collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Every adjective × noun combination, plus numbered sequels for a few.
    let mut ids: Vec<String> = Vec::new();
    for adj in &ADJECTIVES {
        for noun in &NOUNS {
            ids.push(format!("{adj} {noun}"));
        }
    }
    for i in 2..=4 {
        ids.push(format!("Silent Harvest {i}"));
    }

    let vectors: Vec<Vec<f64>> = ids.iter().map(|_| generate_vector(&mut rng)).collect();

    // Build Arrow arrays
    let id_array = StringArray::from(ids.iter().map(|s| s.as_str()).collect::<Vec<_>>());

    let mut vec_builder = ListBuilder::new(Float64Builder::new());
    for row in &vectors {
        let values = vec_builder.values();
        for &v in row {
            values.append_value(v);
        }
        vec_builder.append(true);
    }
    let vector_array = vec_builder.finish();

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::List(Arc::new(Field::new("item", DataType::Float64, true))),
            false,
        ),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(id_array), Arc::new(vector_array)],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let output_path = "sample_movies.parquet";
    let file = std::fs::File::create(output_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} movies ({VECTOR_DIM} features each) to {output_path}",
        vectors.len()
    );
}
