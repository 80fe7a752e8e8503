use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MovieMap – the raw dataset mapping
// ---------------------------------------------------------------------------

/// Identifier → feature-vector mapping as parsed from a dataset file.
/// Keys are unique by construction; `BTreeMap` keeps iteration deterministic.
pub type MovieMap = BTreeMap<String, Vec<f64>>;

// ---------------------------------------------------------------------------
// Movie – one catalog entry
// ---------------------------------------------------------------------------

/// A movie title together with its property-encoding vector, as derived
/// from a single [`MovieMap`] entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// The movie name; doubles as the identifier.
    pub id: String,
    /// The encoding of the movie properties.
    pub vector: Vec<f64>,
}

impl Movie {
    pub fn new(id: impl Into<String>, vector: Vec<f64>) -> Self {
        Movie {
            id: id.into(),
            vector,
        }
    }
}

impl From<(String, Vec<f64>)> for Movie {
    fn from((id, vector): (String, Vec<f64>)) -> Self {
        Movie { id, vector }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} features)", self.id, self.vector.len())
    }
}

// -- Identity and ordering are defined on `id` only; the vector is payload --

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl std::hash::Hash for Movie {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Case-insensitive comparison of the ids, with a case-sensitive tie-break
/// so that `Ord` and `Eq` agree on which movies are equal.
impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.id.chars().map(|c| c.to_ascii_lowercase());
        let rhs = other.id.chars().map(|c| c.to_ascii_lowercase());
        lhs.cmp(rhs).then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
