use std::sync::Arc;

use anyhow::Result;

use crate::data::model::{Movie, MovieMap};
use crate::data::source::DatasetSource;

// ---------------------------------------------------------------------------
// Catalog – the two dataset providers
// ---------------------------------------------------------------------------

/// Exposes a named dataset to the rest of a recommender pipeline, either as
/// the raw mapping or as a sorted list of [`Movie`] records.
///
/// The dataset source is injected at construction; see [`crate::wiring`] for
/// the production assembly.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn DatasetSource + Send + Sync>,
}

impl Catalog {
    pub fn new(source: Arc<dyn DatasetSource + Send + Sync>) -> Self {
        Catalog { source }
    }

    /// Provider for the raw identifier → feature-vector mapping, exactly as
    /// loaded from the source.
    pub fn movie_map(&self, dataset_id: &str) -> Result<MovieMap> {
        self.source.load_data(dataset_id)
    }

    /// Provider for the sorted movie list: one [`Movie`] per mapping entry,
    /// ordered by the movie's natural (case-insensitive) ordering.
    ///
    /// Loads the source exactly once per call and returns a materialized
    /// `Vec`, so callers may iterate the result repeatedly.
    pub fn movie_list(&self, dataset_id: &str) -> Result<Vec<Movie>> {
        let map = self.source.load_data(dataset_id)?;
        log::debug!("dataset '{dataset_id}': {} entries loaded", map.len());

        let mut movies: Vec<Movie> = map.into_iter().map(Movie::from).collect();
        movies.sort();
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory stand-in for the file-backed source, counting invocations.
    struct FakeSource {
        map: MovieMap,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(entries: &[(&str, &[f64])]) -> Self {
            let map = entries
                .iter()
                .map(|(id, v)| (id.to_string(), v.to_vec()))
                .collect();
            FakeSource {
                map,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DatasetSource for FakeSource {
        fn load_data(&self, _dataset_id: &str) -> Result<MovieMap> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.map.clone())
        }
    }

    /// Source that always fails, for the propagation test.
    struct BrokenSource;

    impl DatasetSource for BrokenSource {
        fn load_data(&self, dataset_id: &str) -> Result<MovieMap> {
            bail!("cannot read dataset '{dataset_id}'")
        }
    }

    fn three_movie_source() -> Arc<FakeSource> {
        Arc::new(FakeSource::new(&[
            ("zodiac", &[0.3, 0.1]),
            ("Alien", &[0.9]),
            ("memento", &[0.2, 0.4, 0.6]),
        ]))
    }

    #[test]
    fn list_length_matches_map_size() {
        let source = three_movie_source();
        let catalog = Catalog::new(source.clone());

        let map = catalog.movie_map("d").unwrap();
        let list = catalog.movie_list("d").unwrap();
        assert_eq!(list.len(), map.len());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_is_sorted_and_loads_source_once() {
        let source = three_movie_source();
        let catalog = Catalog::new(source.clone());

        let list = catalog.movie_list("d").unwrap();

        assert_eq!(source.call_count(), 1);
        let ids: Vec<&str> = list.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["Alien", "memento", "zodiac"]);
        assert!(list.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn each_mapping_entry_appears_exactly_once() {
        let source = three_movie_source();
        let catalog = Catalog::new(source.clone());

        let map = catalog.movie_map("d").unwrap();
        let list = catalog.movie_list("d").unwrap();

        for movie in &list {
            assert_eq!(map[&movie.id], movie.vector);
        }
        let mut ids: Vec<&String> = list.iter().map(|m| &m.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), map.len());
    }

    #[test]
    fn repeated_calls_yield_identical_lists() {
        let catalog = Catalog::new(three_movie_source());

        let first = catalog.movie_list("d").unwrap();
        let second = catalog.movie_list("d").unwrap();
        assert_eq!(first, second);
        assert!(first
            .iter()
            .zip(&second)
            .all(|(a, b)| a.vector == b.vector));
    }

    #[test]
    fn empty_dataset_yields_empty_list() {
        let catalog = Catalog::new(Arc::new(FakeSource::new(&[])));
        let list = catalog.movie_list("empty").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn source_failure_propagates() {
        let catalog = Catalog::new(Arc::new(BrokenSource));
        let err = catalog.movie_list("gone").unwrap_err();
        assert!(err.to_string().contains("gone"));
        assert!(catalog.movie_map("gone").is_err());
    }
}
