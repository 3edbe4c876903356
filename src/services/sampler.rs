//! Filtering and uniform random sampling over the catalog.
//!
//! A sample query is the conjunction of three per-row conditions: type
//! equality, genre equality, and a minimum-score threshold. One survivor
//! is drawn uniformly at random; zero survivors is an expected outcome,
//! not an error, and is reported as `None`.

use rand::Rng;

use crate::catalog::{Catalog, Item};
use crate::error::{AppError, AppResult};

/// Whether a row whose score equals the requested minimum survives the
/// score filter. Call sites have historically disagreed on this bound;
/// it is fixed here, once, as inclusive.
pub const SCORE_THRESHOLD_INCLUSIVE: bool = true;

/// A validated sample request.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleQuery {
    pub media_type: String,
    pub genre: String,
    pub min_score: f64,
}

impl SampleQuery {
    /// Builds a sample query, rejecting missing or empty required strings.
    pub fn new(
        media_type: impl Into<String>,
        genre: impl Into<String>,
        min_score: f64,
    ) -> AppResult<Self> {
        let media_type = media_type.into();
        let genre = genre.into();
        if media_type.is_empty() {
            return Err(AppError::InvalidQuery("type is required".to_string()));
        }
        if genre.is_empty() {
            return Err(AppError::InvalidQuery("genre is required".to_string()));
        }
        Ok(Self {
            media_type,
            genre,
            min_score,
        })
    }

    /// Evaluates the full predicate conjunction against one row.
    ///
    /// A row with no score never satisfies the threshold; rows with no
    /// type or genre never satisfy the equality conditions.
    pub fn matches(&self, item: &Item) -> bool {
        let score_ok = match item.score {
            Some(score) if SCORE_THRESHOLD_INCLUSIVE => score >= self.min_score,
            Some(score) => score > self.min_score,
            None => false,
        };
        score_ok
            && item.media_type.as_deref() == Some(self.media_type.as_str())
            && item.genre.as_deref() == Some(self.genre.as_str())
    }
}

/// Draws one uniformly random row among those matching the query.
///
/// Every surviving row is equally likely. The RNG is injected so callers
/// can seed it for reproducible picks.
pub fn sample_one<'a, R: Rng>(
    catalog: &'a Catalog,
    query: &SampleQuery,
    rng: &mut R,
) -> Option<&'a Item> {
    let survivors: Vec<&Item> = catalog.iter().filter(|item| query.matches(item)).collect();
    if survivors.is_empty() {
        return None;
    }
    Some(survivors[rng.gen_range(0..survivors.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(name: &str, genre: &str, score: f64, media_type: &str) -> Item {
        Item {
            name: name.to_string(),
            genre: Some(genre.to_string()),
            score: Some(score),
            media_type: Some(media_type.to_string()),
        }
    }

    fn fixture() -> Catalog {
        Catalog::new(vec![
            item("A", "Drama", 8.0, "Movie"),
            item("B", "Drama", 6.0, "Movie"),
            item("C", "Comedy", 9.0, "Movie"),
        ])
    }

    #[test]
    fn test_single_survivor_is_returned() {
        let catalog = fixture();
        let query = SampleQuery::new("Movie", "Drama", 7.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let picked = sample_one(&catalog, &query, &mut rng).unwrap();
        assert_eq!(picked.name, "A");
    }

    #[test]
    fn test_no_match_is_none() {
        let catalog = fixture();
        let query = SampleQuery::new("Movie", "Comedy", 9.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_one(&catalog, &query, &mut rng).is_none());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = fixture();
        // C scores exactly 9.0; the inclusive bound keeps it
        let query = SampleQuery::new("Movie", "Comedy", 9.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(SCORE_THRESHOLD_INCLUSIVE);
        let picked = sample_one(&catalog, &query, &mut rng).unwrap();
        assert_eq!(picked.name, "C");
    }

    #[test]
    fn test_every_pick_satisfies_predicate() {
        let catalog = Catalog::new(vec![
            item("A", "Drama", 8.0, "Movie"),
            item("B", "Drama", 6.0, "Movie"),
            item("C", "Drama", 7.5, "Show"),
            item("D", "Comedy", 9.0, "Movie"),
        ]);
        let query = SampleQuery::new("Movie", "Drama", 5.0).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample_one(&catalog, &query, &mut rng).unwrap();
            assert!(query.matches(picked));
            assert_eq!(picked.media_type.as_deref(), Some("Movie"));
            assert_eq!(picked.genre.as_deref(), Some("Drama"));
            assert!(picked.score.unwrap() >= 5.0);
        }
    }

    #[test]
    fn test_row_without_score_never_matches() {
        let catalog = Catalog::new(vec![Item {
            name: "A".to_string(),
            genre: Some("Drama".to_string()),
            score: None,
            media_type: Some("Movie".to_string()),
        }]);
        let query = SampleQuery::new("Movie", "Drama", 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_one(&catalog, &query, &mut rng).is_none());
    }

    #[test]
    fn test_row_without_type_never_matches() {
        let catalog = Catalog::new(vec![Item {
            name: "A".to_string(),
            genre: Some("Drama".to_string()),
            score: Some(8.0),
            media_type: None,
        }]);
        let query = SampleQuery::new("Movie", "Drama", 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_one(&catalog, &query, &mut rng).is_none());
    }

    #[test]
    fn test_same_seed_same_pick() {
        let catalog = Catalog::new(vec![
            item("A", "Drama", 8.0, "Movie"),
            item("B", "Drama", 8.0, "Movie"),
            item("C", "Drama", 8.0, "Movie"),
        ]);
        let query = SampleQuery::new("Movie", "Drama", 0.0).unwrap();
        let first = {
            let mut rng = StdRng::seed_from_u64(42);
            sample_one(&catalog, &query, &mut rng).unwrap().name.clone()
        };
        let second = {
            let mut rng = StdRng::seed_from_u64(42);
            sample_one(&catalog, &query, &mut rng).unwrap().name.clone()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_sampling_is_uniform() {
        // Chi-square test against uniform over 5 survivors, 1000 trials.
        let names = ["A", "B", "C", "D", "E"];
        let catalog = Catalog::new(
            names
                .iter()
                .map(|name| item(name, "Drama", 8.0, "Movie"))
                .collect(),
        );
        let query = SampleQuery::new("Movie", "Drama", 0.0).unwrap();

        let trials = 1000;
        let mut counts = [0usize; 5];
        for seed in 0..trials {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample_one(&catalog, &query, &mut rng).unwrap();
            let idx = names.iter().position(|n| *n == picked.name).unwrap();
            counts[idx] += 1;
        }

        let expected = trials as f64 / names.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // Critical value for df=4 at p=0.001
        assert!(
            chi_square < 18.47,
            "chi-square {chi_square} too high, counts {counts:?}"
        );
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        assert!(matches!(
            SampleQuery::new("", "Drama", 0.0),
            Err(AppError::InvalidQuery(_))
        ));
        assert!(matches!(
            SampleQuery::new("Movie", "", 0.0),
            Err(AppError::InvalidQuery(_))
        ));
    }
}
