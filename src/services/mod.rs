pub mod facets;
pub mod sampler;

pub use facets::{list_genres, list_types, FacetQuery};
pub use sampler::{sample_one, SampleQuery};
