pub mod engine;
pub mod error;
pub mod language;
pub mod models;
pub mod myanmar;
pub mod types;

pub use engine::{length_budget, word_count, SummaryEngine};
pub use error::Error;
pub use language::detect_language;
pub use models::SummarizationModel;
pub use types::{Language, SummaryRequest, SummaryResult, DEFAULT_RATIO};

pub type Result<T> = std::result::Result<T, Error>;
