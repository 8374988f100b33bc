//! MedPulse Search — synonym expansion and re-scoring of externally fetched
//! search candidates. Retrieval itself belongs to the external query layer.

pub mod expand;
pub mod rank;

pub use expand::{analyze_query, expand_query, QueryAnalysis, SYNONYM_TABLE};
pub use rank::{rank_results, RankedResult, SearchCandidate};
