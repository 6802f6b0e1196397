pub mod fallback;
pub mod ingestion;
pub mod normalizer;
pub mod parser;
pub mod registry;
pub mod sources;

pub use ingestion::{IngestedData, Ingestor};
pub use registry::IdentifierRegistry;
