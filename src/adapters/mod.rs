// Adapters layer: concrete implementations of the domain ports.

pub mod export;
pub mod seed_file;
pub mod static_content;
pub mod storage;

pub use export::{ExportFormat, TermExporter};
pub use seed_file::SeedFileSource;
pub use static_content::{BuiltinTerms, StaticCourtProvider, StaticNewsProvider};
pub use storage::LocalStorage;
