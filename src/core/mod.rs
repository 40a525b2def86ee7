pub mod catalogue;
pub mod engine;
pub mod navigation;
pub mod query;
pub mod stats;

pub use crate::domain::model::{DanglingPolicy, SearchMode, Term};
pub use crate::domain::ports::{
    ConfigProvider, CourtProvider, LookupProvider, NewsProvider, Storage, TermSource,
};
pub use crate::utils::error::Result;
