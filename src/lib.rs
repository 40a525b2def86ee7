pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::TomlConfig;

pub use crate::adapters::LocalStorage;
pub use crate::core::catalogue::{Catalogue, RelatedLink};
pub use crate::core::engine::{GlossaryEngine, TermDetail};
pub use crate::core::navigation::{NavEvent, NavState};
pub use crate::core::query::{LabelFilter, QueryOptions, TermQuery};
pub use crate::domain::model::{DanglingPolicy, SearchMode, Term};
pub use crate::utils::error::{GlossaryError, Result};
