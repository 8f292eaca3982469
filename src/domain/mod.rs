//! Domain models and types for the export runner.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Model identifiers** ([`ModelId`]), opaque strings handed to the exporter
//! - **The model catalog** ([`ModelEntry`], [`ModelList`]) with per-entry enable flags
//! - **Error types** ([`RunnerError`]) and the [`Result`] alias
//!
//! ```rust
//! use export_runner::domain::{ModelEntry, ModelId, ModelList};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let list = ModelList::new(vec![
//!     ModelEntry::new(ModelId::new("ViT-B-32__openai")?),
//!     ModelEntry::new(ModelId::new("RN50__openai")?).disabled(),
//! ]);
//! assert_eq!(list.active_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod model;
pub mod result;

pub use errors::RunnerError;
pub use ids::ModelId;
pub use model::{ModelEntry, ModelList};
pub use result::Result;
