//! Exporter abstraction
//!
//! The exporter is an opaque external collaborator. The runner only cares
//! whether an invocation for a given model succeeded.

use crate::core::outcome::InvocationOutcome;
use crate::domain::ModelId;
use async_trait::async_trait;

/// External exporter seam
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Export `model`, returning once the invocation has finished
    async fn export(&self, model: &ModelId) -> InvocationOutcome;

    /// Human-readable form of the invocation for `model`
    fn describe(&self, model: &ModelId) -> String;
}
