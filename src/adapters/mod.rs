//! External system integrations.
//!
//! - [`exporter`] - the external model exporter, behind the [`exporter::Exporter`] trait
//!
//! Adapters isolate the subprocess boundary so the driver can be tested with
//! stub implementations.

pub mod exporter;
