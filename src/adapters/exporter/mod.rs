//! External exporter integration
//!
//! - [`Exporter`] - trait seam the driver calls through
//! - [`ProcessExporter`] - launches the configured command as a subprocess
//! - [`DryRunExporter`] - prints the command instead of launching it

pub mod dry_run;
pub mod process;
pub mod traits;

pub use dry_run::DryRunExporter;
pub use process::ProcessExporter;
pub use traits::Exporter;
