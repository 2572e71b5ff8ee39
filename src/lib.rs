use anyhow::Error;

pub use log;

pub use argus_console as console;
pub use argus_validation as validation;

pub use argus_validation::ash;
pub use argus_validation::{
  log_result, result_to_str, DebugReport, ReportConfig, REQUIRED_EXTENSION_NAMES, VALIDATION_LAYER,
};

/// One-time process setup: console escape handling and the log sink.
/// Call this from the entry point before touching any reporting API.
pub fn init() -> Result<(), Error> {
  console::init()?;
  env_logger::try_init()?;
  Ok(())
}
