use std::ffi::{c_char, CStr};

use ash::ext;

mod config;
mod error;
#[cfg(feature = "validation")]
mod report;
#[cfg(not(feature = "validation"))]
mod report_disabled;
mod result;

pub use ash;

pub use config::ReportConfig;
pub use error::ReportError;
#[cfg(feature = "validation")]
pub use report::DebugReport;
#[cfg(not(feature = "validation"))]
pub use report_disabled::DebugReport;
pub use result::{log_result, result_to_str};

/// Instance extensions the host must enable for debug reporting to work.
pub const REQUIRED_EXTENSION_NAMES: [*const c_char; 1] = [ext::debug_report::NAME.as_ptr()];

pub const VALIDATION_LAYER: &CStr = c"VK_LAYER_KHRONOS_validation";
