use anyhow::Error;
use ash::vk;

use crate::config::ReportConfig;

/// Stand-in used when validation support is compiled out: the dispatcher and
/// registration lifecycle do not exist, configuration calls are no-ops.
#[derive(Default)]
pub struct DebugReport {
  flags: vk::DebugReportFlagsEXT,
}

impl DebugReport {
  pub fn with_config(config: ReportConfig) -> Self {
    DebugReport {
      flags: config.flags,
    }
  }

  pub fn init(&mut self, _entry: &ash::Entry, _instance: &ash::Instance) -> Result<(), Error> {
    Ok(())
  }

  pub fn set_flags(&mut self, _flags: vk::DebugReportFlagsEXT) {}

  pub fn set_callback(&mut self, _callback: vk::PFN_vkDebugReportCallbackEXT) {}

  pub fn destroy(&mut self) {}

  pub fn print(&self) {}

  pub fn flags(&self) -> vk::DebugReportFlagsEXT {
    self.flags
  }

  pub fn is_active(&self) -> bool {
    false
  }
}
