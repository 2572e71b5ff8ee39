use ash::vk;

/// Settings a `DebugReport` starts out with. An empty callback means the
/// default dispatcher takes over once reporting is activated.
#[derive(Default, Clone)]
pub struct ReportConfig {
  pub flags: vk::DebugReportFlagsEXT,
  pub callback: vk::PFN_vkDebugReportCallbackEXT,
}

impl ReportConfig {
  #[inline]
  pub fn add_flag(mut self, flag: vk::DebugReportFlagsEXT) -> Self {
    self.flags |= flag;
    self
  }

  #[inline]
  pub fn set_flags(mut self, flags: vk::DebugReportFlagsEXT) -> Self {
    self.flags = flags;
    self
  }

  #[inline]
  pub fn set_callback(mut self, callback: vk::PFN_vkDebugReportCallbackEXT) -> Self {
    self.callback = callback;
    self
  }
}
