use std::{
  ffi::{c_char, c_void, CStr},
  sync::atomic::{AtomicU32, Ordering},
};

use anyhow::Error;
use ash::{ext, vk};
use log::{info, warn, Level};

use argus_console::{BLUE, CYAN, FAINT, GREEN, RED, RESET, STRIKE, YELLOW};

use crate::{config::ReportConfig, error::ReportError, result::log_result};

const MAX_REPORT_LEN: usize = 512;

/// Shared with the dispatcher through the registration's user data. The mask
/// is atomic so a report firing during a reconfigure reads either the old
/// mask or the transient zero, never garbage.
struct ReportContext {
  enabled: AtomicU32,
}

pub struct DebugReport {
  loader: Option<ext::debug_report::Instance>,
  handle: vk::DebugReportCallbackEXT,
  flags: vk::DebugReportFlagsEXT,
  callback: vk::PFN_vkDebugReportCallbackEXT,
  context: Box<ReportContext>,
}

impl Default for DebugReport {
  fn default() -> Self {
    DebugReport {
      loader: None,
      handle: vk::DebugReportCallbackEXT::null(),
      flags: vk::DebugReportFlagsEXT::empty(),
      callback: Some(default_report_callback),
      context: Box::new(ReportContext {
        enabled: AtomicU32::new(0),
      }),
    }
  }
}

impl DebugReport {
  pub fn with_config(config: ReportConfig) -> Self {
    let mut report = DebugReport::default();
    report.flags = config.flags;
    report.callback = config.callback.or(report.callback);
    report
  }

  /// Resolves the debug report entry points and activates reporting with the
  /// configured flags.
  pub fn init(&mut self, entry: &ash::Entry, instance: &ash::Instance) -> Result<(), Error> {
    self.loader = Some(ext::debug_report::Instance::new(entry, instance));
    self.set(self.flags, self.callback)?;
    Ok(())
  }

  /// Replaces the enabled severity mask, keeping the current callback.
  pub fn set_flags(&mut self, flags: vk::DebugReportFlagsEXT) {
    if let Err(err) = self.set(flags, self.callback) {
      log_set_error(err);
    }
    self.print();
  }

  /// Replaces the callback, keeping the current mask. An empty callback
  /// falls back to the default dispatcher.
  pub fn set_callback(&mut self, callback: vk::PFN_vkDebugReportCallbackEXT) {
    if let Err(err) = self.set(self.flags, callback) {
      log_set_error(err);
    }
  }

  fn set(
    &mut self,
    flags: vk::DebugReportFlagsEXT,
    callback: vk::PFN_vkDebugReportCallbackEXT,
  ) -> Result<(), ReportError> {
    let Some(loader) = self.loader.as_ref() else {
      return Err(ReportError::NotInitialized);
    };

    if self.handle != vk::DebugReportCallbackEXT::null() {
      unsafe { loader.destroy_debug_report_callback(self.handle, None) };
      self.handle = vk::DebugReportCallbackEXT::null();
    }
    // reports stay off until the new registration is in place
    self.context.enabled.store(0, Ordering::Relaxed);
    self.callback = callback.or(Some(default_report_callback));
    self.flags = flags;

    let user_data = &*self.context as *const ReportContext as *mut c_void;
    let create_info = vk::DebugReportCallbackCreateInfoEXT::default()
      .flags(flags)
      .pfn_callback(self.callback)
      .user_data(user_data);

    self.handle = unsafe { loader.create_debug_report_callback(&create_info, None) }
      .map_err(ReportError::Vulkan)?;
    self.context.enabled.store(flags.as_raw(), Ordering::Relaxed);
    Ok(())
  }

  pub fn destroy(&mut self) {
    if self.handle == vk::DebugReportCallbackEXT::null() {
      return;
    }
    if let Some(loader) = self.loader.as_ref() {
      unsafe { loader.destroy_debug_report_callback(self.handle, None) };
    }
    self.handle = vk::DebugReportCallbackEXT::null();
  }

  /// Renders the five severity bits, active ones in color, inactive ones
  /// struck through.
  pub fn print(&self) {
    info!("{}", flags_line(self.flags));
  }

  pub fn flags(&self) -> vk::DebugReportFlagsEXT {
    self.flags
  }

  pub fn is_active(&self) -> bool {
    self.handle != vk::DebugReportCallbackEXT::null()
  }
}

impl Drop for DebugReport {
  fn drop(&mut self) {
    self.destroy();
  }
}

fn log_set_error(err: ReportError) {
  match err {
    ReportError::NotInitialized => warn!("{err}"),
    ReportError::Vulkan(code) => log_result(code),
  }
}

pub(crate) unsafe extern "system" fn default_report_callback(
  flags: vk::DebugReportFlagsEXT,
  _object_type: vk::DebugReportObjectTypeEXT,
  _object: u64,
  _location: usize,
  message_code: i32,
  p_layer_prefix: *const c_char,
  p_message: *const c_char,
  p_user_data: *mut c_void,
) -> vk::Bool32 {
  let context = &*(p_user_data as *const ReportContext);
  let enabled = vk::DebugReportFlagsEXT::from_raw(context.enabled.load(Ordering::Relaxed));

  let Some((level, abort)) = route(flags & enabled) else {
    return vk::FALSE;
  };

  let layer = CStr::from_ptr(p_layer_prefix).to_string_lossy();
  let message = CStr::from_ptr(p_message).to_string_lossy();
  log::log!(level, "{}", format_report(&layer, message_code, &message));

  if abort {
    vk::TRUE
  } else {
    vk::FALSE
  }
}

/// Exact single-bit dispatch: the abort signal is reserved for errors,
/// everything else continues. Zero and multi-bit values emit nothing.
fn route(masked: vk::DebugReportFlagsEXT) -> Option<(Level, bool)> {
  if masked == vk::DebugReportFlagsEXT::ERROR {
    Some((Level::Error, true))
  } else if masked == vk::DebugReportFlagsEXT::WARNING {
    Some((Level::Warn, false))
  } else if masked == vk::DebugReportFlagsEXT::PERFORMANCE_WARNING {
    Some((Level::Trace, false))
  } else if masked == vk::DebugReportFlagsEXT::INFORMATION {
    Some((Level::Info, false))
  } else if masked == vk::DebugReportFlagsEXT::DEBUG {
    Some((Level::Debug, false))
  } else {
    None
  }
}

fn format_report(layer: &str, code: i32, message: &str) -> String {
  let mut line = format!("[{layer}] Code {code} : {message}");
  if line.len() > MAX_REPORT_LEN {
    let mut end = MAX_REPORT_LEN;
    while !line.is_char_boundary(end) {
      end -= 1;
    }
    line.truncate(end);
  }
  line
}

fn flag_token(enabled: bool, color: &str, on: &str, off: &str) -> String {
  if enabled {
    format!("{color}{on}{RESET}")
  } else {
    format!("{FAINT}{STRIKE}{off}{RESET}")
  }
}

fn flags_line(flags: vk::DebugReportFlagsEXT) -> String {
  let tokens = [
    flag_token(flags.contains(vk::DebugReportFlagsEXT::INFORMATION), GREEN, "INFO", "info"),
    flag_token(flags.contains(vk::DebugReportFlagsEXT::WARNING), YELLOW, "WARN", "warn"),
    flag_token(flags.contains(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING), CYAN, "PERF", "perf"),
    flag_token(flags.contains(vk::DebugReportFlagsEXT::ERROR), RED, "ERROR", "error"),
    flag_token(flags.contains(vk::DebugReportFlagsEXT::DEBUG), BLUE, "DEBUG", "debug"),
  ];
  format!("Debug report flags : [{}] = {}", tokens.join("|"), flags.as_raw())
}

#[cfg(test)]
mod test {
  use std::{
    ffi::{c_void, CString},
    sync::atomic::AtomicU32,
  };

  use ash::vk;
  use log::Level;

  use crate::config::ReportConfig;

  use super::{
    default_report_callback, flags_line, format_report, route, DebugReport, ReportContext,
    MAX_REPORT_LEN,
  };

  fn context_with(enabled: vk::DebugReportFlagsEXT) -> ReportContext {
    ReportContext {
      enabled: AtomicU32::new(enabled.as_raw()),
    }
  }

  fn fire(context: &ReportContext, severity: vk::DebugReportFlagsEXT, code: i32) -> vk::Bool32 {
    let layer = CString::new("Validation").unwrap();
    let message = CString::new("image layout mismatch").unwrap();
    unsafe {
      default_report_callback(
        severity,
        vk::DebugReportObjectTypeEXT::UNKNOWN,
        0,
        0,
        code,
        layer.as_ptr(),
        message.as_ptr(),
        context as *const ReportContext as *mut c_void,
      )
    }
  }

  #[test]
  fn routes_single_bits_to_levels() {
    assert_eq!(route(vk::DebugReportFlagsEXT::ERROR), Some((Level::Error, true)));
    assert_eq!(route(vk::DebugReportFlagsEXT::WARNING), Some((Level::Warn, false)));
    assert_eq!(route(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING), Some((Level::Trace, false)));
    assert_eq!(route(vk::DebugReportFlagsEXT::INFORMATION), Some((Level::Info, false)));
    assert_eq!(route(vk::DebugReportFlagsEXT::DEBUG), Some((Level::Debug, false)));
  }

  #[test]
  fn zero_and_multi_bit_values_emit_nothing() {
    assert_eq!(route(vk::DebugReportFlagsEXT::empty()), None);
    assert_eq!(route(vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING), None);
  }

  #[test]
  fn dispatcher_aborts_on_enabled_errors() {
    let context = context_with(vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING);
    let verdict = fire(&context, vk::DebugReportFlagsEXT::ERROR, 7);
    assert_eq!(verdict, vk::TRUE);
  }

  #[test]
  fn dispatcher_continues_on_warnings() {
    let context = context_with(vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING);
    let verdict = fire(&context, vk::DebugReportFlagsEXT::WARNING, 7);
    assert_eq!(verdict, vk::FALSE);
  }

  #[test]
  fn dispatcher_drops_disabled_severities() {
    let context = context_with(vk::DebugReportFlagsEXT::ERROR);
    let verdict = fire(&context, vk::DebugReportFlagsEXT::DEBUG, 7);
    assert_eq!(verdict, vk::FALSE);
  }

  #[test]
  fn report_lines_carry_layer_and_code() {
    let line = format_report("Validation", 42, "unexpected image layout");
    assert!(line.contains("[Validation]"));
    assert!(line.contains("Code 42"));
    assert!(line.contains("unexpected image layout"));
  }

  #[test]
  fn oversized_reports_are_truncated() {
    let message = "x".repeat(2 * MAX_REPORT_LEN);
    let line = format_report("Validation", 0, &message);
    assert_eq!(line.len(), MAX_REPORT_LEN);
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let message = "é".repeat(MAX_REPORT_LEN);
    let line = format_report("Validation", 0, &message);
    assert!(line.len() <= MAX_REPORT_LEN);
  }

  #[test]
  fn flag_line_shows_active_and_inactive_bits() {
    let flags = vk::DebugReportFlagsEXT::INFORMATION | vk::DebugReportFlagsEXT::ERROR;
    let line = flags_line(flags);

    assert!(line.contains("INFO"));
    assert!(line.contains("ERROR"));
    assert!(line.contains("warn"));
    assert!(line.contains("perf"));
    assert!(line.contains("debug"));
    assert!(line.ends_with(&format!("= {}", flags.as_raw())));
  }

  #[test]
  fn flag_line_reflects_only_the_requested_bits() {
    let line = flags_line(vk::DebugReportFlagsEXT::empty());
    assert!(line.contains("info"));
    assert!(!line.contains("INFO"));
    assert!(line.ends_with("= 0"));
  }

  #[test]
  fn configuring_before_init_is_skipped() {
    let mut report = DebugReport::default();
    report.set_flags(vk::DebugReportFlagsEXT::ERROR);
    report.set_callback(None);

    assert!(!report.is_active());
    assert_eq!(report.flags(), vk::DebugReportFlagsEXT::empty());
  }

  #[test]
  fn destroy_is_idempotent() {
    let mut report = DebugReport::default();
    report.destroy();
    report.destroy();
    assert!(!report.is_active());
  }

  #[test]
  fn empty_callback_falls_back_to_default() {
    let report = DebugReport::with_config(ReportConfig::default());
    let expected: vk::PFN_vkDebugReportCallbackEXT = Some(default_report_callback);
    assert_eq!(report.callback, expected);
  }

  #[test]
  fn configured_flags_survive_until_activation() {
    let report =
      DebugReport::with_config(ReportConfig::default().add_flag(vk::DebugReportFlagsEXT::DEBUG));
    assert_eq!(report.flags(), vk::DebugReportFlagsEXT::DEBUG);
    assert!(!report.is_active());
  }
}
