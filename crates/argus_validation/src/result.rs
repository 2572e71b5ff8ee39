use ash::vk;
use log::Level;

/// Translates a Vulkan result code to its display name, `"UNKNOWN_RESULT"`
/// for anything outside the table.
pub fn result_to_str(result: vk::Result) -> &'static str {
  match result {
    vk::Result::SUCCESS => "VK_SUCCESS",
    vk::Result::NOT_READY => "VK_NOT_READY",
    vk::Result::TIMEOUT => "VK_TIMEOUT",
    vk::Result::EVENT_SET => "VK_EVENT_SET",
    vk::Result::EVENT_RESET => "VK_EVENT_RESET",
    vk::Result::INCOMPLETE => "VK_INCOMPLETE",
    vk::Result::ERROR_OUT_OF_HOST_MEMORY => "VK_ERROR_OUT_OF_HOST_MEMORY",
    vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => "VK_ERROR_OUT_OF_DEVICE_MEMORY",
    vk::Result::ERROR_INITIALIZATION_FAILED => "VK_ERROR_INITIALIZATION_FAILED",
    vk::Result::ERROR_DEVICE_LOST => "VK_ERROR_DEVICE_LOST",
    vk::Result::ERROR_MEMORY_MAP_FAILED => "VK_ERROR_MEMORY_MAP_FAILED",
    vk::Result::ERROR_LAYER_NOT_PRESENT => "VK_ERROR_LAYER_NOT_PRESENT",
    vk::Result::ERROR_EXTENSION_NOT_PRESENT => "VK_ERROR_EXTENSION_NOT_PRESENT",
    vk::Result::ERROR_FEATURE_NOT_PRESENT => "VK_ERROR_FEATURE_NOT_PRESENT",
    vk::Result::ERROR_INCOMPATIBLE_DRIVER => "VK_ERROR_INCOMPATIBLE_DRIVER",
    vk::Result::ERROR_TOO_MANY_OBJECTS => "VK_ERROR_TOO_MANY_OBJECTS",
    vk::Result::ERROR_FORMAT_NOT_SUPPORTED => "VK_ERROR_FORMAT_NOT_SUPPORTED",
    vk::Result::ERROR_SURFACE_LOST_KHR => "VK_ERROR_SURFACE_LOST_KHR",
    vk::Result::ERROR_NATIVE_WINDOW_IN_USE_KHR => "VK_ERROR_NATIVE_WINDOW_IN_USE_KHR",
    vk::Result::SUBOPTIMAL_KHR => "VK_SUBOPTIMAL_KHR",
    vk::Result::ERROR_OUT_OF_DATE_KHR => "VK_ERROR_OUT_OF_DATE_KHR",
    vk::Result::ERROR_INCOMPATIBLE_DISPLAY_KHR => "VK_ERROR_INCOMPATIBLE_DISPLAY_KHR",
    vk::Result::ERROR_VALIDATION_FAILED_EXT => "VK_ERROR_VALIDATION_FAILED_EXT",
    vk::Result::ERROR_INVALID_SHADER_NV => "VK_ERROR_INVALID_SHADER_NV",
    _ => "UNKNOWN_RESULT",
  }
}

/// Logs a result code: warning for positive codes, error for negative ones,
/// silence for success.
pub fn log_result(result: vk::Result) {
  if let Some(level) = result_level(result) {
    log::log!(level, "{}", result_to_str(result));
  }
}

fn result_level(result: vk::Result) -> Option<Level> {
  match result.as_raw() {
    0 => None,
    code if code > 0 => Some(Level::Warn),
    _ => Some(Level::Error),
  }
}
