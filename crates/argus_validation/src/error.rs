use ash::vk;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
  #[error("Debug report was not initialized")]
  NotInitialized,
  #[error("Failed to create debug report callback: {0:?}")]
  Vulkan(vk::Result),
}
