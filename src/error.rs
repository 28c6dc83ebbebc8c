//! Error types for driftfield.
//!
//! The only fallible edges are GPU/surface initialization and event-loop
//! creation. Everything inside the frame loop (RNG, drawing, event
//! registration) is treated as infallible.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running an animator.
#[derive(Debug)]
pub enum AnimatorError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimatorError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            AnimatorError::Window(e) => write!(f, "Failed to create window: {}", e),
            AnimatorError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for AnimatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimatorError::EventLoop(e) => Some(e),
            AnimatorError::Window(e) => Some(e),
            AnimatorError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::OsError> for AnimatorError {
    fn from(e: winit::error::OsError) -> Self {
        AnimatorError::Window(e)
    }
}

impl From<winit::error::EventLoopError> for AnimatorError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AnimatorError::EventLoop(e)
    }
}

impl From<GpuError> for AnimatorError {
    fn from(e: GpuError) -> Self {
        AnimatorError::Gpu(e)
    }
}
