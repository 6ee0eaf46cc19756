//! GPU rendering.
//!
//! Convention (inherited from the coordinate basis the shader expects):
//! - CPU geometry is in logical pixels, top-left origin, +Y down.
//! - The vertex shader converts to NDC using a viewport uniform.

mod label;

pub use label::{LabelRenderer, TextRun};

/// Viewport size in logical pixels; the coordinate basis for NDC conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport, // logical px
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}
