use anyhow::Result;
use ash::vk;

use crate::{
    Buffer, BufferSource, BufferView, DescriptorSet, DrawSource, Framebuffer, InputAssembler, PipelineState, RenderPass,
    Statistics, Texture,
};

/// Recording life cycle shared by all command buffer variants.
pub trait CmdBuffer {
    /// Start a new recording session. Resets statistics, bound state and the render pass state.
    fn begin(&mut self);
    /// Finish the recording session.
    /// # Errors
    /// Fails if a render pass is still active. The session stays open in that case.
    fn end(&mut self) -> Result<()>;
    /// Statistics accumulated since the last [`CmdBuffer::begin`].
    fn statistics(&self) -> &Statistics;
    /// Whether a render pass is currently active.
    fn in_render_pass(&self) -> bool;
    /// Execute `count` other command buffers from within this one.
    /// # Errors
    /// Variants without support for nested execution always fail with
    /// [`Error::ExecuteUnsupported`](crate::Error::ExecuteUnsupported).
    fn execute(&mut self, buffers: &[&Self], count: u32) -> Result<()>
    where
        Self: Sized;
}

/// Trait representing a command buffer that supports transfer commands. These are only valid outside of a render
/// pass.
pub trait TransferCmdBuffer {
    /// Upload `data` to the start of `buffer`. The upload size is `size` if given, zero for indirect buffers, and
    /// the byte length of `data` otherwise. Buffers without a native handle are silently skipped.
    /// # Errors
    /// Fails if a render pass is active.
    fn update_buffer<'d>(&mut self, buffer: &Buffer, data: impl Into<BufferSource<'d>>, size: Option<vk::DeviceSize>) -> Result<()>;
    /// Copy buffer contents into regions of a texture, one region per buffer view. Textures without a native handle
    /// are silently skipped. Regions are not validated.
    /// # Errors
    /// Fails if a render pass is active.
    fn copy_buffers_to_texture(&mut self, buffers: &[BufferView], texture: &Texture, regions: &[vk::BufferImageCopy]) -> Result<()>;
}

/// Trait representing a command buffer that supports graphics commands.
///
/// Binding calls only record what should be bound. The actual bind happens once, right before the next draw.
pub trait GraphicsCmdBuffer<'a>: CmdBuffer + TransferCmdBuffer {
    /// Begin a render pass. Equivalent of `vkCmdBeginRenderPass`.
    fn begin_render_pass(
        &mut self,
        render_pass: &RenderPass,
        framebuffer: &Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: &[vk::ClearColorValue],
        clear_depth: f32,
        clear_stencil: u32,
    );
    /// End the current render pass. Equivalent of `vkCmdEndRenderPass`.
    /// # Errors
    /// Fails if no render pass is active.
    fn end_render_pass(&mut self) -> Result<()>;
    /// Bind a pipeline state object.
    fn bind_pipeline_state(&mut self, pipeline: &'a PipelineState);
    /// Bind the vertex and index buffers of an input assembler.
    fn bind_input_assembler(&mut self, input_assembler: &'a InputAssembler);
    /// Bind a descriptor set to the given set index, with its dynamic offsets.
    fn bind_descriptor_set(&mut self, set: u32, descriptor_set: &'a DescriptorSet, dynamic_offsets: &[u32]);
    /// Sets the viewport. Redundant changes are not forwarded to the native context.
    fn set_viewport(&mut self, viewport: vk::Viewport);
    /// Sets the scissor region. Redundant changes are not forwarded to the native context.
    fn set_scissor(&mut self, scissor: vk::Rect2D);
    /// Set viewport and scissor region to the entire render area of the current render pass.
    fn full_viewport_scissor(&mut self);
    fn set_line_width(&mut self, line_width: f32);
    fn set_depth_bias(&mut self, constant: f32, clamp: f32, slope: f32);
    fn set_blend_constants(&mut self, constants: [f32; 4]);
    fn set_depth_bound(&mut self, min: f32, max: f32);
    fn set_stencil_write_mask(&mut self, face: vk::StencilFaceFlags, mask: u32);
    fn set_stencil_compare_mask(&mut self, face: vk::StencilFaceFlags, reference: u32, mask: u32);
    /// Record a single draw call, from explicit draw parameters or from an input assembler.
    /// # Errors
    /// Fails if no render pass is active.
    fn draw<'d>(&mut self, source: impl Into<DrawSource<'d>>) -> Result<()>;
    /// Blit regions of one texture into another. Equivalent of `vkCmdBlitImage`.
    fn blit_texture(&mut self, src: &Texture, dst: &Texture, regions: &[vk::ImageBlit], filter: vk::Filter);
}
