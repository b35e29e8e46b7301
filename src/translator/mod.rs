//! The command translator issues validated commands against the native context.
//!
//! Command buffers validate calls, resolve native handles and decide when state has to be bound. Everything that is left
//! is forwarding to a [`CommandTranslator`]. Every method is synchronous and complete on return, and none of them can fail:
//! native errors are reported through the native context itself.
//!
//! [`VulkanTranslator`](vulkan::VulkanTranslator) records into a `VkCommandBuffer` through `ash`. Other native contexts
//! can be supported by implementing the trait.

use ash::vk;

use crate::{BufferSource, BufferView, DescriptorSet, DrawInfo, DynamicState, InputAssembler, PipelineState};

pub mod vulkan;

/// Native command submission used by [`CommandBuffer`](crate::CommandBuffer).
pub trait CommandTranslator {
    /// Begin a render pass on `framebuffer`. Clear values are given for every color attachment, then depth and stencil.
    fn begin_render_pass(
        &mut self,
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: &[vk::ClearColorValue],
        clear_depth: f32,
        clear_stencil: u32,
    );

    fn end_render_pass(&mut self);

    /// Bind everything that was recorded since the last bind. `descriptor_sets` and `dynamic_offsets` are indexed by set
    /// number, unbound slots are `None`.
    fn bind_states(
        &mut self,
        pipeline: Option<&PipelineState>,
        input_assembler: Option<&InputAssembler>,
        descriptor_sets: &[Option<&DescriptorSet>],
        dynamic_offsets: &[Vec<u32>],
        dynamic_state: &DynamicState,
    );

    fn draw(&mut self, info: &DrawInfo);

    fn set_viewport(&mut self, viewport: &vk::Viewport);

    fn set_scissor(&mut self, scissor: &vk::Rect2D);

    /// Write `data` into `buffer`, starting at `offset`. A `size` of zero writes the whole payload.
    fn update_buffer(&mut self, buffer: vk::Buffer, data: BufferSource<'_>, offset: vk::DeviceSize, size: vk::DeviceSize);

    /// Copy buffer contents into a texture. Region `i` reads from `buffers[i]`.
    fn copy_buffers_to_texture(&mut self, buffers: &[BufferView], texture: vk::Image, regions: &[vk::BufferImageCopy]);

    /// Blit regions from `src` into `dst`. Either texture may not be realized yet, how that is handled is up to the
    /// translator.
    fn blit_texture(&mut self, src: Option<vk::Image>, dst: Option<vk::Image>, regions: &[vk::ImageBlit], filter: vk::Filter);
}
