//! Command translator that records into a `VkCommandBuffer`.
//!
//! # Example
//! ```no_run
//! use grafos::prelude::*;
//! # fn record(device: ash::Device, cmd: vk::CommandBuffer) {
//! let mut translator = VulkanTranslator::new(device);
//! translator.set_command_buffer(cmd);
//! let device = Device::new(translator, DeviceBuilder::new().name("vulkan").build());
//! let mut cmd = CommandBuffer::new(device.clone());
//! cmd.begin();
//! # }
//! ```

use std::mem::size_of;

use ash::vk;
use static_assertions::const_assert_eq;

use crate::command_buffer::draw_info::indirect_stride;
use crate::{BufferSource, BufferView, CommandTranslator, DescriptorSet, DrawInfo, DynamicState, InputAssembler, PipelineState};

const_assert_eq!(size_of::<vk::DrawIndirectCommand>(), 16);
const_assert_eq!(size_of::<vk::DrawIndexedIndirectCommand>(), 20);

/// Records commands into a Vulkan command buffer in the recording state.
///
/// Dynamic state in Vulkan does not survive command buffer boundaries. After switching to another command buffer with
/// [`VulkanTranslator::set_command_buffer`], call [`Device::invalidate_state_cache`](crate::Device::invalidate_state_cache).
#[derive(Derivative)]
#[derivative(Debug)]
pub struct VulkanTranslator {
    #[derivative(Debug = "ignore")]
    device: ash::Device,
    handle: vk::CommandBuffer,
}

impl VulkanTranslator {
    /// Create a translator without a target command buffer.
    pub fn new(device: ash::Device) -> Self {
        Self {
            device,
            handle: vk::CommandBuffer::null(),
        }
    }

    /// Set the command buffer commands are recorded into. It must be in the recording state for as long as commands are
    /// issued through this translator.
    pub fn set_command_buffer(&mut self, handle: vk::CommandBuffer) {
        self.handle = handle;
    }

    /// Get unsafe access to the underlying command buffer
    /// # Safety
    /// Any vulkan calls that modify the command buffer state may lead to validation errors or put the
    /// system in an undefined state.
    pub unsafe fn command_buffer(&self) -> vk::CommandBuffer {
        self.handle
    }

    fn bind_dynamic_state(&self, state: &DynamicState) {
        unsafe {
            self.device.cmd_set_line_width(self.handle, state.line_width);
            self.device
                .cmd_set_depth_bias(self.handle, state.depth_bias.constant, state.depth_bias.clamp, state.depth_bias.slope);
            self.device.cmd_set_blend_constants(self.handle, &state.blend_constants);
            self.device
                .cmd_set_depth_bounds(self.handle, state.depth_bounds.min, state.depth_bounds.max);
            for (face, stencil) in [
                (vk::StencilFaceFlags::FRONT, &state.stencil_front),
                (vk::StencilFaceFlags::BACK, &state.stencil_back),
            ] {
                self.device.cmd_set_stencil_write_mask(self.handle, face, stencil.write_mask);
                self.device.cmd_set_stencil_compare_mask(self.handle, face, stencil.compare_mask);
                self.device.cmd_set_stencil_reference(self.handle, face, stencil.reference);
            }
        }
    }
}

impl CommandTranslator for VulkanTranslator {
    fn begin_render_pass(
        &mut self,
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: &[vk::ClearColorValue],
        clear_depth: f32,
        clear_stencil: u32,
    ) {
        let clear_values = clear_colors
            .iter()
            .map(|color| vk::ClearValue {
                color: *color,
            })
            .chain(std::iter::once(vk::ClearValue {
                depth_stencil: vk::ClearDepthStencilValue {
                    depth: clear_depth,
                    stencil: clear_stencil,
                },
            }))
            .collect::<Vec<_>>();
        let info = vk::RenderPassBeginInfo::builder()
            .render_pass(render_pass)
            .framebuffer(framebuffer)
            .render_area(render_area)
            .clear_values(&clear_values);
        unsafe {
            self.device
                .cmd_begin_render_pass(self.handle, &info, vk::SubpassContents::INLINE);
        }
    }

    fn end_render_pass(&mut self) {
        unsafe {
            self.device.cmd_end_render_pass(self.handle);
        }
    }

    fn bind_states(
        &mut self,
        pipeline: Option<&PipelineState>,
        input_assembler: Option<&InputAssembler>,
        descriptor_sets: &[Option<&DescriptorSet>],
        dynamic_offsets: &[Vec<u32>],
        dynamic_state: &DynamicState,
    ) {
        if let Some(pipeline) = pipeline {
            unsafe {
                self.device
                    .cmd_bind_pipeline(self.handle, pipeline.bind_point(), pipeline.handle());
            }
            for (index, set) in descriptor_sets.iter().enumerate() {
                let Some(set) = set else { continue; };
                let offsets = dynamic_offsets.get(index).map(Vec::as_slice).unwrap_or(&[]);
                unsafe {
                    self.device.cmd_bind_descriptor_sets(
                        self.handle,
                        pipeline.bind_point(),
                        pipeline.layout(),
                        index as u32,
                        std::slice::from_ref(&set.handle()),
                        offsets,
                    );
                }
            }
        } else if descriptor_sets.iter().any(Option::is_some) {
            warn!("Descriptor sets bound without a pipeline. They will be bound with the next pipeline.");
        }

        if let Some(assembler) = input_assembler {
            for (binding, view) in assembler.vertex_buffers().iter().enumerate() {
                unsafe {
                    self.device.cmd_bind_vertex_buffers(
                        self.handle,
                        binding as u32,
                        std::slice::from_ref(&view.handle()),
                        std::slice::from_ref(&view.offset()),
                    );
                }
            }
            if let Some(index) = assembler.index_binding() {
                unsafe {
                    self.device
                        .cmd_bind_index_buffer(self.handle, index.view.handle(), index.view.offset(), index.index_type);
                }
            }
        }

        self.bind_dynamic_state(dynamic_state);
    }

    fn draw(&mut self, info: &DrawInfo) {
        let instance_count = info.instance_count.max(1);
        unsafe {
            if info.is_indexed() {
                self.device.cmd_draw_indexed(
                    self.handle,
                    info.index_count,
                    instance_count,
                    info.first_index,
                    info.vertex_offset,
                    info.first_instance,
                );
            } else {
                self.device.cmd_draw(
                    self.handle,
                    info.vertex_count,
                    instance_count,
                    info.first_vertex,
                    info.first_instance,
                );
            }
        }
    }

    fn set_viewport(&mut self, viewport: &vk::Viewport) {
        unsafe {
            self.device
                .cmd_set_viewport(self.handle, 0, std::slice::from_ref(viewport));
        }
    }

    fn set_scissor(&mut self, scissor: &vk::Rect2D) {
        unsafe {
            self.device.cmd_set_scissor(self.handle, 0, std::slice::from_ref(scissor));
        }
    }

    fn update_buffer(&mut self, buffer: vk::Buffer, data: BufferSource<'_>, offset: vk::DeviceSize, size: vk::DeviceSize) {
        let records;
        let bytes = match data {
            BufferSource::Bytes(bytes) => bytes,
            BufferSource::Indirect(draws) => {
                let Some(packed) = indirect_records(draws) else {
                    warn!("Skipping indirect buffer update that mixes indexed and non-indexed draws.");
                    return;
                };
                records = packed;
                records.as_slice()
            }
        };

        let len = requested_len(bytes.len(), size);
        let aligned = len - len % UPDATE_ALIGNMENT;
        if aligned != len {
            warn!("Buffer update of {len} bytes is not a multiple of {UPDATE_ALIGNMENT}, only {aligned} bytes are written.");
        }
        for (dst_offset, chunk) in update_writes(&bytes[..aligned], offset) {
            unsafe {
                self.device.cmd_update_buffer(self.handle, buffer, dst_offset, chunk);
            }
        }
    }

    fn copy_buffers_to_texture(&mut self, buffers: &[BufferView], texture: vk::Image, regions: &[vk::BufferImageCopy]) {
        if buffers.len() != regions.len() {
            warn!(
                "Copy to texture with {} buffers and {} regions, only {} regions are copied.",
                buffers.len(),
                regions.len(),
                buffers.len().min(regions.len())
            );
        }
        for (src, region) in copy_regions(buffers, regions) {
            unsafe {
                self.device.cmd_copy_buffer_to_image(
                    self.handle,
                    src,
                    texture,
                    vk::ImageLayout::TRANSFER_DST_OPTIMAL,
                    std::slice::from_ref(&region),
                );
            }
        }
    }

    fn blit_texture(&mut self, src: Option<vk::Image>, dst: Option<vk::Image>, regions: &[vk::ImageBlit], filter: vk::Filter) {
        let (Some(src), Some(dst)) = (src, dst) else {
            warn!("Skipping blit between textures that are not realized yet.");
            return;
        };
        unsafe {
            self.device.cmd_blit_image(
                self.handle,
                src,
                vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
                dst,
                vk::ImageLayout::TRANSFER_DST_OPTIMAL,
                regions,
                filter,
            );
        }
    }
}

/// `vkCmdUpdateBuffer` writes at most this many bytes.
const MAX_UPDATE_SIZE: usize = 65536;
/// `vkCmdUpdateBuffer` sizes must be a multiple of this.
const UPDATE_ALIGNMENT: usize = 4;

/// Lay out draws as indirect records. Returns `None` if indexed and non-indexed draws are mixed, since one
/// indirect buffer only holds one kind of record.
fn indirect_records(draws: &[DrawInfo]) -> Option<Vec<u8>> {
    let indexed = draws.iter().filter(|draw| draw.is_indexed()).count();
    if indexed != 0 && indexed != draws.len() {
        return None;
    }

    let mut bytes = Vec::with_capacity(draws.len() * indirect_stride(draws));
    for draw in draws {
        let instance_count = draw.instance_count.max(1);
        if draw.is_indexed() {
            bytes.extend_from_slice(&draw.index_count.to_ne_bytes());
            bytes.extend_from_slice(&instance_count.to_ne_bytes());
            bytes.extend_from_slice(&draw.first_index.to_ne_bytes());
            bytes.extend_from_slice(&draw.vertex_offset.to_ne_bytes());
        } else {
            bytes.extend_from_slice(&draw.vertex_count.to_ne_bytes());
            bytes.extend_from_slice(&instance_count.to_ne_bytes());
            bytes.extend_from_slice(&draw.first_vertex.to_ne_bytes());
        }
        bytes.extend_from_slice(&draw.first_instance.to_ne_bytes());
    }
    Some(bytes)
}

/// Number of payload bytes an update writes. A `size` of zero writes the whole payload.
fn requested_len(payload: usize, size: vk::DeviceSize) -> usize {
    if size == 0 {
        payload
    } else {
        usize::try_from(size).map_or(payload, |size| payload.min(size))
    }
}

/// Split `bytes` into writes `vkCmdUpdateBuffer` accepts, each paired with its destination offset.
fn update_writes<'d>(bytes: &'d [u8], offset: vk::DeviceSize) -> impl Iterator<Item = (vk::DeviceSize, &'d [u8])> + 'd {
    bytes
        .chunks(MAX_UPDATE_SIZE)
        .enumerate()
        .map(move |(index, chunk)| (offset + (index * MAX_UPDATE_SIZE) as vk::DeviceSize, chunk))
}

/// Pair every region with the buffer it reads from. Region offsets are relative to the view.
fn copy_regions<'r>(
    buffers: &'r [BufferView],
    regions: &'r [vk::BufferImageCopy],
) -> impl Iterator<Item = (vk::Buffer, vk::BufferImageCopy)> + 'r {
    buffers.iter().zip(regions).map(|(view, region)| {
        let mut region = *region;
        region.buffer_offset += view.offset();
        (view.handle(), region)
    })
}
