//! Pipeline state and input assembler objects, as seen by the command buffer.
//!
//! Pipelines are compiled by the resource layer. The command buffer only needs the native handles to bind them, and the
//! [primitive topology](vk::PrimitiveTopology) to count triangles.
//!
//! # Example
//! ```
//! use grafos::prelude::*;
//! use ash::vk::Handle;
//!
//! let vertices = Buffer::new(vk::Buffer::from_raw(1), vk::BufferUsageFlags::VERTEX_BUFFER, 1024u64);
//! let indices = Buffer::new(vk::Buffer::from_raw(2), vk::BufferUsageFlags::INDEX_BUFFER, 256u64);
//! let assembler = InputAssembler::new()
//!     .vertex_buffer(vertices.view_full().unwrap())
//!     .index_buffer(indices.view_full().unwrap(), vk::IndexType::UINT16)
//!     .with_draw_info(DrawInfo::indexed(36));
//! assert_eq!(assembler.draw_info().index_count, 36);
//! ```

use ash::vk;

use crate::command_buffer::DrawInfo;
use crate::BufferView;

/// A compiled pipeline and the state the command buffer needs to know about it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PipelineState {
    handle: vk::Pipeline,
    layout: vk::PipelineLayout,
    bind_point: vk::PipelineBindPoint,
    topology: vk::PrimitiveTopology,
}

impl PipelineState {
    /// Describe a graphics pipeline.
    pub fn graphics(handle: vk::Pipeline, layout: vk::PipelineLayout, topology: vk::PrimitiveTopology) -> Self {
        Self {
            handle,
            layout,
            bind_point: vk::PipelineBindPoint::GRAPHICS,
            topology,
        }
    }

    /// Get the native pipeline handle.
    pub fn handle(&self) -> vk::Pipeline {
        self.handle
    }

    /// Get the pipeline layout, used to bind descriptor sets.
    pub fn layout(&self) -> vk::PipelineLayout {
        self.layout
    }

    pub fn bind_point(&self) -> vk::PipelineBindPoint {
        self.bind_point
    }

    /// Primitive topology the pipeline assembles vertices with.
    pub fn topology(&self) -> vk::PrimitiveTopology {
        self.topology
    }
}

/// Index buffer binding of an [`InputAssembler`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndexBinding {
    pub view: BufferView,
    pub index_type: vk::IndexType,
}

/// Vertex and index buffers used by draws, together with the draw parameters that cover them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct InputAssembler {
    vertex_buffers: Vec<BufferView>,
    index_buffer: Option<IndexBinding>,
    draw_info: DrawInfo,
}

impl InputAssembler {
    /// Create an empty input assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex buffer. Buffers are bound to consecutive bindings in the order they were added.
    pub fn vertex_buffer(mut self, view: BufferView) -> Self {
        self.vertex_buffers.push(view);
        self
    }

    /// Set the index buffer.
    pub fn index_buffer(mut self, view: BufferView, index_type: vk::IndexType) -> Self {
        self.index_buffer = Some(IndexBinding {
            view,
            index_type,
        });
        self
    }

    /// Set the draw parameters used when drawing this input assembler directly.
    pub fn with_draw_info(mut self, info: DrawInfo) -> Self {
        self.draw_info = info;
        self
    }

    /// Change the draw parameters in place.
    pub fn set_draw_info(&mut self, info: DrawInfo) {
        self.draw_info = info;
    }

    /// Get all vertex buffer views.
    pub fn vertex_buffers(&self) -> &[BufferView] {
        &self.vertex_buffers
    }

    /// Get the index buffer binding, if any.
    pub fn index_binding(&self) -> Option<&IndexBinding> {
        self.index_buffer.as_ref()
    }

    /// Get the draw parameters of this input assembler.
    pub fn draw_info(&self) -> DrawInfo {
        self.draw_info
    }
}
