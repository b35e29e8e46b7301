use std::mem::size_of;

use ash::vk;

use crate::InputAssembler;

/// Parameters of a single draw call.
///
/// A non-zero `index_count` makes this an indexed draw. An `instance_count` of zero means a non-instanced draw, and is
/// submitted as a single instance.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DrawInfo {
    pub vertex_count: u32,
    pub first_vertex: u32,
    pub index_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub instance_count: u32,
    pub first_instance: u32,
}

impl DrawInfo {
    /// Non-indexed draw of `vertex_count` vertices.
    pub fn vertices(vertex_count: u32) -> Self {
        Self {
            vertex_count,
            ..Default::default()
        }
    }

    /// Indexed draw of `index_count` indices.
    pub fn indexed(index_count: u32) -> Self {
        Self {
            index_count,
            ..Default::default()
        }
    }

    /// Draw `instance_count` instances.
    pub fn instanced(mut self, instance_count: u32) -> Self {
        self.instance_count = instance_count;
        self
    }

    /// True if this draw reads from the index buffer.
    pub fn is_indexed(&self) -> bool {
        self.index_count > 0
    }

    /// Number of vertices assembled into primitives: the index count for indexed draws, the vertex count otherwise.
    pub fn element_count(&self) -> u32 {
        if self.index_count > 0 {
            self.index_count
        } else {
            self.vertex_count
        }
    }

    /// Number of triangles this draw produces with the given topology. Topologies that do not produce
    /// triangles count zero.
    pub fn triangle_count(&self, topology: vk::PrimitiveTopology) -> u64 {
        let count = self.element_count() as u64;
        let instances = self.instance_count.max(1) as u64;
        match topology {
            vk::PrimitiveTopology::TRIANGLE_LIST => count / 3 * instances,
            vk::PrimitiveTopology::TRIANGLE_STRIP | vk::PrimitiveTopology::TRIANGLE_FAN => {
                count.saturating_sub(2) * instances
            }
            _ => 0,
        }
    }
}

/// Size of one indirect record for a batch of draws. A batch containing an indexed draw is laid out as
/// `VkDrawIndexedIndirectCommand` records, any other batch as `VkDrawIndirectCommand` records.
pub fn indirect_stride(draws: &[DrawInfo]) -> usize {
    if draws.iter().any(DrawInfo::is_indexed) {
        size_of::<vk::DrawIndexedIndirectCommand>()
    } else {
        size_of::<vk::DrawIndirectCommand>()
    }
}

/// What a draw call takes its parameters from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrawSource<'d> {
    /// Explicit draw parameters.
    Info(DrawInfo),
    /// The draw parameters stored in an input assembler.
    Assembler(&'d InputAssembler),
}

impl DrawSource<'_> {
    /// Resolve to concrete draw parameters.
    pub fn resolve(&self) -> DrawInfo {
        match self {
            DrawSource::Info(info) => *info,
            DrawSource::Assembler(assembler) => assembler.draw_info(),
        }
    }
}

impl From<DrawInfo> for DrawSource<'_> {
    fn from(value: DrawInfo) -> Self {
        DrawSource::Info(value)
    }
}

impl<'d> From<&'d DrawInfo> for DrawSource<'d> {
    fn from(value: &'d DrawInfo) -> Self {
        DrawSource::Info(*value)
    }
}

impl<'d> From<&'d InputAssembler> for DrawSource<'d> {
    fn from(value: &'d InputAssembler) -> Self {
        DrawSource::Assembler(value)
    }
}
