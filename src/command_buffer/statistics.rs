use ash::vk;

use crate::command_buffer::DrawInfo;

/// Per-recording draw statistics. All counters only grow between two calls to
/// [`CmdBuffer::begin`](crate::CmdBuffer::begin).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Statistics {
    /// Number of draw calls that reached the native context.
    pub draw_calls: u64,
    /// Sum of the instance counts of all draws. Non-instanced draws add zero.
    pub instances: u64,
    /// Number of triangles submitted, derived from the bound pipeline's topology.
    pub triangles: u64,
}

impl Statistics {
    /// Account for a submitted draw. Without a bound pipeline the topology is unknown, so only the draw
    /// itself is counted.
    #[inline]
    pub(crate) fn record_draw(&mut self, info: &DrawInfo, topology: Option<vk::PrimitiveTopology>) {
        self.draw_calls += 1;
        self.instances += info.instance_count as u64;
        if let Some(topology) = topology {
            self.triangles += info.triangle_count(topology);
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
