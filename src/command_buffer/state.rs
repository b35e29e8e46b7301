use ash::vk;

use crate::{DescriptorSet, InputAssembler, PipelineState};

/// Number of descriptor set slots reserved up front, so binding sets does not allocate in the common case.
const RESERVED_DESCRIPTOR_SETS: usize = 4;

#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct RecordingState {
    pub in_render_pass: bool,
    pub state_dirty: bool,
    pub render_area: vk::Rect2D,
}

/// Depth bias parameters, see [`vkCmdSetDepthBias`](https://registry.khronos.org/vulkan/specs/1.3-extensions/man/html/vkCmdSetDepthBias.html).
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct DepthBias {
    pub constant: f32,
    pub clamp: f32,
    pub slope: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for DepthBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
        }
    }
}

/// Dynamic stencil state of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StencilFace {
    pub write_mask: u32,
    pub compare_mask: u32,
    pub reference: u32,
}

impl Default for StencilFace {
    fn default() -> Self {
        Self {
            write_mask: 0xff,
            compare_mask: 0xff,
            reference: 0,
        }
    }
}

/// Dynamic pipeline state that is not baked into pipeline state objects.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DynamicState {
    pub line_width: f32,
    pub depth_bias: DepthBias,
    pub blend_constants: [f32; 4],
    pub depth_bounds: DepthBounds,
    pub stencil_front: StencilFace,
    pub stencil_back: StencilFace,
}

impl Default for DynamicState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            depth_bias: DepthBias::default(),
            blend_constants: [0.0; 4],
            depth_bounds: DepthBounds::default(),
            stencil_front: StencilFace::default(),
            stencil_back: StencilFace::default(),
        }
    }
}

impl DynamicState {
    /// Apply `f` to every stencil face selected by `face`. Returns true if any face changed.
    pub(crate) fn update_stencil(&mut self, face: vk::StencilFaceFlags, f: impl Fn(&mut StencilFace)) -> bool {
        let mut changed = false;
        for (flag, state) in [
            (vk::StencilFaceFlags::FRONT, &mut self.stencil_front),
            (vk::StencilFaceFlags::BACK, &mut self.stencil_back),
        ] {
            if face.contains(flag) {
                let old = *state;
                f(state);
                changed |= old != *state;
            }
        }
        changed
    }
}

/// Everything bound since the last flush. All references are borrowed, the command buffer never extends the
/// lifetime of a bound object.
#[derive(Debug)]
pub(crate) struct BoundState<'a> {
    pub pipeline: Option<&'a PipelineState>,
    pub input_assembler: Option<&'a InputAssembler>,
    pub descriptor_sets: Vec<Option<&'a DescriptorSet>>,
    pub dynamic_offsets: Vec<Vec<u32>>,
    pub dynamic_state: DynamicState,
}

impl Default for BoundState<'_> {
    fn default() -> Self {
        Self {
            pipeline: None,
            input_assembler: None,
            descriptor_sets: Vec::with_capacity(RESERVED_DESCRIPTOR_SETS),
            dynamic_offsets: Vec::with_capacity(RESERVED_DESCRIPTOR_SETS),
            dynamic_state: DynamicState::default(),
        }
    }
}

impl<'a> BoundState<'a> {
    /// Forget all bindings, keeping allocated storage.
    pub fn clear(&mut self) {
        self.pipeline = None;
        self.input_assembler = None;
        self.descriptor_sets.clear();
        self.dynamic_offsets.clear();
        self.dynamic_state = DynamicState::default();
    }

    /// Store a descriptor set binding. Returns true if the set or its dynamic offsets changed.
    pub fn bind_descriptor_set(&mut self, index: usize, set: &'a DescriptorSet, dynamic_offsets: &[u32]) -> bool {
        if self.descriptor_sets.len() <= index {
            self.descriptor_sets.resize(index + 1, None);
            self.dynamic_offsets.resize_with(index + 1, Vec::new);
        }

        let mut changed = false;
        let slot = &mut self.descriptor_sets[index];
        if !slot.map_or(false, |bound| std::ptr::eq(bound, set)) {
            *slot = Some(set);
            changed = true;
        }

        let offsets = &mut self.dynamic_offsets[index];
        if offsets.as_slice() != dynamic_offsets {
            offsets.clear();
            offsets.extend_from_slice(dynamic_offsets);
            changed = true;
        }
        changed
    }
}
