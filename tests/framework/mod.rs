#![allow(dead_code)]

use ash::vk;
use ash::vk::Handle;

use grafos::{
    BufferSource, BufferView, CommandBuffer, CommandTranslator, DescriptorSet, Device, DeviceBuilder, DeviceSettings,
    DrawInfo, DynamicState, Framebuffer, GraphicsCmdBuffer, InputAssembler, PipelineState, RenderPass,
};

/// A single call that reached the translator.
#[derive(Debug, Clone)]
pub enum Call {
    BeginRenderPass {
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: usize,
        clear_depth: f32,
        clear_stencil: u32,
    },
    EndRenderPass,
    BindStates {
        pipeline: Option<vk::Pipeline>,
        input_assembler: Option<DrawInfo>,
        descriptor_sets: Vec<Option<vk::DescriptorSet>>,
        dynamic_offsets: Vec<Vec<u32>>,
        dynamic_state: DynamicState,
    },
    Draw(DrawInfo),
    SetViewport(vk::Viewport),
    SetScissor(vk::Rect2D),
    UpdateBuffer {
        buffer: vk::Buffer,
        indirect: bool,
        payload_len: u64,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
    },
    CopyBuffersToTexture {
        buffers: Vec<BufferView>,
        texture: vk::Image,
        regions: usize,
    },
    BlitTexture {
        src: Option<vk::Image>,
        dst: Option<vk::Image>,
        regions: usize,
        filter: vk::Filter,
    },
}

/// Translator that records every call instead of issuing native commands.
#[derive(Debug, Default)]
pub struct MockTranslator {
    pub calls: Vec<Call>,
}

impl MockTranslator {
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }

    pub fn draws(&self) -> usize {
        self.count(|call| matches!(call, Call::Draw(_)))
    }

    pub fn binds(&self) -> usize {
        self.count(|call| matches!(call, Call::BindStates { .. }))
    }

    pub fn viewports(&self) -> usize {
        self.count(|call| matches!(call, Call::SetViewport(_)))
    }

    pub fn scissors(&self) -> usize {
        self.count(|call| matches!(call, Call::SetScissor(_)))
    }
}

impl CommandTranslator for MockTranslator {
    fn begin_render_pass(
        &mut self,
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: &[vk::ClearColorValue],
        clear_depth: f32,
        clear_stencil: u32,
    ) {
        self.calls.push(Call::BeginRenderPass {
            render_pass,
            framebuffer,
            render_area,
            clear_colors: clear_colors.len(),
            clear_depth,
            clear_stencil,
        });
    }

    fn end_render_pass(&mut self) {
        self.calls.push(Call::EndRenderPass);
    }

    fn bind_states(
        &mut self,
        pipeline: Option<&PipelineState>,
        input_assembler: Option<&InputAssembler>,
        descriptor_sets: &[Option<&DescriptorSet>],
        dynamic_offsets: &[Vec<u32>],
        dynamic_state: &DynamicState,
    ) {
        self.calls.push(Call::BindStates {
            pipeline: pipeline.map(PipelineState::handle),
            input_assembler: input_assembler.map(InputAssembler::draw_info),
            descriptor_sets: descriptor_sets.iter().map(|set| set.map(DescriptorSet::handle)).collect(),
            dynamic_offsets: dynamic_offsets.to_vec(),
            dynamic_state: *dynamic_state,
        });
    }

    fn draw(&mut self, info: &DrawInfo) {
        self.calls.push(Call::Draw(*info));
    }

    fn set_viewport(&mut self, viewport: &vk::Viewport) {
        self.calls.push(Call::SetViewport(*viewport));
    }

    fn set_scissor(&mut self, scissor: &vk::Rect2D) {
        self.calls.push(Call::SetScissor(*scissor));
    }

    fn update_buffer(&mut self, buffer: vk::Buffer, data: BufferSource<'_>, offset: vk::DeviceSize, size: vk::DeviceSize) {
        self.calls.push(Call::UpdateBuffer {
            buffer,
            indirect: matches!(data, BufferSource::Indirect(_)),
            payload_len: data.byte_len(),
            offset,
            size,
        });
    }

    fn copy_buffers_to_texture(&mut self, buffers: &[BufferView], texture: vk::Image, regions: &[vk::BufferImageCopy]) {
        self.calls.push(Call::CopyBuffersToTexture {
            buffers: buffers.to_vec(),
            texture,
            regions: regions.len(),
        });
    }

    fn blit_texture(&mut self, src: Option<vk::Image>, dst: Option<vk::Image>, regions: &[vk::ImageBlit], filter: vk::Filter) {
        self.calls.push(Call::BlitTexture {
            src,
            dst,
            regions: regions.len(),
            filter,
        });
    }
}

pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

/// Creates a device around a fresh mock translator.
pub fn make_device() -> Device<MockTranslator> {
    make_device_with_settings(|builder| builder)
}

pub fn make_device_with_settings<F: FnOnce(DeviceBuilder) -> DeviceBuilder>(callback: F) -> Device<MockTranslator> {
    init_logging();
    let settings: DeviceSettings = callback(DeviceBuilder::new().name("grafos test framework")).build();
    Device::new(MockTranslator::default(), settings)
}

pub fn handle<H: Handle>(raw: u64) -> H {
    H::from_raw(raw)
}

pub fn render_pass() -> RenderPass {
    RenderPass::new(handle(10), 1, true)
}

pub fn framebuffer() -> Framebuffer {
    Framebuffer::new(
        handle(20),
        vk::Extent2D {
            width: 800,
            height: 600,
        },
    )
}

pub fn pipeline(raw: u64, topology: vk::PrimitiveTopology) -> PipelineState {
    PipelineState::graphics(handle(raw), handle(raw + 1000), topology)
}

pub fn rect(x: i32, y: i32, width: u32, height: u32) -> vk::Rect2D {
    vk::Rect2D {
        offset: vk::Offset2D {
            x,
            y,
        },
        extent: vk::Extent2D {
            width,
            height,
        },
    }
}

pub fn viewport(width: f32, height: f32) -> vk::Viewport {
    vk::Viewport {
        x: 0.0,
        y: 0.0,
        width,
        height,
        min_depth: 0.0,
        max_depth: 1.0,
    }
}

/// Begin a render pass over the whole test framebuffer.
pub fn begin_pass<T: CommandTranslator>(cmd: &mut CommandBuffer<'_, T>) {
    let fb = framebuffer();
    cmd.begin_render_pass(&render_pass(), &fb, fb.full_area(), &[vk::ClearColorValue::default()], 1.0, 0);
}
