use anyhow::Result;
use ash::vk;

use crate::command_buffer::CommandBuffer;
use crate::{
    CommandTranslator, DescriptorSet, DrawSource, Error, Framebuffer, GraphicsCmdBuffer, InputAssembler, PipelineState,
    RenderPass, Texture,
};

impl<'a, T: CommandTranslator> GraphicsCmdBuffer<'a> for CommandBuffer<'a, T> {
    fn begin_render_pass(
        &mut self,
        render_pass: &RenderPass,
        framebuffer: &Framebuffer,
        render_area: vk::Rect2D,
        clear_colors: &[vk::ClearColorValue],
        clear_depth: f32,
        clear_stencil: u32,
    ) {
        if self.recording.in_render_pass {
            warn!("[{}] Beginning a render pass while another one is still active.", self.device.name());
        }

        #[cfg(feature = "log-commands")]
        trace!("begin_render_pass(pass = {:?}, framebuffer = {:?}, area = {:?})", render_pass.handle(), framebuffer.handle(), render_area);

        self.device.translator_mut().begin_render_pass(
            render_pass.handle(),
            framebuffer.handle(),
            render_area,
            clear_colors,
            clear_depth,
            clear_stencil,
        );
        self.recording.in_render_pass = true;
        self.recording.render_area = render_area;
    }

    fn end_render_pass(&mut self) -> Result<()> {
        if !self.recording.in_render_pass {
            return Err(self.sequencing_error(Error::NoActiveRenderPass));
        }

        #[cfg(feature = "log-commands")]
        trace!("end_render_pass()");

        self.device.translator_mut().end_render_pass();
        self.recording.in_render_pass = false;
        self.recording.render_area = vk::Rect2D::default();
        Ok(())
    }

    fn bind_pipeline_state(&mut self, pipeline: &'a PipelineState) {
        if !self.bound.pipeline.map_or(false, |bound| std::ptr::eq(bound, pipeline)) {
            self.bound.pipeline = Some(pipeline);
            self.mark_dirty();
        }
    }

    fn bind_input_assembler(&mut self, input_assembler: &'a InputAssembler) {
        if !self.bound.input_assembler.map_or(false, |bound| std::ptr::eq(bound, input_assembler)) {
            self.bound.input_assembler = Some(input_assembler);
            self.mark_dirty();
        }
    }

    fn bind_descriptor_set(&mut self, set: u32, descriptor_set: &'a DescriptorSet, dynamic_offsets: &[u32]) {
        if self.bound.bind_descriptor_set(set as usize, descriptor_set, dynamic_offsets) {
            self.mark_dirty();
        }
    }

    fn set_viewport(&mut self, viewport: vk::Viewport) {
        let changed = self.device.state_cache_mut().replace_viewport(&viewport);
        if changed || !self.device.settings().elide_redundant_state {
            #[cfg(feature = "log-commands")]
            trace!("set_viewport({:?})", viewport);

            self.device.translator_mut().set_viewport(&viewport);
        }
    }

    fn set_scissor(&mut self, scissor: vk::Rect2D) {
        let changed = self.device.state_cache_mut().replace_scissor(&scissor);
        if changed || !self.device.settings().elide_redundant_state {
            #[cfg(feature = "log-commands")]
            trace!("set_scissor({:?})", scissor);

            self.device.translator_mut().set_scissor(&scissor);
        }
    }

    fn full_viewport_scissor(&mut self) {
        let area = self.recording.render_area;
        self.set_viewport(vk::Viewport {
            x: area.offset.x as f32,
            y: area.offset.y as f32,
            width: area.extent.width as f32,
            height: area.extent.height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        });
        self.set_scissor(area);
    }

    fn set_line_width(&mut self, line_width: f32) {
        if self.bound.dynamic_state.line_width != line_width {
            self.bound.dynamic_state.line_width = line_width;
            self.mark_dirty();
        }
    }

    fn set_depth_bias(&mut self, constant: f32, clamp: f32, slope: f32) {
        let bias = &mut self.bound.dynamic_state.depth_bias;
        if bias.constant != constant || bias.clamp != clamp || bias.slope != slope {
            bias.constant = constant;
            bias.clamp = clamp;
            bias.slope = slope;
            self.mark_dirty();
        }
    }

    fn set_blend_constants(&mut self, constants: [f32; 4]) {
        if self.bound.dynamic_state.blend_constants != constants {
            self.bound.dynamic_state.blend_constants = constants;
            self.mark_dirty();
        }
    }

    fn set_depth_bound(&mut self, min: f32, max: f32) {
        let bounds = &mut self.bound.dynamic_state.depth_bounds;
        if bounds.min != min || bounds.max != max {
            bounds.min = min;
            bounds.max = max;
            self.mark_dirty();
        }
    }

    fn set_stencil_write_mask(&mut self, face: vk::StencilFaceFlags, mask: u32) {
        if self.bound.dynamic_state.update_stencil(face, |state| state.write_mask = mask) {
            self.mark_dirty();
        }
    }

    fn set_stencil_compare_mask(&mut self, face: vk::StencilFaceFlags, reference: u32, mask: u32) {
        let changed = self.bound.dynamic_state.update_stencil(face, |state| {
            state.reference = reference;
            state.compare_mask = mask;
        });
        if changed {
            self.mark_dirty();
        }
    }

    #[inline]
    fn draw<'d>(&mut self, source: impl Into<DrawSource<'d>>) -> Result<()> {
        if !self.recording.in_render_pass {
            return Err(self.sequencing_error(Error::DrawOutsideRenderPass));
        }

        self.ensure_bound_state();
        let info = source.into().resolve();

        #[cfg(feature = "log-commands")]
        trace!("draw({:?})", info);

        self.device.translator_mut().draw(&info);
        if self.device.settings().statistics {
            let topology = self.bound.pipeline.map(PipelineState::topology);
            self.statistics.record_draw(&info, topology);
        }
        Ok(())
    }

    fn blit_texture(&mut self, src: &Texture, dst: &Texture, regions: &[vk::ImageBlit], filter: vk::Filter) {
        #[cfg(feature = "log-commands")]
        trace!("blit_texture(src = {:?}, dst = {:?}, regions = {})", src.handle(), dst.handle(), regions.len());

        self.device
            .translator_mut()
            .blit_texture(src.handle(), dst.handle(), regions, filter);
    }
}
