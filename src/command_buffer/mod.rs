//! The primary command buffer and its recording state.
//!
//! # Render pass state
//!
//! A command buffer is either inside or outside of a render pass. Draws are only legal inside a render pass, buffer
//! updates and texture uploads only outside of one. Calls made in the wrong state are dropped: they report an
//! [`Error`] through the log and the returned `Result`, and recording simply continues.
//!
//! # Deferred binding
//!
//! Pipeline state, input assembler, descriptor sets and dynamic state are not bound when their `bind_xxx` or `set_xxx`
//! function is called. Instead, the command buffer remembers them and marks its state dirty. The next `draw()` flushes
//! everything in one [`CommandTranslator::bind_states`] call. Binding the same object twice, or setting a value that is
//! already set, does not dirty the state.
//!
//! # Commands
//! All commands are implemented through traits. These are all defined inside the [`traits`] module, and are most easily
//! imported through the [`prelude`](crate::prelude).
//!
//! # Example
//! ```
//! use grafos::prelude::*;
//! # use anyhow::Result;
//! # fn record<T: CommandTranslator>(device: Device<T>, pass: &RenderPass, fb: &Framebuffer, pipeline: &PipelineState) -> Result<()> {
//! let mut cmd = CommandBuffer::new(device);
//! cmd.begin();
//! cmd.begin_render_pass(pass, fb, fb.full_area(), &[vk::ClearColorValue::default()], 1.0, 0);
//! cmd.full_viewport_scissor();
//! cmd.bind_pipeline_state(pipeline);
//! cmd.draw(DrawInfo::vertices(3))?;
//! cmd.end_render_pass()?;
//! cmd.end()?;
//! assert_eq!(cmd.statistics().draw_calls, 1);
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

use crate::command_buffer::state::{BoundState, RecordingState};
use crate::{CmdBuffer, CommandTranslator, Device, Error};

pub use draw_info::{DrawInfo, DrawSource};
pub use state::{DepthBias, DepthBounds, DynamicState, StencilFace};
pub use statistics::Statistics;

pub mod draw_info;
pub mod graphics;
pub mod statistics;
pub mod traits;
pub mod transfer;

pub(crate) mod state;

/// Command buffer that records directly into the native context of its [`Device`].
///
/// This is the primary command buffer variant. It does not support executing other command buffers.
///
/// Bound objects are borrowed for `'a`. The command buffer never extends their lifetime, and they must outlive the
/// command buffer's use of them.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct CommandBuffer<'a, T: CommandTranslator> {
    #[derivative(Debug = "ignore")]
    device: Device<T>,
    recording: RecordingState,
    bound: BoundState<'a>,
    statistics: Statistics,
}

impl<'a, T: CommandTranslator> CommandBuffer<'a, T> {
    /// Create a command buffer recording against `device`.
    pub fn new(device: Device<T>) -> Self {
        Self {
            device,
            recording: RecordingState::default(),
            bound: BoundState::default(),
            statistics: Statistics::default(),
        }
    }

    /// Get the device this command buffer records against.
    pub fn device(&self) -> &Device<T> {
        &self.device
    }

    /// Whether bound state changed since the last draw.
    pub fn is_state_dirty(&self) -> bool {
        self.recording.state_dirty
    }

    fn mark_dirty(&mut self) {
        self.recording.state_dirty = true;
    }

    /// Push everything bound since the last flush to the translator. Does nothing if the state is clean.
    #[inline]
    fn ensure_bound_state(&mut self) {
        if !self.recording.state_dirty {
            return;
        }

        #[cfg(feature = "log-commands")]
        trace!("bind_states(pipeline = {:?}, sets = {})", self.bound.pipeline.map(|p| p.handle()), self.bound.descriptor_sets.len());

        let bound = &self.bound;
        self.device.translator_mut().bind_states(
            bound.pipeline,
            bound.input_assembler,
            &bound.descriptor_sets,
            &bound.dynamic_offsets,
            &bound.dynamic_state,
        );
        self.recording.state_dirty = false;
    }

    /// Report a call made in the wrong render pass state, and hand back the error for the caller.
    #[cold]
    fn sequencing_error(&self, error: Error) -> anyhow::Error {
        error!("[{}] {} (code {})", self.device.name(), error, error.code());
        error.into()
    }
}

impl<T: CommandTranslator> CmdBuffer for CommandBuffer<'_, T> {
    fn begin(&mut self) {
        if self.recording.in_render_pass {
            warn!("[{}] Restarting recording while a render pass is active.", self.device.name());
        }
        self.recording = RecordingState::default();
        self.bound.clear();
        self.statistics.reset();
        debug!("[{}] Begin recording", self.device.name());
    }

    fn end(&mut self) -> Result<()> {
        if self.recording.in_render_pass {
            return Err(self.sequencing_error(Error::RenderPassNotEnded));
        }
        debug!(
            "[{}] End recording: {} draws, {} instances, {} triangles",
            self.device.name(),
            self.statistics.draw_calls,
            self.statistics.instances,
            self.statistics.triangles
        );
        Ok(())
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn in_render_pass(&self) -> bool {
        self.recording.in_render_pass
    }

    fn execute(&mut self, _buffers: &[&Self], count: u32) -> Result<()> {
        error!("[{}] Cannot execute {count} command buffers: {}", self.device.name(), Error::ExecuteUnsupported);
        Err(Error::ExecuteUnsupported.into())
    }
}
