//! Primary command buffer recording on top of an immediate-mode native context.
//!
//! Grafos accepts a sequence of rendering commands (begin a render pass, bind pipeline state, set viewport and scissor,
//! update buffers, upload textures, draw, blit) and translates them into calls against a native context, while tracking
//! enough state to
//! - reject commands that are illegal inside or outside of a render pass,
//! - avoid redundant state changes against the driver,
//! - accumulate per-recording draw statistics.
//!
//! Everything needed for recording lives in the prelude:
//! ```
//! // Only the command buffer and translator traits.
//! use grafos::prelude::traits;
//! // All types, kept behind a short namespace.
//! use grafos::prelude as gr;
//!
//! // Or everything at once.
//! use grafos::prelude::*;
//! ```
//!
//! # Example
//!
//! A [`Device`] owns the native context, represented by a [`CommandTranslator`], and the fixed-function
//! [`StateCache`] shared by every command buffer recording on it.
//! ```no_run
//! use grafos::prelude::*;
//! # fn run(ash_device: ash::Device, handle: vk::CommandBuffer, pass: RenderPass, fb: Framebuffer, pipeline: PipelineState, assembler: InputAssembler) -> anyhow::Result<()> {
//! let mut translator = VulkanTranslator::new(ash_device);
//! translator.set_command_buffer(handle);
//! let device = Device::new(translator, DeviceBuilder::new().name("main").build());
//!
//! let mut cmd = CommandBuffer::new(device.clone());
//! cmd.begin();
//! cmd.begin_render_pass(&pass, &fb, fb.full_area(), &[vk::ClearColorValue::default()], 1.0, 0);
//! cmd.full_viewport_scissor();
//! cmd.bind_pipeline_state(&pipeline);
//! cmd.bind_input_assembler(&assembler);
//! // Pipeline and input assembler are bound here, right before the draw.
//! cmd.draw(&assembler)?;
//! cmd.end_render_pass()?;
//! cmd.end()?;
//! println!("{:?}", cmd.statistics());
//! # Ok(())
//! # }
//! ```
//! Module level documentation covers the details:
//! - [`command_buffer`] for recording commands.
//! - [`translator`] for the native command translation.
//! - [`state_cache`] for cached fixed-function state.
//! - [`resource`] and [`pipeline`] for the objects commands refer to.

#[macro_use]
extern crate derivative;
#[macro_use]
extern crate log;

pub mod prelude;
pub use crate::prelude::*;

pub mod command_buffer;
pub mod core;
pub mod pipeline;
pub mod resource;
pub mod state_cache;
pub mod translator;
