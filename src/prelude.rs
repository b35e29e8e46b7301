pub use ash::vk;

pub use crate::core::device::Device;
pub use crate::core::error::Error;
pub use crate::core::settings::*;

pub use crate::state_cache::StateCache;

pub use crate::resource::buffer::*;
pub use crate::resource::pass::*;
pub use crate::resource::texture::Texture;

pub use crate::pipeline::{IndexBinding, InputAssembler, PipelineState};

pub use crate::command_buffer::traits::*;
pub use crate::command_buffer::{
    CommandBuffer, DepthBias, DepthBounds, DrawInfo, DrawSource, DynamicState, Statistics, StencilFace,
};

pub use crate::translator::vulkan::VulkanTranslator;
pub use crate::translator::CommandTranslator;

pub mod traits {
    pub use crate::command_buffer::traits::*;
    pub use crate::translator::CommandTranslator;
}
