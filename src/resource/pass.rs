//! Render pass, framebuffer and descriptor set handles.
//!
//! These are always realized by the time a command buffer sees them, so they expose their native handle directly.

use ash::vk;

/// Wrapper around a [`VkRenderPass`](vk::RenderPass).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RenderPass {
    handle: vk::RenderPass,
    color_attachments: u32,
    has_depth_stencil: bool,
}

impl RenderPass {
    /// Describe a render pass with the given number of color attachments.
    pub fn new(handle: vk::RenderPass, color_attachments: u32, has_depth_stencil: bool) -> Self {
        Self {
            handle,
            color_attachments,
            has_depth_stencil,
        }
    }

    /// Get the native render pass handle.
    pub fn handle(&self) -> vk::RenderPass {
        self.handle
    }

    /// Number of color attachments.
    pub fn color_attachments(&self) -> u32 {
        self.color_attachments
    }

    /// Whether the pass has a depth-stencil attachment.
    pub fn has_depth_stencil(&self) -> bool {
        self.has_depth_stencil
    }
}

/// Wrapper around a [`VkFramebuffer`](vk::Framebuffer).
#[derive(Debug, Copy, Clone)]
pub struct Framebuffer {
    handle: vk::Framebuffer,
    extent: vk::Extent2D,
}

impl Framebuffer {
    pub fn new(handle: vk::Framebuffer, extent: vk::Extent2D) -> Self {
        Self {
            handle,
            extent,
        }
    }

    /// Get the native framebuffer handle.
    pub fn handle(&self) -> vk::Framebuffer {
        self.handle
    }

    pub fn extent(&self) -> vk::Extent2D {
        self.extent
    }

    /// Rectangle covering the whole framebuffer.
    pub fn full_area(&self) -> vk::Rect2D {
        vk::Rect2D {
            offset: vk::Offset2D::default(),
            extent: self.extent,
        }
    }
}

/// Wrapper around a [`VkDescriptorSet`](vk::DescriptorSet).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorSet {
    handle: vk::DescriptorSet,
}

impl DescriptorSet {
    pub fn new(handle: vk::DescriptorSet) -> Self {
        Self {
            handle,
        }
    }

    /// Get the native descriptor set handle.
    pub fn handle(&self) -> vk::DescriptorSet {
        self.handle
    }
}
