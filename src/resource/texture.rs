//! Wrapper for `VkImage` handles used as textures.

use ash::vk;

/// Texture description with an optional native handle. Copies and blits targeting a texture without a handle are
/// dropped by the command buffer.
#[derive(Debug, Clone)]
pub struct Texture {
    handle: Option<vk::Image>,
    format: vk::Format,
    /// Size of the texture. For 2D textures, `size.depth == 1`.
    size: vk::Extent3D,
    aspect: vk::ImageAspectFlags,
}

impl Texture {
    /// Describe a texture that already has a native handle.
    pub fn new(handle: vk::Image, format: vk::Format, size: vk::Extent3D) -> Self {
        Self {
            handle: Some(handle),
            format,
            size,
            aspect: aspect_of(format),
        }
    }

    /// Describe a texture whose native handle will be created later.
    pub fn unrealized(format: vk::Format, size: vk::Extent3D) -> Self {
        Self {
            handle: None,
            format,
            size,
            aspect: aspect_of(format),
        }
    }

    /// Attach the native handle once the resource layer created it.
    pub fn realize(&mut self, handle: vk::Image) {
        self.handle = Some(handle);
    }

    /// The native handle, or `None` if the texture was not realized yet.
    pub fn handle(&self) -> Option<vk::Image> {
        self.handle
    }

    /// Get the format of this texture.
    pub fn format(&self) -> vk::Format {
        self.format
    }

    /// Get the size of this texture.
    pub fn size(&self) -> vk::Extent3D {
        self.size
    }

    /// Get the image aspect derived from the format.
    pub fn aspect(&self) -> vk::ImageAspectFlags {
        self.aspect
    }

    /// Subresource layers covering one mip level of every array layer.
    pub fn subresource_layers(&self, mip_level: u32) -> vk::ImageSubresourceLayers {
        vk::ImageSubresourceLayers {
            aspect_mask: self.aspect,
            mip_level,
            base_array_layer: 0,
            layer_count: 1,
        }
    }
}

fn aspect_of(format: vk::Format) -> vk::ImageAspectFlags {
    match format {
        vk::Format::D16_UNORM | vk::Format::D32_SFLOAT | vk::Format::X8_D24_UNORM_PACK32 => vk::ImageAspectFlags::DEPTH,
        vk::Format::S8_UINT => vk::ImageAspectFlags::STENCIL,
        vk::Format::D16_UNORM_S8_UINT | vk::Format::D24_UNORM_S8_UINT | vk::Format::D32_SFLOAT_S8_UINT => {
            vk::ImageAspectFlags::DEPTH | vk::ImageAspectFlags::STENCIL
        }
        _ => vk::ImageAspectFlags::COLOR,
    }
}
