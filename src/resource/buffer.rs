//! Wrappers for `VkBuffer` handles.
//!
//! This module exposes two types: [`Buffer`] and [`BufferView`]. A [`Buffer`] describes a buffer owned by the resource
//! layer. Its native handle may not exist yet, in which case commands targeting it are silently dropped. A [`BufferView`]
//! is a resolved range of a realized buffer. It can be freely copied around as long as the owning buffer lives.
//!
//! # Example
//!
//! ```
//! use grafos::prelude::*;
//! use ash::vk::Handle;
//!
//! let mut buffer = Buffer::unrealized(vk::BufferUsageFlags::VERTEX_BUFFER, 256u64);
//! assert!(buffer.view_full().is_err());
//!
//! buffer.realize(vk::Buffer::from_raw(1));
//! let view = buffer.view(128u64, 128u64).unwrap();
//! assert_eq!(view.offset(), 128);
//! ```

use anyhow::Result;
use ash::vk;

use crate::command_buffer::draw_info::indirect_stride;
use crate::command_buffer::DrawInfo;
use crate::Error;

/// Buffer description with an optional native handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Buffer {
    handle: Option<vk::Buffer>,
    usage: vk::BufferUsageFlags,
    size: vk::DeviceSize,
}

/// View into a specific offset and range of a realized [`Buffer`].
/// Care should be taken with the lifetime of this, as there is no checking that the buffer
/// is not destroyed while using this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BufferView {
    handle: vk::Buffer,
    offset: vk::DeviceSize,
    size: vk::DeviceSize,
}

impl Buffer {
    /// Describe a buffer that already has a native handle.
    pub fn new(handle: vk::Buffer, usage: vk::BufferUsageFlags, size: impl Into<vk::DeviceSize>) -> Self {
        Self {
            handle: Some(handle),
            usage,
            size: size.into(),
        }
    }

    /// Describe a buffer whose native handle will be created later.
    pub fn unrealized(usage: vk::BufferUsageFlags, size: impl Into<vk::DeviceSize>) -> Self {
        Self {
            handle: None,
            usage,
            size: size.into(),
        }
    }

    /// Attach the native handle once the resource layer created it.
    pub fn realize(&mut self, handle: vk::Buffer) {
        self.handle = Some(handle);
    }

    /// Creates a view into an offset and size of the buffer.
    /// # Errors
    /// * Fails if the buffer has no native handle yet.
    /// * Fails if `offset + size > self.size`.
    pub fn view(&self, offset: impl Into<vk::DeviceSize>, size: impl Into<vk::DeviceSize>) -> Result<BufferView> {
        let offset = offset.into();
        let size = size.into();
        let handle = self.handle.ok_or(Error::UnrealizedResource)?;
        match offset.checked_add(size) {
            Some(end) if end <= self.size => Ok(BufferView {
                handle,
                offset,
                size,
            }),
            _ => Err(Error::BufferViewOutOfRange.into()),
        }
    }

    /// Creates a view of the entire buffer.
    /// # Errors
    /// Fails if the buffer has no native handle yet.
    pub fn view_full(&self) -> Result<BufferView> {
        self.view(0u64, self.size)
    }

    /// The native handle, or `None` if the buffer was not realized yet.
    pub fn handle(&self) -> Option<vk::Buffer> {
        self.handle
    }

    /// Usage flags this buffer was described with.
    pub fn usage(&self) -> vk::BufferUsageFlags {
        self.usage
    }

    /// True if this buffer stores indirect draw records rather than a flat byte blob.
    pub fn is_indirect(&self) -> bool {
        self.usage.contains(vk::BufferUsageFlags::INDIRECT_BUFFER)
    }

    /// Get the size of this buffer
    pub fn size(&self) -> vk::DeviceSize {
        self.size
    }
}

impl BufferView {
    /// Get the native handle of the viewed buffer.
    pub fn handle(&self) -> vk::Buffer {
        self.handle
    }

    /// Get the offset of this view into the buffer.
    pub fn offset(&self) -> vk::DeviceSize {
        self.offset
    }

    /// Get the size of this view.
    pub fn size(&self) -> vk::DeviceSize {
        self.size
    }
}

/// Contents of a buffer update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BufferSource<'d> {
    /// Raw bytes, copied as-is.
    Bytes(&'d [u8]),
    /// Draw records for an indirect buffer. The translator decides how these are laid out in memory.
    Indirect(&'d [DrawInfo]),
}

impl BufferSource<'_> {
    /// Byte length of the payload once laid out in a buffer. Indirect draws count one record each, see
    /// [`indirect_stride`] for the record size.
    pub fn byte_len(&self) -> vk::DeviceSize {
        match self {
            BufferSource::Bytes(bytes) => bytes.len() as vk::DeviceSize,
            BufferSource::Indirect(draws) => (draws.len() * indirect_stride(draws)) as vk::DeviceSize,
        }
    }
}

impl<'d> From<&'d [u8]> for BufferSource<'d> {
    fn from(value: &'d [u8]) -> Self {
        BufferSource::Bytes(value)
    }
}

impl<'d> From<&'d [DrawInfo]> for BufferSource<'d> {
    fn from(value: &'d [DrawInfo]) -> Self {
        BufferSource::Indirect(value)
    }
}
