//! Device-wide cache of fixed-function state.
//!
//! Viewport and scissor rectangles live outside of pipeline state objects. Every command buffer recording on a
//! [`Device`](crate::Device) checks requested rectangles against this cache, and only forwards a change to the
//! native context if any field differs from the last applied value.
//!
//! The cache assumes an immediate-mode native context, where state persists across command buffers. For
//! contexts that reset dynamic state, call [`Device::invalidate_state_cache`](crate::Device::invalidate_state_cache)
//! whenever that happens.

use ash::vk;

/// Last applied fixed-function state of a device. `None` means the value is unknown, and the next request
/// always counts as a change.
#[derive(Debug, Default, Copy, Clone)]
pub struct StateCache {
    viewport: Option<vk::Viewport>,
    scissor: Option<vk::Rect2D>,
}

impl StateCache {
    /// Last applied viewport, if known.
    pub fn viewport(&self) -> Option<vk::Viewport> {
        self.viewport
    }

    /// Last applied scissor rectangle, if known.
    pub fn scissor(&self) -> Option<vk::Rect2D> {
        self.scissor
    }

    /// Store a new viewport. Returns true if it differs from the cached one, in which case the native
    /// context must be updated as well. The cache is left untouched otherwise.
    pub fn replace_viewport(&mut self, viewport: &vk::Viewport) -> bool {
        if self.viewport.map_or(false, |cached| viewport_eq(&cached, viewport)) {
            return false;
        }
        self.viewport = Some(*viewport);
        true
    }

    /// Store a new scissor rectangle. Returns true if it differs from the cached one.
    pub fn replace_scissor(&mut self, scissor: &vk::Rect2D) -> bool {
        if self.scissor.map_or(false, |cached| rect_eq(&cached, scissor)) {
            return false;
        }
        self.scissor = Some(*scissor);
        true
    }

    /// Forget all cached values.
    pub fn invalidate(&mut self) {
        self.viewport = None;
        self.scissor = None;
    }
}

// Bitwise: -0.0 and 0.0 are different viewports, identical NaNs are the same one.
fn viewport_eq(lhs: &vk::Viewport, rhs: &vk::Viewport) -> bool {
    lhs.x.to_bits() == rhs.x.to_bits()
        && lhs.y.to_bits() == rhs.y.to_bits()
        && lhs.width.to_bits() == rhs.width.to_bits()
        && lhs.height.to_bits() == rhs.height.to_bits()
        && lhs.min_depth.to_bits() == rhs.min_depth.to_bits()
        && lhs.max_depth.to_bits() == rhs.max_depth.to_bits()
}

fn rect_eq(lhs: &vk::Rect2D, rhs: &vk::Rect2D) -> bool {
    lhs.offset.x == rhs.offset.x
        && lhs.offset.y == rhs.offset.y
        && lhs.extent.width == rhs.extent.width
        && lhs.extent.height == rhs.extent.height
}
