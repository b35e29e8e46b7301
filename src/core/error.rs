//! Exposes the grafos error type

use thiserror::Error;

/// Error type that grafos can return.
///
/// Recording errors never poison the command buffer they were reported on. The offending call is dropped,
/// and the render pass and dirty-state tracking stay valid for the next call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A draw was recorded while no render pass is active.
    #[error("Tried to record a draw outside of a render pass.")]
    DrawOutsideRenderPass,
    /// A buffer update was recorded inside an active render pass.
    #[error("Tried to update a buffer inside a render pass.")]
    UpdateBufferInRenderPass,
    /// A buffer to texture copy was recorded inside an active render pass.
    #[error("Tried to copy buffers to a texture inside a render pass.")]
    CopyBuffersToTextureInRenderPass,
    /// Executing other command buffers is not supported by primary command buffers.
    #[error("Executing other command buffers is not supported by this command buffer.")]
    ExecuteUnsupported,
    /// Tried to end a render pass while none is active.
    #[error("Tried to end a render pass, but no render pass is active.")]
    NoActiveRenderPass,
    /// Tried to finish recording while a render pass is still active.
    #[error("Tried to end recording while a render pass is still active.")]
    RenderPassNotEnded,
    /// The resource has no native handle yet.
    #[error("Resource does not have a native handle yet.")]
    UnrealizedResource,
    /// Buffer view out of range of original buffer
    #[error("Buffer view is not a valid range in the parent buffer.")]
    BufferViewOutOfRange,
    /// Uncategorized error.
    #[error("Uncategorized error: `{0}`")]
    Uncategorized(&'static str),
}

impl Error {
    /// Numeric diagnostic code of this error. Every variant has its own code, so a diagnostic channel can tell
    /// which operation was misused without parsing the message.
    pub fn code(&self) -> u32 {
        match self {
            Error::DrawOutsideRenderPass => 16_301,
            Error::UpdateBufferInRenderPass => 16_328,
            Error::CopyBuffersToTextureInRenderPass => 16_329,
            Error::ExecuteUnsupported => 16_330,
            Error::NoActiveRenderPass => 16_331,
            Error::RenderPassNotEnded => 16_332,
            Error::UnrealizedResource => 16_340,
            Error::BufferViewOutOfRange => 16_341,
            Error::Uncategorized(_) => 16_399,
        }
    }

    /// Whether this error reports a call made in the wrong render pass state.
    pub fn is_sequencing_violation(&self) -> bool {
        matches!(
            self,
            Error::DrawOutsideRenderPass
                | Error::UpdateBufferInRenderPass
                | Error::CopyBuffersToTextureInRenderPass
                | Error::NoActiveRenderPass
                | Error::RenderPassNotEnded
        )
    }
}
