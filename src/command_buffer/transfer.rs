use anyhow::Result;
use ash::vk;

use crate::command_buffer::CommandBuffer;
use crate::{Buffer, BufferSource, BufferView, CommandTranslator, Error, Texture, TransferCmdBuffer};

impl<T: CommandTranslator> TransferCmdBuffer for CommandBuffer<'_, T> {
    fn update_buffer<'d>(&mut self, buffer: &Buffer, data: impl Into<BufferSource<'d>>, size: Option<vk::DeviceSize>) -> Result<()> {
        if self.recording.in_render_pass {
            return Err(self.sequencing_error(Error::UpdateBufferInRenderPass));
        }

        // Not realized yet, the resource layer uploads the initial contents itself.
        let Some(handle) = buffer.handle() else { return Ok(()); };

        let data = data.into();
        let size = match size {
            Some(size) => size,
            None if buffer.is_indirect() => 0,
            None => data.byte_len(),
        };

        #[cfg(feature = "log-commands")]
        trace!("update_buffer(buffer = {:?}, size = {})", handle, size);

        self.device.translator_mut().update_buffer(handle, data, 0, size);
        Ok(())
    }

    fn copy_buffers_to_texture(&mut self, buffers: &[BufferView], texture: &Texture, regions: &[vk::BufferImageCopy]) -> Result<()> {
        if self.recording.in_render_pass {
            return Err(self.sequencing_error(Error::CopyBuffersToTextureInRenderPass));
        }

        let Some(handle) = texture.handle() else { return Ok(()); };

        #[cfg(feature = "log-commands")]
        trace!("copy_buffers_to_texture(texture = {:?}, regions = {})", handle, regions.len());

        self.device
            .translator_mut()
            .copy_buffers_to_texture(buffers, handle, regions);
        Ok(())
    }
}
