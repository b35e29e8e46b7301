//! Exposes the settings a [`Device`](crate::Device) is created with.

/// Settings used to create a [`Device`](crate::Device).
#[derive(Debug, Clone)]
pub struct DeviceSettings {
    /// Debug name of the device. Shows up in log output.
    pub name: String,
    /// Skip viewport and scissor changes that would not change the cached state. When disabled, every call
    /// reaches the translator, but the cache is still kept up to date.
    pub elide_redundant_state: bool,
    /// Accumulate draw call, instance and triangle counts on every command buffer.
    pub statistics: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            name: String::from(""),
            elide_redundant_state: true,
            statistics: true,
        }
    }
}

/// The device builder is a convenience struct to easily create [`DeviceSettings`].
///
/// For information about each of the fields, see [`DeviceSettings`]
/// # Example
/// ```
/// # use grafos::*;
/// let settings = DeviceBuilder::new()
///     .name("main device")
///     .elide_redundant_state(true)
///     .statistics(false)
///     .build();
/// assert!(!settings.statistics);
/// ```
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    inner: DeviceSettings,
}

impl DeviceBuilder {
    /// Create a new device builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debug name of the device.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    /// Enable or disable eliding redundant viewport and scissor changes.
    pub fn elide_redundant_state(mut self, enabled: bool) -> Self {
        self.inner.elide_redundant_state = enabled;
        self
    }

    /// Enable or disable per command buffer statistics.
    pub fn statistics(mut self, enabled: bool) -> Self {
        self.inner.statistics = enabled;
        self
    }

    /// Build the resulting device settings.
    pub fn build(self) -> DeviceSettings {
        self.inner
    }
}
