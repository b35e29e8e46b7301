//! The device owns the native context that commands are translated into, together with the fixed-function
//! [`StateCache`] shared by every command buffer recording against it.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::core::settings::DeviceSettings;
use crate::state_cache::StateCache;
use crate::CommandTranslator;

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
struct DeviceInner<T: CommandTranslator> {
    settings: DeviceSettings,
    #[derivative(Debug = "ignore")]
    translator: RefCell<T>,
    state_cache: RefCell<StateCache>,
}

/// Owner of the native context and the fixed-function state cache. Internal state is wrapped in an
/// `Rc<DeviceInner>`, so this is cheap to clone.
///
/// Recording against a device is single-threaded. The device is neither `Send` nor `Sync`, and none of its
/// state is locked.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Device<T: CommandTranslator> {
    inner: Rc<DeviceInner<T>>,
}

impl<T: CommandTranslator> Clone for Device<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: CommandTranslator> Device<T> {
    /// Create a new device around a native context.
    pub fn new(translator: T, settings: DeviceSettings) -> Self {
        debug!("Created device `{}`", settings.name);
        Self {
            inner: Rc::new(DeviceInner {
                settings,
                translator: RefCell::new(translator),
                state_cache: RefCell::new(StateCache::default()),
            }),
        }
    }

    /// Get the settings this device was created with.
    pub fn settings(&self) -> &DeviceSettings {
        &self.inner.settings
    }

    /// Get the debug name of this device.
    pub fn name(&self) -> &str {
        &self.inner.settings.name
    }

    /// Get read access to the native context.
    /// # Panics
    /// Panics if the native context is currently borrowed mutably.
    pub fn translator(&self) -> Ref<'_, T> {
        self.inner.translator.borrow()
    }

    /// Get mutable access to the native context. Commands issued directly through this handle bypass
    /// the state cache, call [`Device::invalidate_state_cache`] afterwards if they touch viewport or scissor.
    /// # Panics
    /// Panics if the native context is currently borrowed.
    pub fn translator_mut(&self) -> RefMut<'_, T> {
        self.inner.translator.borrow_mut()
    }

    /// Get a snapshot of the fixed-function state cache.
    pub fn state_cache(&self) -> StateCache {
        *self.inner.state_cache.borrow()
    }

    pub(crate) fn state_cache_mut(&self) -> RefMut<'_, StateCache> {
        self.inner.state_cache.borrow_mut()
    }

    /// Forget all cached fixed-function state. The next viewport and scissor calls will always reach the
    /// native context.
    pub fn invalidate_state_cache(&self) {
        trace!("Invalidating fixed-function state cache of device `{}`", self.name());
        self.state_cache_mut().invalidate();
    }

    /// Returns true if both devices refer to the same native context.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
