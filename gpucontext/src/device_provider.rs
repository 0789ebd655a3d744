use std::any::Any;

pub use wgpu::{Adapter, Device, Instance, Queue, Surface, TextureFormat};

/// Access to a GPU device, its queue and related resources.
///
/// Lets packages share one device without depending on whichever package created it.
pub trait DeviceProvider {
    /// Device used to create buffers, textures and pipelines.
    fn device(&self) -> &Device;

    /// Queue used to submit command buffers.
    fn queue(&self) -> &Queue;

    /// Preferred format for render targets that must match the surface.
    /// `None` when no surface is attached (headless).
    fn surface_format(&self) -> Option<TextureFormat>;

    /// Adapter the device was requested from, if the provider exposes it.
    fn adapter(&self) -> Option<&Adapter> {
        None
    }

    /// Low-level access, for providers that can hand out their HAL objects.
    fn as_hal(&self) -> Option<&dyn HalProvider> {
        None
    }
}

/// Optional low-level access to the objects behind a [`DeviceProvider`].
///
/// Values are type-erased; consumers downcast to the HAL types they expect.
pub trait HalProvider {
    fn hal_device(&self) -> Option<&(dyn Any + Send + Sync)>;

    fn hal_queue(&self) -> Option<&(dyn Any + Send + Sync)>;
}

/// A device and its queue, bundled for initialization.
#[derive(Debug, Clone)]
pub struct OpenDevice {
    pub device: Device,
    pub queue: Queue,
}

impl From<(Device, Queue)> for OpenDevice {
    fn from((device, queue): (Device, Queue)) -> Self {
        Self { device, queue }
    }
}

impl DeviceProvider for OpenDevice {
    fn device(&self) -> &Device {
        &self.device
    }

    fn queue(&self) -> &Queue {
        &self.queue
    }

    fn surface_format(&self) -> Option<TextureFormat> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HeadlessHal {
        device: u32,
    }

    impl HalProvider for HeadlessHal {
        fn hal_device(&self) -> Option<&(dyn Any + Send + Sync)> {
            Some(&self.device)
        }

        fn hal_queue(&self) -> Option<&(dyn Any + Send + Sync)> {
            None
        }
    }

    fn assert_provider<P: DeviceProvider + Send + Sync>() {}

    #[test]
    fn test_open_device_is_a_provider() {
        assert_provider::<OpenDevice>();
    }

    #[test]
    fn test_hal_values_downcast() {
        let hal = HeadlessHal { device: 7 };
        let device = hal.hal_device().and_then(|d| d.downcast_ref::<u32>());
        assert_eq!(device, Some(&7));
        assert!(hal.hal_device().and_then(|d| d.downcast_ref::<i64>()).is_none());
        assert!(hal.hal_queue().is_none());
    }
}
