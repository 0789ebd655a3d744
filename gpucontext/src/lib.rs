//! Shared GPU and input contracts.
//!
//! Packages that render, host windows, or run compute on the GPU agree on these traits and
//! data types so they can share a device and input stream without depending on each other.
//! Nothing here talks to the GPU; implementations live with the hosts.
//!
//! The one piece with behavior is [`Registry`], a thread-safe table of named constructors
//! used to choose the best available backend:
//!
//! ```
//! use gpucontext::backend_registry;
//!
//! let backends = backend_registry::<&'static str>();
//! backends.register("software", || "cpu rasterizer");
//! backends.register("vulkan", || "vulkan device");
//!
//! assert_eq!(backends.best_name().as_deref(), Some("vulkan"));
//! ```

// api
pub mod backend;
pub mod device_provider;
pub mod error;
pub mod events;
pub mod platform;
pub mod texture;
pub mod window;

pub use backend::{BackendRegistry, DEFAULT_BACKEND_PRIORITY, backend_name, backend_registry};
pub use device_provider::{DeviceProvider, HalProvider, OpenDevice};
pub use error::{PlatformError, TextureError};
pub use events::{EventSource, ImeController, ImeState, NullEventSource};
pub use platform::{CursorShape, NullPlatformProvider, PlatformProvider};
pub use texture::{Texture, TextureCreator, TextureDrawer, validate_rgba_len};
pub use utils::registry::{Factory, Registry, RegistryDescriptor};
pub use window::{NullWindowProvider, WindowProvider};
