use utils::registry::Registry;

/// Canonical backend preference, from most to least capable.
pub const DEFAULT_BACKEND_PRIORITY: [&str; 5] = ["vulkan", "dx12", "metal", "gles", "software"];

/// Registry of named backend constructors.
pub type BackendRegistry<T> = Registry<T>;

/// Create a [`BackendRegistry`] that prefers backends in [`DEFAULT_BACKEND_PRIORITY`] order.
pub fn backend_registry<T>() -> BackendRegistry<T> {
    Registry::with_priority(DEFAULT_BACKEND_PRIORITY)
}

/// Registry key conventionally used for a wgpu backend.
pub fn backend_name(backend: wgpu::Backend) -> &'static str {
    #[allow(unreachable_patterns)]
    match backend {
        wgpu::Backend::Vulkan => "vulkan",
        wgpu::Backend::Dx12 => "dx12",
        wgpu::Backend::Metal => "metal",
        wgpu::Backend::Gl => "gles",
        wgpu::Backend::BrowserWebGpu => "webgpu",
        wgpu::Backend::Noop => "software",
        _ => "unknown",
    }
}
