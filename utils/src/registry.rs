use std::collections::HashMap;
use std::sync::Arc;

use fxhash::FxBuildHasher;
use log::{debug, trace};
use parking_lot::RwLock;

/// Shared zero-argument constructor stored in a [`Registry`].
pub type Factory<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// Descriptor used to configure a [`Registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryDescriptor {
    /// Names in order of preference. Earlier entries win over later ones.
    /// Names that are never registered are skipped during selection.
    pub priority: Vec<String>,
}

impl RegistryDescriptor {
    pub fn with_priority<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Thread-safe table of named factories with priority-based selection.
///
/// Each lookup invokes the factory again; constructed values are never cached.
/// Absence is reported as `None` (or `T::default()` through the `*_or_default`
/// methods), never as an error.
///
/// Factories are cloned out under the read lock and invoked after it is released,
/// so a factory may block or call back into the same registry without stalling
/// writers. A factory that is unregistered concurrently may still run once for a
/// lookup that had already selected it.
///
/// ```ignore
/// let backends = Registry::<Box<dyn Backend>>::with_priority(["vulkan", "dx12", "metal", "gles", "software"]);
///
/// backends.register("vulkan", || Box::new(VulkanBackend::new()) as Box<dyn Backend>);
/// backends.register("software", || Box::new(SoftwareBackend::new()) as Box<dyn Backend>);
///
/// let best = backends.best(); // vulkan if registered, otherwise software
/// ```
pub struct Registry<T> {
    factories: RwLock<HashMap<String, Factory<T>, FxBuildHasher>>,
    // immutable after construction, so it lives outside the lock.
    priority: Vec<String>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::with_descriptor(RegistryDescriptor::default())
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("available", &self.available())
            .field("priority", &self.priority)
            .finish()
    }
}

/* ----------------------
Constructors
---------------------- */
impl<T> Registry<T> {
    /// Create an empty registry without a priority order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that prefers `names` in the given order.
    pub fn with_priority<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_descriptor(RegistryDescriptor::default().with_priority(names))
    }

    pub fn with_descriptor(desc: RegistryDescriptor) -> Self {
        let RegistryDescriptor { priority } = desc;
        trace!("Registry::with_descriptor: priority={priority:?}");
        Self {
            factories: RwLock::new(HashMap::default()),
            priority,
        }
    }

    /// The priority order given at construction.
    pub fn priority(&self) -> &[String] {
        &self.priority
    }
}

/* ----------------------
Mutation
---------------------- */
impl<T> Registry<T> {
    /// Store `factory` under `name`, replacing any previous factory with that name.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: Factory<T> = Arc::new(factory);
        let replaced = self
            .factories
            .write()
            .insert(name.clone(), factory)
            .is_some();

        if replaced {
            debug!("Registry::register: replaced factory `{name}`");
        } else {
            trace!("Registry::register: added factory `{name}`");
        }
    }

    /// Remove the factory registered under `name`. Does nothing if it is absent.
    pub fn unregister(&self, name: &str) {
        if self.factories.write().remove(name).is_some() {
            trace!("Registry::unregister: removed factory `{name}`");
        }
    }
}

/* ----------------------
Lookup
---------------------- */
impl<T> Registry<T> {
    /// Construct a fresh value from the factory registered under `name`.
    pub fn get(&self, name: &str) -> Option<T> {
        let factory = self.factories.read().get(name).cloned()?;
        trace!("Registry::get: invoking factory `{name}`");
        Some(factory())
    }

    /// Like [`Registry::get`], but returns `T::default()` when `name` is absent.
    pub fn get_or_default(&self, name: &str) -> T
    where
        T: Default,
    {
        self.get(name).unwrap_or_default()
    }

    /// Whether a factory is registered under `name`. Never invokes the factory.
    pub fn has(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    /// Construct a value from the highest-priority registered factory.
    ///
    /// The priority order is scanned first. If none of its names is registered, the
    /// registered name that sorts first is used instead.
    pub fn best(&self) -> Option<T> {
        let (name, factory) = {
            let factories = self.factories.read();
            let name = self.select(&factories)?;
            let factory = factories.get(&name).cloned()?;
            (name, factory)
        };
        trace!("Registry::best: invoking factory `{name}`");
        Some(factory())
    }

    /// Like [`Registry::best`], but returns `T::default()` when nothing is registered.
    pub fn best_or_default(&self) -> T
    where
        T: Default,
    {
        self.best().unwrap_or_default()
    }

    /// Name that [`Registry::best`] would select, without invoking its factory.
    pub fn best_name(&self) -> Option<String> {
        self.select(&self.factories.read())
    }

    /// All registered names, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered factories.
    pub fn count(&self) -> usize {
        self.factories.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    fn select(&self, factories: &HashMap<String, Factory<T>, FxBuildHasher>) -> Option<String> {
        if let Some(name) = self
            .priority
            .iter()
            .find(|name| factories.contains_key(name.as_str()))
        {
            return Some(name.clone());
        }

        let fallback = factories.keys().min().cloned();
        if let Some(name) = &fallback {
            debug!(
                "Registry::select: no prioritized factory registered, falling back to `{name}`"
            );
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_priority() {
        let desc = RegistryDescriptor::default().with_priority(["high", "low"]);
        assert_eq!(desc.priority, vec!["high".to_string(), "low".to_string()]);

        let registry = Registry::<u32>::with_descriptor(desc);
        assert_eq!(registry.priority().to_vec(), vec!["high", "low"]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_fallback_is_lexicographic() {
        let registry = Registry::<&'static str>::with_priority(["missing"]);
        registry.register("zeta", || "zeta");
        registry.register("alpha", || "alpha");
        registry.register("mu", || "mu");

        assert_eq!(registry.best_name().as_deref(), Some("alpha"));
        assert_eq!(registry.best(), Some("alpha"));
    }

    #[test]
    fn test_factory_invoked_per_lookup() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let registry = Registry::<usize>::new();
        let counter = Arc::clone(&calls);
        registry.register("counted", move || counter.fetch_add(1, Ordering::SeqCst));

        assert!(registry.has("counted"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(registry.get("counted"), Some(0));
        assert_eq!(registry.get("counted"), Some(1));
        assert_eq!(registry.best(), Some(2));
        assert_eq!(registry.best_name().as_deref(), Some("counted"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = Registry::<u8>::with_priority(["b"]);
        registry.register("a", || 1);
        let debug = format!("{registry:?}");
        assert!(debug.contains("\"a\""));
        assert!(debug.contains("\"b\""));
    }
}
