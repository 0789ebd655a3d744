use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use utils::registry::{Registry, RegistryDescriptor};

#[test]
fn test_register_and_get() {
    let registry = Registry::<String>::new();
    registry.register("foo", || "bar".to_string());

    assert_eq!(registry.get("foo").as_deref(), Some("bar"));
    assert_eq!(registry.get_or_default("foo"), "bar");
}

#[test]
fn test_empty_registry_reports_absence() {
    let registry = Registry::<String>::new();

    assert_eq!(registry.get("nonexistent"), None);
    assert_eq!(registry.get_or_default("nonexistent"), "");
    assert!(!registry.has("nonexistent"));
    assert_eq!(registry.best(), None);
    assert_eq!(registry.best_or_default(), "");
    assert_eq!(registry.best_name(), None);
    assert_eq!(registry.count(), 0);
    assert!(registry.available().is_empty());
    assert!(registry.is_empty());
}

#[test]
fn test_has_does_not_invoke_factory() {
    let invoked = Arc::new(AtomicBool::new(false));
    let registry = Registry::<i32>::new();
    assert!(!registry.has("foo"));

    let flag = Arc::clone(&invoked);
    registry.register("foo", move || {
        flag.store(true, Ordering::SeqCst);
        42
    });

    assert!(registry.has("foo"));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[test]
fn test_register_replaces_factory() {
    let registry = Registry::<&'static str>::new();
    registry.register("foo", || "first");
    registry.register("foo", || "second");

    assert_eq!(registry.get("foo"), Some("second"));
    assert_eq!(registry.best(), Some("second"));
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_unregister() {
    let registry = Registry::<i32>::new();
    registry.register("foo", || 42);
    registry.register("bar", || 7);

    registry.unregister("foo");
    assert!(!registry.has("foo"));
    assert_eq!(registry.available(), vec!["bar".to_string()]);

    // absent name is a no-op
    registry.unregister("foo");
    registry.unregister("never-registered");
    assert_eq!(registry.count(), 1);
}

#[test]
fn test_best_respects_priority() {
    let registry = Registry::<&'static str>::with_priority(["high", "medium", "low"]);
    registry.register("low", || "low-value");
    registry.register("medium", || "medium-value");

    assert_eq!(registry.best(), Some("medium-value"));
    assert_eq!(registry.best_name().as_deref(), Some("medium"));

    registry.register("high", || "high-value");
    assert_eq!(registry.best(), Some("high-value"));
    assert_eq!(registry.best_name().as_deref(), Some("high"));
}

#[test]
fn test_best_skips_unregistered_priority_names() {
    let registry = Registry::<u8>::with_priority(["p1", "p2", "p3"]);
    registry.register("p3", || 3);
    registry.register("p2", || 2);

    assert_eq!(registry.best(), Some(2));
    assert_eq!(registry.best_name().as_deref(), Some("p2"));
}

#[test]
fn test_best_single_entry_without_matching_priority() {
    let unprioritized = Registry::<&'static str>::new();
    unprioritized.register("a", || "a-value");
    assert_eq!(unprioritized.best(), Some("a-value"));

    let mismatched = Registry::<&'static str>::with_priority(["x", "y"]);
    mismatched.register("a", || "a-value");
    assert_eq!(mismatched.best(), Some("a-value"));
    assert_eq!(mismatched.best_name().as_deref(), Some("a"));
}

#[test]
fn test_available_and_count_agree() {
    let registry = Registry::<i32>::new();
    assert_eq!(registry.count(), registry.available().len());

    registry.register("b", || 2);
    registry.register("a", || 1);
    assert_eq!(registry.count(), 2);
    assert_eq!(
        registry.available(),
        vec!["a".to_string(), "b".to_string()]
    );

    registry.unregister("a");
    assert_eq!(registry.count(), registry.available().len());
}

#[test]
fn test_backend_selection_scenario() {
    let registry = Registry::<String>::with_descriptor(
        RegistryDescriptor::default().with_priority(["vulkan", "dx12", "metal", "gles", "software"]),
    );

    registry.register("software", || "software".to_string());
    registry.register("vulkan", || "vulkan".to_string());
    assert_eq!(registry.best_name().as_deref(), Some("vulkan"));

    registry.unregister("vulkan");
    assert_eq!(registry.best_name().as_deref(), Some("software"));

    registry.unregister("software");
    assert_eq!(registry.best_name(), None);
}

#[test]
fn test_independent_registries() {
    let numbers = Registry::<i32>::with_priority(["b", "a"]);
    let words = Registry::<String>::with_priority(["a", "b"]);

    for registry_name in ["a", "b"] {
        numbers.register(registry_name, move || registry_name.len() as i32);
        words.register(registry_name, move || registry_name.to_uppercase());
    }

    assert_eq!(numbers.best_name().as_deref(), Some("b"));
    assert_eq!(words.best().as_deref(), Some("A"));

    numbers.unregister("a");
    assert!(words.has("a"));
}

/// Many threads register distinct names at once; every registration must land.
#[test]
fn test_concurrent_register() {
    let registry = Arc::new(Registry::<usize>::new());
    let threads = 16;
    let per_thread = 32;
    let barrier = Arc::new(Barrier::new(threads));

    let mut handles = Vec::new();
    for t in 0..threads {
        let r = Arc::clone(&registry);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            for i in 0..per_thread {
                let value = t * per_thread + i;
                r.register(format!("backend-{value}"), move || value);
            }
        }));
    }

    for h in handles {
        h.join().expect("thread panicked");
    }

    assert_eq!(registry.count(), threads * per_thread);
    assert_eq!(registry.available().len(), threads * per_thread);
    assert_eq!(registry.get("backend-0"), Some(0));
    assert_eq!(
        registry.get(&format!("backend-{}", threads * per_thread - 1)),
        Some(threads * per_thread - 1)
    );
}

/// Readers and writers interleave without corrupting the table.
#[test]
fn test_concurrent_readers_and_writers() {
    let registry = Arc::new(Registry::<u32>::with_priority(["stable"]));
    registry.register("stable", || 1);
    let barrier = Arc::new(Barrier::new(8));

    let mut handles = Vec::new();
    for t in 0..8u32 {
        let r = Arc::clone(&registry);
        let b = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            b.wait();
            for i in 0..200 {
                if t % 2 == 0 {
                    let name = format!("churn-{t}-{i}");
                    r.register(name.clone(), move || i);
                    r.unregister(&name);
                } else {
                    assert_eq!(r.best(), Some(1));
                    assert!(r.has("stable"));
                }
            }
        }));
    }

    for h in handles {
        h.join().expect("thread panicked");
    }

    assert_eq!(registry.available(), vec!["stable".to_string()]);
}

/// A factory that blocks must not hold up writers or corrupt registry state.
#[test]
fn test_blocking_factory_does_not_block_writers() {
    let registry = Arc::new(Registry::<u32>::new());
    let (entered_tx, entered_rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let entered_tx = parking_lot::Mutex::new(entered_tx);
    let release_rx = parking_lot::Mutex::new(release_rx);

    registry.register("slow", move || {
        entered_tx.lock().send(()).expect("test receiver dropped");
        release_rx
            .lock()
            .recv_timeout(Duration::from_secs(10))
            .expect("factory was never released");
        7
    });

    let reader = {
        let r = Arc::clone(&registry);
        thread::spawn(move || r.get("slow"))
    };

    entered_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("factory never started");

    // The factory is still running; writers proceed anyway.
    registry.register("fast", || 1);
    registry.unregister("slow");
    assert!(registry.has("fast"));
    assert!(!registry.has("slow"));

    release_tx.send(()).expect("factory dropped its receiver");
    assert_eq!(reader.join().expect("reader panicked"), Some(7));
    assert_eq!(registry.available(), vec!["fast".to_string()]);
}

/// Factories may call back into the registry that owns them.
#[test]
fn test_reentrant_factory() {
    let registry = Arc::new(Registry::<usize>::new());

    let weak = Arc::downgrade(&registry);
    registry.register("self-aware", move || {
        let Some(r) = weak.upgrade() else {
            return 0;
        };
        r.register("spawned", || 99);
        r.count()
    });

    assert_eq!(registry.get("self-aware"), Some(2));
    assert_eq!(registry.get("spawned"), Some(99));
}

#[test]
fn test_boxed_trait_objects() {
    trait Backend: Send {
        fn name(&self) -> &'static str;
    }
    struct Vulkan;
    struct Software;
    impl Backend for Vulkan {
        fn name(&self) -> &'static str {
            "vulkan"
        }
    }
    impl Backend for Software {
        fn name(&self) -> &'static str {
            "software"
        }
    }

    let registry = Registry::<Box<dyn Backend>>::with_priority(["vulkan", "software"]);
    registry.register("software", || Box::new(Software) as Box<dyn Backend>);
    assert_eq!(registry.best().map(|b| b.name()), Some("software"));

    registry.register("vulkan", || Box::new(Vulkan) as Box<dyn Backend>);
    assert_eq!(registry.best().map(|b| b.name()), Some("vulkan"));
}
