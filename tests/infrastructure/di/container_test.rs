use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

use docu_chat::infrastructure::di::{
    BindError, Container, Injectable, Provider, ResolutionError, Scope,
};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

struct Norwegian;

impl Greeter for Norwegian {
    fn greet(&self) -> String {
        "hei".to_string()
    }
}

struct Counter(usize);

struct Host {
    greeter: Arc<dyn Greeter>,
}

impl Injectable for Host {
    fn inject(container: &Container) -> Result<Self, ResolutionError> {
        Ok(Self {
            greeter: container.get::<dyn Greeter>()?,
        })
    }
}

struct Chicken;
struct Egg;

fn counting_factory(calls: Arc<AtomicUsize>) -> impl Fn(&Container) -> Result<Arc<Counter>, ResolutionError> {
    move |_: &Container| Ok(Arc::new(Counter(calls.fetch_add(1, Ordering::SeqCst))))
}

#[test]
fn given_bound_instance_when_resolving_then_returns_same_instance() {
    let mut container = Container::new();
    let greeter: Arc<dyn Greeter> = Arc::new(English);
    container.bind_instance(Arc::clone(&greeter)).unwrap();

    let resolved = container.get::<dyn Greeter>().unwrap();

    assert!(Arc::ptr_eq(&resolved, &greeter));
}

#[test]
fn given_singleton_factory_when_resolving_twice_then_factory_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut container = Container::new();
    container
        .bind_factory(counting_factory(Arc::clone(&calls)), Scope::Singleton)
        .unwrap();

    let first = container.get::<Counter>().unwrap();
    let second = container.get::<Counter>().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn given_transient_factory_when_resolving_twice_then_instances_differ() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut container = Container::new();
    container
        .bind_factory(counting_factory(Arc::clone(&calls)), Scope::Transient)
        .unwrap();

    let first = container.get::<Counter>().unwrap();
    let second = container.get::<Counter>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!((first.0, second.0), (0, 1));
}

#[test]
fn given_empty_container_when_resolving_then_returns_unbound() {
    let container = Container::new();

    let result = container.get::<dyn Greeter>();

    match result {
        Err(ResolutionError::Unbound { type_name }) => assert!(type_name.contains("Greeter")),
        other => panic!("expected Unbound, got {:?}", other.map(|g| g.greet())),
    }
}

#[test]
fn given_unresolved_binding_when_rebinding_then_latest_binding_wins() {
    let mut container = Container::new();
    container
        .bind_instance::<dyn Greeter>(Arc::new(English))
        .unwrap();
    container
        .bind_instance::<dyn Greeter>(Arc::new(Norwegian))
        .unwrap();

    assert_eq!(container.get::<dyn Greeter>().unwrap().greet(), "hei");
}

#[test]
fn given_resolved_binding_when_rebinding_then_returns_already_resolved() {
    let mut container = Container::new();
    container
        .bind_instance::<dyn Greeter>(Arc::new(English))
        .unwrap();
    container.get::<dyn Greeter>().unwrap();

    let result = container.bind_instance::<dyn Greeter>(Arc::new(Norwegian));

    assert!(matches!(result, Err(BindError::AlreadyResolved { .. })));
    assert_eq!(container.get::<dyn Greeter>().unwrap().greet(), "hello");
}

#[test]
fn given_mutual_dependencies_when_resolving_then_returns_cycle() {
    let mut container = Container::new();
    container
        .bind_factory(
            |c: &Container| c.get::<Egg>().map(|_| Arc::new(Chicken)),
            Scope::Singleton,
        )
        .unwrap();
    container
        .bind_factory(
            |c: &Container| c.get::<Chicken>().map(|_| Arc::new(Egg)),
            Scope::Singleton,
        )
        .unwrap();

    let result = container.get::<Chicken>();

    match result {
        Err(ResolutionError::Cycle { chain }) => {
            assert!(chain.contains("Chicken"));
            assert!(chain.contains("Egg"));
        }
        _ => panic!("expected a cycle"),
    }
    assert!(!container.is_resolved::<Chicken>());
}

#[test]
fn given_failing_provider_when_resolving_then_error_names_the_capability() {
    let mut container = Container::new();
    container
        .bind_factory(
            |_: &Container| Err::<Arc<Counter>, _>(ResolutionError::provider::<Counter>("boom")),
            Scope::Singleton,
        )
        .unwrap();

    let error = container.get::<Counter>().err().unwrap();

    assert!(error.to_string().contains("Counter"));
    assert!(error.to_string().contains("boom"));
}

#[test]
fn given_injectable_without_binding_when_get_or_inject_then_builds_from_dependencies() {
    let mut container = Container::new();
    container
        .bind_instance::<dyn Greeter>(Arc::new(Norwegian))
        .unwrap();

    let host = container.get_or_inject::<Host>().unwrap();
    let again = container.get_or_inject::<Host>().unwrap();

    assert_eq!(host.greeter.greet(), "hei");
    assert!(Arc::ptr_eq(&host, &again));
}

#[test]
fn given_builder_when_built_then_bindings_resolve() {
    let container = Container::builder()
        .bind::<dyn Greeter>(Provider::instance(Arc::new(English)), Scope::Singleton)
        .bind_injectable::<Host>(Scope::Transient)
        .build();

    assert!(container.is_bound::<Host>());
    assert_eq!(container.get::<Host>().unwrap().greeter.greet(), "hello");
}

#[test]
fn given_singleton_when_resolved_from_threads_then_factory_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let factory_calls = Arc::clone(&calls);
    let mut container = Container::new();
    container
        .bind_factory(
            move |_: &Container| {
                std::thread::sleep(Duration::from_millis(50));
                Ok(Arc::new(Counter(factory_calls.fetch_add(1, Ordering::SeqCst))))
            },
            Scope::Singleton,
        )
        .unwrap();
    let container = Arc::new(container);
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let container = Arc::clone(&container);
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                container.get::<Counter>().unwrap()
            })
        })
        .collect();
    let instances: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let first = container.get::<Counter>().unwrap();
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &first)));
}
