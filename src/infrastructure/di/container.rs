use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use super::{BindError, ResolutionError, Scope};

type ErasedInstance = Box<dyn Any + Send + Sync>;
type ErasedProvider =
    Arc<dyn Fn(&Container) -> Result<ErasedInstance, ResolutionError> + Send + Sync>;
type FactoryFn<T> = Arc<dyn Fn(&Container) -> Result<Arc<T>, ResolutionError> + Send + Sync>;
type InstanceSlot = Arc<Mutex<Option<ErasedInstance>>>;

/// A concrete type the container can build without an explicit binding.
pub trait Injectable: Sized + Send + Sync + 'static {
    fn inject(container: &Container) -> Result<Self, ResolutionError>;
}

/// How a capability is produced.
pub enum Provider<T: ?Sized> {
    Instance(Arc<T>),
    Factory(FactoryFn<T>),
}

impl<T: ?Sized + Send + Sync + 'static> Provider<T> {
    pub fn instance(value: Arc<T>) -> Self {
        Self::Instance(value)
    }

    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&Container) -> Result<Arc<T>, ResolutionError> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    fn erase(self) -> ErasedProvider {
        match self {
            Provider::Instance(value) => {
                Arc::new(move |_: &Container| Ok(Box::new(Arc::clone(&value)) as ErasedInstance))
            }
            Provider::Factory(factory) => Arc::new(move |container: &Container| {
                factory(container).map(|value| Box::new(value) as ErasedInstance)
            }),
        }
    }
}

impl<T: Injectable> Provider<T> {
    pub fn injectable() -> Self {
        Self::factory(|container| T::inject(container).map(Arc::new))
    }
}

struct Binding {
    type_name: &'static str,
    scope: Scope,
    provider: ErasedProvider,
    /// Present for singletons; held while the instance is being built.
    slot: Option<InstanceSlot>,
    resolved: bool,
}

impl Binding {
    fn new<T: ?Sized + Send + Sync + 'static>(provider: Provider<T>, scope: Scope) -> Self {
        Self {
            type_name: type_name::<T>(),
            scope,
            provider: provider.erase(),
            slot: (scope == Scope::Singleton).then(InstanceSlot::default),
            resolved: false,
        }
    }
}

/// Collects bindings for a container nothing has resolved from yet.
#[derive(Default)]
pub struct ContainerBuilder {
    bindings: HashMap<TypeId, Binding>,
}

impl ContainerBuilder {
    pub fn bind<T>(mut self, provider: Provider<T>, scope: Scope) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bindings
            .insert(TypeId::of::<T>(), Binding::new(provider, scope));
        self
    }

    pub fn bind_injectable<T: Injectable>(self, scope: Scope) -> Self {
        self.bind(Provider::<T>::injectable(), scope)
    }

    pub fn build(self) -> Container {
        tracing::debug!(bindings = self.bindings.len(), "Container built");
        Container {
            bindings: Mutex::new(self.bindings),
            resolving: Mutex::default(),
        }
    }
}

/// Registry resolving capability types to shared instances.
///
/// Binding needs `&mut self`, resolution only `&self`. A capability that has
/// been resolved once can no longer be rebound, so every consumer of a
/// singleton sees the same instance.
#[derive(Default)]
pub struct Container {
    bindings: Mutex<HashMap<TypeId, Binding>>,
    resolving: Mutex<Vec<(ThreadId, TypeId, &'static str)>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }

    pub fn bind<T>(&mut self, provider: Provider<T>, scope: Scope) -> Result<(), BindError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let bindings = self
            .bindings
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);

        let key = TypeId::of::<T>();
        if bindings.get(&key).is_some_and(|binding| binding.resolved) {
            return Err(BindError::AlreadyResolved {
                type_name: type_name::<T>(),
            });
        }

        bindings.insert(key, Binding::new(provider, scope));
        tracing::debug!(capability = type_name::<T>(), scope = ?scope, "Capability bound");
        Ok(())
    }

    pub fn bind_instance<T>(&mut self, value: Arc<T>) -> Result<(), BindError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.bind(Provider::instance(value), Scope::Singleton)
    }

    pub fn bind_factory<T, F>(&mut self, factory: F, scope: Scope) -> Result<(), BindError>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>, ResolutionError> + Send + Sync + 'static,
    {
        self.bind(Provider::factory(factory), scope)
    }

    pub fn bind_injectable<T: Injectable>(&mut self, scope: Scope) -> Result<(), BindError> {
        self.bind(Provider::<T>::injectable(), scope)
    }

    /// Resolves `T`, constructing its dependencies through this container.
    ///
    /// A singleton is built at most once; concurrent callers wait for the
    /// first construction and share its result.
    pub fn get<T>(&self) -> Result<Arc<T>, ResolutionError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let (provider, slot) = {
            let bindings = lock(&self.bindings);
            let binding = bindings.get(&key).ok_or(ResolutionError::Unbound {
                type_name: type_name::<T>(),
            })?;
            (Arc::clone(&binding.provider), binding.slot.clone())
        };

        // Cycles are detected before waiting on the slot.
        let guard = self.enter::<T>()?;
        let resolved = match slot {
            Some(slot) => {
                let mut slot = lock(&slot);
                match slot.as_ref() {
                    Some(cached) => downcast::<T>(cached)?,
                    None => {
                        let instance = provider(self)?;
                        let resolved = downcast::<T>(&instance)?;
                        *slot = Some(instance);
                        tracing::trace!(capability = type_name::<T>(), "Singleton cached");
                        resolved
                    }
                }
            }
            None => downcast::<T>(&provider(self)?)?,
        };
        drop(guard);

        if let Some(binding) = lock(&self.bindings).get_mut(&key) {
            binding.resolved = true;
        }
        Ok(resolved)
    }

    /// Resolves `T`, binding it as a singleton built by [`Injectable::inject`]
    /// when nothing is bound yet.
    pub fn get_or_inject<T: Injectable>(&self) -> Result<Arc<T>, ResolutionError> {
        lock(&self.bindings)
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Binding::new(Provider::<T>::injectable(), Scope::Singleton));
        self.get::<T>()
    }

    pub fn is_bound<T: ?Sized + 'static>(&self) -> bool {
        lock(&self.bindings).contains_key(&TypeId::of::<T>())
    }

    pub fn is_resolved<T: ?Sized + 'static>(&self) -> bool {
        lock(&self.bindings)
            .get(&TypeId::of::<T>())
            .is_some_and(|binding| binding.resolved)
    }

    fn enter<T: ?Sized + 'static>(&self) -> Result<ResolutionGuard<'_>, ResolutionError> {
        let thread = thread::current().id();
        let key = TypeId::of::<T>();
        let mut stack = lock(&self.resolving);

        let in_progress = stack
            .iter()
            .any(|(owner, id, _)| *owner == thread && *id == key);
        if in_progress {
            let chain = stack
                .iter()
                .filter(|(owner, _, _)| *owner == thread)
                .map(|(_, _, name)| *name)
                .chain(std::iter::once(type_name::<T>()))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ResolutionError::Cycle { chain });
        }

        stack.push((thread, key, type_name::<T>()));
        Ok(ResolutionGuard {
            stack: &self.resolving,
            thread,
            key,
        })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = lock(&self.bindings);
        let mut names: Vec<_> = bindings
            .values()
            .map(|binding| (binding.type_name, binding.scope, binding.resolved))
            .collect();
        names.sort_by_key(|(name, _, _)| *name);
        f.debug_struct("Container").field("bindings", &names).finish()
    }
}

struct ResolutionGuard<'a> {
    stack: &'a Mutex<Vec<(ThreadId, TypeId, &'static str)>>,
    thread: ThreadId,
    key: TypeId,
}

impl Drop for ResolutionGuard<'_> {
    fn drop(&mut self) {
        let mut stack = lock(self.stack);
        if let Some(position) = stack
            .iter()
            .rposition(|(owner, id, _)| *owner == self.thread && *id == self.key)
        {
            stack.remove(position);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn downcast<T: ?Sized + Send + Sync + 'static>(
    instance: &ErasedInstance,
) -> Result<Arc<T>, ResolutionError> {
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| ResolutionError::provider::<T>("provider returned a different type"))
}
