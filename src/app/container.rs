//! Dependency injection container.
//!
//! The container maps a capability type (usually a trait object such as
//! `dyn UserService`) to a construction rule. Rules are plain closures that
//! receive the container and resolve their own dependencies through it, so
//! object graphs are wired explicitly without any runtime introspection.

use std::{
    any::{Any, TypeId, type_name},
    cell::{OnceCell, RefCell},
    collections::HashMap,
    fmt,
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{Result, error::Error};

/// Instance lifetime policy for a registration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// A new instance is constructed on every resolution.
    #[default]
    Transient,
    /// The first successfully constructed instance is cached and shared for
    /// the lifetime of the container.
    Singleton,
}

type Factory<T> = Box<dyn Fn(&Container) -> Result<Arc<T>>>;

struct Registration<T: ?Sized> {
    factory: Factory<T>,
    lifetime: Lifetime,
    instance: OnceCell<Arc<T>>,
}

struct Entry {
    capability: &'static str,
    lifetime: Lifetime,
    // Always a `Registration<T>` where `TypeId::of::<T>()` is the map key.
    registration: Box<dyn Any>,
}

/// Registry of construction rules keyed by capability type.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use userdi::app::Container;
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// let mut container = Container::new();
/// container.register::<dyn Greeter, _>(|_| {
///     let greeter: Arc<dyn Greeter> = Arc::new(English);
///     Ok(greeter)
/// });
///
/// let greeter = container.resolve::<dyn Greeter>()?;
/// assert_eq!(greeter.greet(), "hello");
/// # Ok::<(), userdi::Error>(())
/// ```
///
/// # Thread Safety
///
/// The container tracks the in-progress resolution chain in a `RefCell` and
/// is not `Sync`. Resolved instances are ordinary `Arc`s and may be shared
/// freely if their type allows it.
#[derive(Default)]
pub struct Container {
    entries: HashMap<TypeId, Entry>,
    resolving: RefCell<Vec<(TypeId, &'static str)>>,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for chained registration.
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    /// Register a transient construction rule for capability `T`.
    ///
    /// A later registration for the same `T` replaces this one.
    pub fn register<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: ?Sized + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + 'static,
    {
        self.register_with_lifetime(Lifetime::Transient, factory)
    }

    /// Register a construction rule for capability `T` with an explicit
    /// lifetime policy.
    pub fn register_with_lifetime<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: ?Sized + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + 'static,
    {
        let capability = type_name::<T>();
        let registration = Registration::<T> {
            factory: Box::new(factory),
            lifetime,
            instance: OnceCell::new(),
        };
        let entry = Entry {
            capability,
            lifetime,
            registration: Box::new(registration),
        };

        if self.entries.insert(TypeId::of::<T>(), entry).is_some() {
            warn!(capability, ?lifetime, "replacing existing registration");
        } else {
            debug!(capability, ?lifetime, "registered capability");
        }
        self
    }

    /// Register an already constructed instance as a singleton.
    pub fn register_instance<T>(&mut self, instance: Arc<T>) -> &mut Self
    where
        T: ?Sized + 'static,
    {
        self.register_with_lifetime::<T, _>(Lifetime::Singleton, move |_| {
            Ok(Arc::clone(&instance))
        })
    }

    /// Resolve an instance of capability `T`.
    ///
    /// Dependencies requested by the construction rule are resolved first,
    /// depth-first, through nested calls to `resolve`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnregisteredCapability`] if nothing is registered for `T`
    /// - [`Error::CyclicDependency`] if `T` is already being resolved further
    ///   up the current chain
    /// - any error returned by a construction rule, unchanged
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + 'static,
    {
        let key = TypeId::of::<T>();
        let capability = type_name::<T>();

        let registration = self
            .entries
            .get(&key)
            .and_then(|entry| entry.registration.downcast_ref::<Registration<T>>())
            .ok_or_else(|| Error::UnregisteredCapability {
                capability: capability.to_string(),
            })?;

        if let Some(instance) = registration.instance.get() {
            trace!(capability, "returning cached singleton");
            return Ok(Arc::clone(instance));
        }

        let _guard = ResolutionGuard::enter(&self.resolving, key, capability)?;
        trace!(capability, lifetime = ?registration.lifetime, "constructing instance");
        let instance = (registration.factory)(self)?;

        if registration.lifetime == Lifetime::Singleton {
            let cached = registration.instance.get_or_init(|| instance);
            return Ok(Arc::clone(cached));
        }

        Ok(instance)
    }

    /// Whether a construction rule is registered for `T`.
    pub fn is_registered<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registrations: Vec<(&str, Lifetime)> = self
            .entries
            .values()
            .map(|entry| (entry.capability, entry.lifetime))
            .collect();
        registrations.sort_unstable();
        f.debug_struct("Container")
            .field("registrations", &registrations)
            .finish()
    }
}

/// Marks a capability as in progress for the duration of its construction.
///
/// Dropping the guard pops the capability again, so the chain is unwound on
/// success and on every error path.
struct ResolutionGuard<'a> {
    chain: &'a RefCell<Vec<(TypeId, &'static str)>>,
}

impl<'a> ResolutionGuard<'a> {
    fn enter(
        chain: &'a RefCell<Vec<(TypeId, &'static str)>>,
        key: TypeId,
        capability: &'static str,
    ) -> Result<Self> {
        let mut stack = chain.borrow_mut();
        if stack.iter().any(|(id, _)| *id == key) {
            let chain = stack
                .iter()
                .map(|(_, name)| name.to_string())
                .chain(std::iter::once(capability.to_string()))
                .collect();
            return Err(Error::CyclicDependency { chain });
        }
        stack.push((key, capability));
        Ok(Self { chain })
    }
}

impl Drop for ResolutionGuard<'_> {
    fn drop(&mut self) {
        self.chain.borrow_mut().pop();
    }
}

/// Builder for configuring a container through chained registrations.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use userdi::app::{Container, Lifetime};
///
/// let container = Container::builder()
///     .register::<String, _>(|_| Ok(Arc::new("config".to_string())))
///     .register_with_lifetime::<Vec<u8>, _>(Lifetime::Singleton, |_| Ok(Arc::new(vec![1, 2])))
///     .build();
///
/// assert_eq!(container.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a builder with no registrations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transient construction rule.
    pub fn register<T, F>(mut self, factory: F) -> Self
    where
        T: ?Sized + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + 'static,
    {
        self.container.register::<T, F>(factory);
        self
    }

    /// Register a construction rule with an explicit lifetime.
    pub fn register_with_lifetime<T, F>(mut self, lifetime: Lifetime, factory: F) -> Self
    where
        T: ?Sized + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + 'static,
    {
        self.container
            .register_with_lifetime::<T, F>(lifetime, factory);
        self
    }

    /// Register a prebuilt singleton instance.
    pub fn register_instance<T>(mut self, instance: Arc<T>) -> Self
    where
        T: ?Sized + 'static,
    {
        self.container.register_instance(instance);
        self
    }

    /// Build the container.
    pub fn build(self) -> Container {
        self.container
    }
}
