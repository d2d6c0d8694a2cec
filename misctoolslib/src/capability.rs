//! Optional capabilities resolved from a prioritized provider chain.
//!
//! A [`ProviderChain`] is an ordered list of [`CapabilityProvider`]s that
//! can each try to supply some capability (a linear-algebra backend, for
//! instance). Resolution queries providers in order and returns the first
//! one that succeeds. New providers are added to the chain as data; the
//! resolution logic never changes.
//!
//! ```rust
//! use misctoolslib::{import_linear_algebra_backend, FnProvider, ProviderChain};
//!
//! let chain = ProviderChain::new("linear algebra")
//!     .with_provider(FnProvider::new("lapack", || None))
//!     .with_provider(FnProvider::new("native", || Some("native solver")));
//!
//! assert_eq!(import_linear_algebra_backend(&chain).unwrap(), "native solver");
//! ```

use std::fmt;

use tracing::debug;

use crate::error::MisctoolsError;
use crate::Result;

/// Name of the capability resolved by [`import_linear_algebra_backend`].
pub const LINEAR_ALGEBRA: &str = "linear algebra";

/// Something that may be able to supply a capability of type `C`.
pub trait CapabilityProvider<C>: Send + Sync {
    /// Name reported in logs and in [`MisctoolsError::DependencyMissing`].
    fn name(&self) -> &str;

    /// Try to supply the capability. `None` means it is not available.
    fn resolve(&self) -> Option<C>;
}

type Probe<C> = Box<dyn Fn() -> Option<C> + Send + Sync>;

/// A provider backed by a closure.
pub struct FnProvider<C> {
    name: String,
    probe: Probe<C>,
}

impl<C> FnProvider<C> {
    /// Create a provider that calls `probe` to resolve.
    pub fn new<F>(name: impl Into<String>, probe: F) -> Self
    where
        F: Fn() -> Option<C> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            probe: Box::new(probe),
        }
    }
}

impl<C> CapabilityProvider<C> for FnProvider<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self) -> Option<C> {
        (self.probe)()
    }
}

impl<C> fmt::Debug for FnProvider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered list of providers for one capability, highest priority first.
pub struct ProviderChain<C> {
    capability: String,
    providers: Vec<Box<dyn CapabilityProvider<C>>>,
}

impl<C> ProviderChain<C> {
    /// Create an empty chain for the named capability.
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            providers: Vec::new(),
        }
    }

    /// Builder: append a provider with the lowest priority so far.
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: CapabilityProvider<C> + 'static,
    {
        self.push(provider);
        self
    }

    /// Append a provider with the lowest priority so far.
    pub fn push<P>(&mut self, provider: P)
    where
        P: CapabilityProvider<C> + 'static,
    {
        self.providers.push(Box::new(provider));
    }

    /// Insert a provider at `index` in the priority order.
    ///
    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert<P>(&mut self, index: usize, provider: P)
    where
        P: CapabilityProvider<C> + 'static,
    {
        self.providers.insert(index, Box::new(provider));
    }

    /// Name of the capability this chain resolves.
    pub fn capability(&self) -> &str {
        &self.capability
    }

    /// Provider names in priority order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Return the capability from the first provider that resolves.
    ///
    /// Providers after the first success are not queried.
    pub fn resolve(&self) -> Result<C> {
        let mut tried = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.resolve() {
                Some(capability) => {
                    debug!(
                        capability = %self.capability,
                        provider = provider.name(),
                        "resolved capability"
                    );
                    return Ok(capability);
                }
                None => {
                    debug!(
                        capability = %self.capability,
                        provider = provider.name(),
                        "provider unavailable"
                    );
                    tried.push(provider.name().to_string());
                }
            }
        }
        Err(MisctoolsError::DependencyMissing {
            capability: self.capability.clone(),
            tried,
        })
    }
}

impl<C> fmt::Debug for ProviderChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderChain")
            .field("capability", &self.capability)
            .field("providers", &self.provider_names())
            .finish()
    }
}

/// Resolve a linear-algebra backend from `chain`.
///
/// Fails with [`MisctoolsError::DependencyMissing`] when no provider in the
/// chain can supply one.
pub fn import_linear_algebra_backend<C>(chain: &ProviderChain<C>) -> Result<C> {
    chain.resolve()
}
