//! Actor resolution adapters
//!
//! The update pipeline records who made each change. The original session
//! lookup is modeled as an injected capability returning an optional actor
//! identity, resolved once per update call.

use std::env;

/// Resolves the current administrative actor
pub trait ActorResolver: Send + Sync {
    /// Username of the current actor, or `None` when nobody is
    /// authenticated
    fn current_actor(&self) -> Option<String>;
}

/// Actor resolver with a fixed identity
///
/// Used when the boundary already knows who is acting, e.g. from an
/// explicit CLI flag.
pub struct FixedActorResolver {
    actor: Option<String>,
}

impl FixedActorResolver {
    /// Create a resolver that always yields the given actor
    pub fn new(actor: Option<String>) -> Self {
        Self { actor }
    }
}

impl ActorResolver for FixedActorResolver {
    fn current_actor(&self) -> Option<String> {
        self.actor.clone()
    }
}

/// Actor resolver reading an environment variable
///
/// Yields `None` when the variable is unset or blank.
pub struct EnvActorResolver {
    var: String,
}

impl EnvActorResolver {
    /// Create a resolver over the given environment variable
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl ActorResolver for EnvActorResolver {
    fn current_actor(&self) -> Option<String> {
        env::var(&self.var)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}
