use std::collections::HashMap;

use simclient::{ObjectHandle, SimulatorClient};

use crate::error::EnvError;

/// Name-to-handle bindings resolved once when the adapter is built.
///
/// Resolution is all-or-nothing: the first name the simulator cannot locate
/// aborts construction, so there is never a partially wired adapter. A
/// missing scene object is a configuration error, not a transient fault,
/// and is not retried.
#[derive(Debug)]
pub struct HandleRegistry {
    by_name: HashMap<String, ObjectHandle>,
}

impl HandleRegistry {
    /// Resolves every name through the client exactly once.
    pub fn resolve_all<C, I, S>(client: &mut C, names: I) -> Result<Self, EnvError>
    where
        C: SimulatorClient,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_name = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let handle = client.resolve_handle(name).map_err(|source| {
                EnvError::UnresolvedObject { name: name.to_owned(), source }
            })?;
            tracing::debug!(name, handle = handle.raw(), "resolved scene object");
            by_name.insert(name.to_owned(), handle);
        }
        Ok(Self { by_name })
    }

    /// Cached handle for a name that was resolved at construction.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ObjectHandle> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
