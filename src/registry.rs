//! Process-wide storage of every declaring type's [`Entry`].
//!
//! Each declaring type gets one slot, keyed by its `TypeId`. The slot is a once-cell: the first
//! lookup on a type builds its entry while concurrent lookups wait for the committed result. The
//! result is kept for the rest of the process, including a failed build.

use crate::{Entry, Enum, Result};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::sync::OnceLock;
use tracing::{debug, error};

type Slot<V> = OnceLock<Result<Entry<V>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

struct Registry {
    slots: RwLock<FxHashMap<TypeId, &'static (dyn Any + Send + Sync)>>,
}

impl Registry {
    fn new() -> Self {
        Self {
            slots: RwLock::new(FxHashMap::default()),
        }
    }

    fn slot<E: Enum>(&self) -> &'static Slot<E::Value> {
        let id = TypeId::of::<E>();

        let existing = self.slots.read().get(&id).copied();
        let slot = match existing {
            Some(slot) => slot,
            None => *self.slots.write().entry(id).or_insert_with(|| {
                let slot: &'static (dyn Any + Send + Sync) =
                    Box::leak(Box::new(Slot::<E::Value>::new()));
                slot
            }),
        };

        slot.downcast_ref()
            .expect("registry slot stored under the wrong type")
    }
}

fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

fn build<E: Enum>() -> Result<Entry<E::Value>> {
    let entry = Entry::build(E::NAME, E::declare());

    match &entry {
        Ok(entry) => debug!(ty = E::NAME, variants = entry.len(), "built variant registry"),
        Err(err) => error!(ty = E::NAME, %err, "invalid variant declaration"),
    }

    entry
}

/// Returns the entry of `E`, building it on first use.
///
/// `E::declare` must not look up variants of `E` itself; the build would wait on its own result.
pub fn entry<E: Enum>() -> Result<&'static Entry<E::Value>> {
    registry()
        .slot::<E>()
        .get_or_init(build::<E>)
        .as_ref()
        .map_err(Clone::clone)
}

/// Whether the entry of `E` has been built, without building it
pub fn is_built<E: Enum>() -> bool {
    registry().slot::<E>().get().is_some()
}

pub fn value_for<E: Enum>(name: &str) -> Result<E::Value> {
    entry::<E>()?.value_for(name).cloned()
}

pub fn name_for<E: Enum>(value: &E::Value) -> Result<&'static str> {
    entry::<E>()?.name_for(value)
}
