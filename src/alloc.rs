//! Allocation failure handling.
//!
//! Running out of memory is the only fatal condition in this crate. Every
//! reallocation goes through [`reserve_exact`], and any failure is handed to a
//! single process-wide hook which must not return. The default hook logs the
//! failure and aborts the process. Tests swap in a panicking hook so memory
//! pressure can be simulated with `#[should_panic]`.

use std::collections::TryReserveError;
use std::sync::{PoisonError, RwLock};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("capacity overflow: {requested} elements cannot be addressed")]
    CapacityOverflow { requested: usize },

    #[error("allocation of {requested} elements failed")]
    Exhausted {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type AllocFailureHook = fn(&AllocError) -> !;

static HOOK: RwLock<Option<AllocFailureHook>> = RwLock::new(None);

fn default_hook(err: &AllocError) -> ! {
    tracing::error!("heap allocation error: {}", err);
    eprintln!("Heap allocation error: {err}");
    std::process::abort()
}

/// Install `hook` as the allocation failure handler, returning the one it replaces.
pub fn set_alloc_failure_hook(hook: AllocFailureHook) -> AllocFailureHook {
    let mut slot = HOOK.write().unwrap_or_else(PoisonError::into_inner);
    slot.replace(hook).unwrap_or(default_hook)
}

pub(crate) fn alloc_failure(err: AllocError) -> ! {
    let hook = HOOK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .unwrap_or(default_hook);

    hook(&err)
}

/// Make sure `storage` can hold `capacity` elements without reallocating.
pub(crate) fn reserve_exact<T>(storage: &mut Vec<T>, capacity: usize) {
    let additional = capacity.saturating_sub(storage.len());

    if let Err(source) = storage.try_reserve_exact(additional) {
        alloc_failure(AllocError::Exhausted {
            requested: capacity,
            source,
        });
    }
}
