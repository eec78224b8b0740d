//! Ledger of framebuffers currently owned by the foreign host.
//!
//! Every buffer handed out is recorded with its length. A free is honoured
//! only when the pointer is live and the length matches, so double frees,
//! foreign pointers and wrong lengths are rejected instead of corrupting the
//! allocator.

use std::collections::BTreeMap;
use std::fmt;
use std::ptr;
use std::sync::{Mutex, PoisonError};

use crate::paint::Color;

static LEASES: Mutex<BTreeMap<usize, usize>> = Mutex::new(BTreeMap::new());

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// The pointer was never handed out, or was already freed.
    Unknown,
    /// The pointer is live but was leased with a different length.
    LengthMismatch { leased: usize, given: usize },
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::Unknown => write!(f, "pointer is not a live framebuffer"),
            ReleaseError::LengthMismatch { leased, given } => {
                write!(f, "length {given} does not match leased length {leased}")
            }
        }
    }
}

impl std::error::Error for ReleaseError {}

/// Hands `pixels` to the host. Returns null for an empty buffer.
pub fn lease(pixels: Box<[Color]>) -> *mut Color {
    if pixels.is_empty() {
        return ptr::null_mut();
    }

    let len = pixels.len();
    let raw = Box::into_raw(pixels).cast::<Color>();
    LEASES.lock().unwrap_or_else(PoisonError::into_inner).insert(raw as usize, len);
    raw
}

/// Takes a leased buffer back and drops it.
pub fn release(raw: *mut Color, len: usize) -> Result<(), ReleaseError> {
    let mut leases = LEASES.lock().unwrap_or_else(PoisonError::into_inner);

    let leased = *leases.get(&(raw as usize)).ok_or(ReleaseError::Unknown)?;
    if leased != len {
        return Err(ReleaseError::LengthMismatch { leased, given: len });
    }
    leases.remove(&(raw as usize));
    drop(leases);

    // SAFETY: `raw` came from `Box::into_raw` on a `Box<[Color]>` of `len`
    // elements in `lease`, and its entry was removed above, so it is
    // reconstructed exactly once.
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(raw, len)) });
    Ok(())
}

/// Whether `raw` is currently leased.
pub fn is_live(raw: *const Color) -> bool {
    LEASES.lock().unwrap_or_else(PoisonError::into_inner).contains_key(&(raw as usize))
}

/// Number of buffers the host has not released yet.
pub fn live_count() -> usize {
    LEASES.lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// Serializes tests that inspect the global ledger.
#[cfg(test)]
pub(crate) fn serial() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
