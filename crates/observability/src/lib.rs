//! Tracing/logging setup shared by hosting applications.
//!
//! The engine crates emit `tracing` events (merged cart entries, ignored
//! stale accessory ids, per-line checkout failures); this crate wires up a
//! subscriber for hosts that do not bring their own.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
