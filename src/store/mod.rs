// ============================================================================
// Order Store - Read-only dataset the matcher scans
// ============================================================================

mod order_store;

pub use order_store::*;
