// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure business logic with no I/O. Each aggregate has its own subdirectory
// with value objects, errors and the operations over them.
//
// ============================================================================

pub mod order;
