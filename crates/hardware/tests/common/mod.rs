//! Shared test infrastructure.

/// Fluent LS-8 program assembler.
pub mod builder;
