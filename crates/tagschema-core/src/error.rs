//! Schema generation error types.

use thiserror::Error;

/// The only ways generation can fail: both are decided at the root, before
/// any output is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No value (or descriptor) was supplied.
    #[error("cannot generate schema from nil value")]
    NilInput,

    /// The root, after at most one reference is stripped, is not a record.
    #[error("expected record type, got {kind}")]
    UnsupportedRootKind { kind: String },
}
