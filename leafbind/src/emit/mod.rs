//! Emitter seam: serialising finished trees into wire request shapes.
//!
//! Emitters are pure projections of a [`BuiltTree`]; the transport client
//! consuming their output is an external collaborator. An absent node must be
//! treated identically to "field not present in output", whatever that means
//! for the target wire format.

mod json;
mod query;

pub use json::JsonEmitter;
pub use query::{QueryEmitter, QueryMap};

use crate::tree::BuiltTree;

/// Serialises a finished, pruned tree into a transport-specific request.
pub trait Emitter {
    /// Wire request shape produced by this emitter.
    type Request;

    /// Consumes `tree` and produces the wire request.
    ///
    /// Absent nodes must not appear in the output in any form.
    fn emit(&self, tree: BuiltTree) -> Self::Request;
}
