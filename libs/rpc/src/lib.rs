//! Generated protobuf/tonic bindings for the todo wire contract.
//!
//! The contract of record is `proto/todo/v1/todo.proto`; everything
//! under `src/gen/` is committed generator output and is not edited by
//! hand.

mod gen;

pub use gen::todo;
