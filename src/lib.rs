//! minofall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the runner, the
//! integration tests and the benchmarks can use `minofall::{core,input,types}`.

pub use minofall_core as core;
pub use minofall_input as input;
pub use minofall_types as types;
