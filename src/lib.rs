//! Suburb quiz (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `suburb_quiz::{core,geo,input,runtime,term,types}`.

pub use suburb_quiz_core as core;
pub use suburb_quiz_geo as geo;
pub use suburb_quiz_input as input;
pub use suburb_quiz_runtime as runtime;
pub use suburb_quiz_term as term;
pub use suburb_quiz_types as types;
