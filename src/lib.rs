//! Tilehop (workspace facade crate).
//!
//! Re-exports the member crates under `tilehop::{core,engine,input,term,types}`
//! and holds the pieces only the binary needs: environment configuration,
//! logging setup and the JSONL event journal.

pub mod config;
pub mod journal;
pub mod logging;

pub use tilehop_core as core;
pub use tilehop_engine as engine;
pub use tilehop_input as input;
pub use tilehop_term as term;
pub use tilehop_types as types;
