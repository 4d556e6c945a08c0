//! Writing world snapshots to disk and reading them back.

pub mod json;
pub mod jsonl;

pub use json::{list_worlds, load_world, save_world};
pub use jsonl::flush_to_jsonl;
