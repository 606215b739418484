//! JSON output generation for the static API.

mod writer;

pub use writer::{render_json, save_dataset, write_json_atomic, WriteSummary};
