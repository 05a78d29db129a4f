//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - provide deterministic ordering (pass + insertion order)

mod cmd;
mod key;
mod list;

pub use cmd::DrawCmd;
pub use key::{DrawPass, SortKey};
pub use list::{DrawItem, DrawList};
