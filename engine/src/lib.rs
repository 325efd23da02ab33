pub mod bucket_queue;
pub mod chunk;
pub mod dense_map;
pub mod diff;
pub mod error;
pub mod line;
pub mod reader;
pub mod solver;
pub mod state;

pub use chunk::{Chunk, DiffLine};
pub use diff::{diff_files, diff_strings, Options};
pub use error::DiffError;
pub use state::Action;
