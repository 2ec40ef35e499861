//! Host application: data loading, terminal lifecycle and the event loop.

mod data;
mod runtime;
mod terminal;

pub use data::{IssueData, load_issue_data};
pub use runtime::{RunOptions, initialize_app_state, run};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
