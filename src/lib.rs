//! todosheet - a todo list served over HTTP and persisted to a spreadsheet
//!
//! One workbook file on disk is the sole durable state; an in-memory entry
//! list mirrors it between requests and every mutation rewrites the file.

pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod server;
pub mod state;
pub mod store;

pub use config::Config;
pub use entry::Entry;
pub use server::{build_router, Server};
pub use state::AppState;
