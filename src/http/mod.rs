//! HTTP endpoint layer
//!
//! One module per operation: each owns its request-body type, its
//! field-presence validation and its axum handler. Routing lives in
//! `crate::server`.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

pub use add::add_todo;
pub use delete::delete_todo;
pub use list::list_todos;
pub use update::update_todo;
