//! Task management module
//!
//! The registry owns every task for the lifetime of one invocation:
//! - Task entity with due-date and recurrence lifecycle
//! - Identity rules (smallest free id, base-36 display)
//! - JSON file persistence

pub mod model;
pub mod registry;
pub mod storage;

pub use model::{Task, TaskId};
pub use registry::{Registry, RegistryError, TaskAttrs};
pub use storage::{default_store_path, Storage};
