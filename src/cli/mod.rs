//! CLI command implementations

pub mod add;
pub mod complete;
pub mod definition;
pub mod delete;
pub mod list;
pub mod modify;
pub mod purge;
pub mod status;

pub use definition::{Cli, Commands};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::task::{Registry, RegistryError, Storage, Task, TaskId};

/// Load the registry behind `storage`.
pub fn load_registry(storage: &Storage) -> Result<Registry> {
    Ok(Registry::from_tasks(storage.load()?))
}

/// Mutable task lookup with the registry's not-found error.
pub fn lookup_mut(registry: &mut Registry, id: TaskId) -> Result<&mut Task> {
    registry
        .get_mut(id)
        .ok_or_else(|| RegistryError::NotFound(id).into())
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

/// Pad to `width` display columns. `format!` width counts chars, which
/// misaligns names containing wide glyphs.
pub fn pad(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    if used >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - used))
    }
}
