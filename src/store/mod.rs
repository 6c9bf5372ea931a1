pub mod json;

pub use json::JsonStorage;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub const STORAGE_PATH: &str = "./data/contacts.json";

/// Whole-list persistence for contacts.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet, so callers
/// can tell "no file" apart from "empty list".
pub trait ContactStore: Send {
    fn load(&self) -> Result<Option<Vec<Contact>>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn location(&self) -> String;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
