pub use crate::cli::{Cli, LogFormat, command, run_app, serve};
pub use crate::domain::{
    contact::{self, Contact, ContactField, ContactPatch, ContactQuery, ValidationReq},
    manager::ContactManager,
};
pub use crate::errors::AppError;
pub use crate::http::{self, AppState, build_router, envelope::Envelope};
pub use crate::store::{self, ContactStore, JsonStorage};
