pub mod contact;
pub mod manager;

pub use contact::{Contact, ContactField, ContactPatch, ContactQuery, ValidationReq};
pub use manager::ContactManager;

use crate::errors::AppError;
