use super::*;

use crate::store::ContactStore;
use tracing::{debug, error, info};

/// In-memory authority over the contact list, mirrored to a [`ContactStore`].
///
/// Contacts keep insertion order and are looked up by linear scan; the phone
/// number is the identity. Every mutation rewrites the whole backing file.
pub struct ContactManager {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    pub fn list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn find_by(&self, field: ContactField, value: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.field(field) == Some(value))
    }

    pub fn filter(&self, query: &ContactQuery) -> Vec<&Contact> {
        self.mem.iter().filter(|c| c.matches(query)).collect()
    }

    pub fn add(&mut self, contact: Contact) -> Result<Contact, AppError> {
        if self.phone_in_use(&contact.phone_number) {
            return Err(AppError::Conflict(ValidationReq::duplicate_phone()));
        }

        self.mem.push(contact.clone());
        self.persist();

        Ok(contact)
    }

    /// Returns `Ok(None)` when no contact owns `phone_number`. Moving a
    /// contact to a number that another contact already uses is a conflict.
    pub fn update(
        &mut self,
        phone_number: &str,
        patch: ContactPatch,
    ) -> Result<Option<Contact>, AppError> {
        let Some(index) = self.index_of(phone_number) else {
            return Ok(None);
        };

        if let Some(new_phone) = patch.phone_number.as_deref()
            && new_phone != phone_number
            && self.phone_in_use(new_phone)
        {
            return Err(AppError::Conflict(ValidationReq::duplicate_phone()));
        }

        let contact = &mut self.mem[index];
        contact.apply(patch);
        let updated = contact.clone();

        self.persist();

        Ok(Some(updated))
    }

    pub fn remove(&mut self, phone_number: &str) -> bool {
        let initial_len = self.mem.len();
        self.mem.retain(|c| c.phone_number != phone_number);

        let removed = self.mem.len() < initial_len;
        if removed {
            self.persist();
        }
        removed
    }

    /// Writes the whole list to the backing store. Failures are logged and
    /// reported as `false`.
    pub fn export_to_file(&self) -> bool {
        match self.storage.save(&self.mem) {
            Ok(()) => {
                debug!(
                    path = %self.storage.location(),
                    count = self.mem.len(),
                    "exported contacts"
                );
                true
            }
            Err(e) => {
                error!(path = %self.storage.location(), error = %e, "error exporting contacts");
                false
            }
        }
    }

    /// Replaces the in-memory list with the backing store's content. Leaves
    /// memory untouched and returns `false` if nothing could be loaded.
    pub fn import_from_file(&mut self) -> bool {
        match self.storage.load() {
            Ok(Some(contacts)) => {
                info!(
                    path = %self.storage.location(),
                    count = contacts.len(),
                    "imported contacts"
                );
                self.mem = contacts;
                true
            }
            Ok(None) => {
                info!(path = %self.storage.location(), "no contacts file to import");
                false
            }
            Err(e) => {
                error!(path = %self.storage.location(), error = %e, "error importing contacts");
                false
            }
        }
    }

    fn index_of(&self, phone_number: &str) -> Option<usize> {
        self.mem.iter().position(|c| c.phone_number == phone_number)
    }

    fn phone_in_use(&self, phone_number: &str) -> bool {
        self.index_of(phone_number).is_some()
    }

    // The mutation stands even if the mirror write fails; the next
    // successful export brings the file back in line.
    fn persist(&self) {
        let _ = self.export_to_file();
    }
}
