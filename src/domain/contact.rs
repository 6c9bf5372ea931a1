use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// Partial contact used for updates. Present fields overwrite the stored ones.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    PhoneNumber,
    EmailAddress,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn required_fields() -> String {
        "Name and phone number are required".to_string()
    }

    pub fn empty_field(field: &str) -> String {
        format!("{} must not be empty", field)
    }

    pub fn duplicate_phone() -> String {
        "A contact with this phone number already exists".to_string()
    }
}

impl Contact {
    pub fn new(name: String, phone_number: String, email_address: Option<String>) -> Self {
        Contact {
            name,
            phone_number,
            email_address,
        }
    }

    /// Name and phone number must both carry non-whitespace text.
    pub fn validate(&self) -> Result<(), AppError> {
        if is_blank(&self.name) || is_blank(&self.phone_number) {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        }
        Ok(())
    }

    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => Some(self.name.as_str()),
            ContactField::PhoneNumber => Some(self.phone_number.as_str()),
            ContactField::EmailAddress => self.email_address.as_deref(),
        }
    }

    /// Shallow merge: every field present in `patch` replaces the stored one.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(email_address) = patch.email_address {
            self.email_address = Some(email_address);
        }
    }

    pub fn matches(&self, query: &ContactQuery) -> bool {
        let name_match = match query.name_criterion() {
            Some(name) => self.name.to_lowercase().contains(&name.to_lowercase()),
            None => true,
        };

        let phone_match = match query.phone_criterion() {
            Some(phone) => self.phone_number.contains(phone),
            None => true,
        };

        name_match && phone_match
    }
}

impl ContactPatch {
    /// A patch may leave fields out, but it cannot blank a required one.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.as_deref().is_some_and(is_blank) {
            return Err(AppError::Validation(ValidationReq::empty_field("Name")));
        }
        if self.phone_number.as_deref().is_some_and(is_blank) {
            return Err(AppError::Validation(ValidationReq::empty_field(
                "Phone number",
            )));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none() && self.email_address.is_none()
    }

    /// Turns a create payload into a contact; name and phone number are required.
    pub fn into_contact(self) -> Result<Contact, AppError> {
        let (Some(name), Some(phone_number)) = (self.name, self.phone_number) else {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        };

        let contact = Contact::new(name, phone_number, self.email_address);
        contact.validate()?;
        Ok(contact)
    }
}

impl ContactQuery {
    /// Builds a query from raw query-string pairs. Unknown keys are ignored
    /// and a key given more than once carries no criterion.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ContactQuery::default();
        let (mut names, mut phones) = (0, 0);

        for (key, value) in pairs {
            match key.as_str() {
                "name" => {
                    names += 1;
                    query.name = Some(value);
                }
                "phone" => {
                    phones += 1;
                    query.phone = Some(value);
                }
                _ => {}
            }
        }

        if names > 1 {
            query.name = None;
        }
        if phones > 1 {
            query.phone = None;
        }
        query
    }

    // Empty query values count as "no criterion".
    pub fn name_criterion(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn phone_criterion(&self) -> Option<&str> {
        self.phone.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name_criterion().is_none() && self.phone_criterion().is_none()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// TEST
#[cfg(test)]
mod tests {

    use super::*;

    fn john() -> Contact {
        Contact::new(
            "John Doe".to_string(),
            "1234567890".to_string(),
            Some("john@example.com".to_string()),
        )
    }

    #[test]
    fn serializes_with_camel_case_names() -> Result<(), AppError> {
        let json = serde_json::to_value(john())?;

        assert_eq!(json["name"], "John Doe");
        assert_eq!(json["phoneNumber"], "1234567890");
        assert_eq!(json["emailAddress"], "john@example.com");
        Ok(())
    }

    #[test]
    fn omits_missing_email() -> Result<(), AppError> {
        let contact = Contact::new("Alice".to_string(), "555".to_string(), None);
        let json = serde_json::to_string(&contact)?;

        assert_eq!(json, r#"{"name":"Alice","phoneNumber":"555"}"#);

        let back: Contact = serde_json::from_str(&json)?;
        assert_eq!(back, contact);
        Ok(())
    }

    #[test]
    fn rejects_blank_required_fields() {
        let no_name = Contact::new("   ".to_string(), "1".to_string(), None);
        let no_phone = Contact::new("A".to_string(), String::new(), None);

        assert!(matches!(no_name.validate(), Err(AppError::Validation(_))));
        assert!(matches!(no_phone.validate(), Err(AppError::Validation(_))));
        assert!(john().validate().is_ok());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut contact = john();
        contact.apply(ContactPatch {
            name: Some("John Updated".to_string()),
            phone_number: None,
            email_address: Some("updated@example.com".to_string()),
        });

        assert_eq!(contact.name, "John Updated");
        assert_eq!(contact.phone_number, "1234567890");
        assert_eq!(contact.email_address.as_deref(), Some("updated@example.com"));
    }

    #[test]
    fn patch_cannot_blank_required_fields() {
        let patch = ContactPatch {
            name: Some(String::new()),
            ..ContactPatch::default()
        };
        assert!(patch.validate().is_err());

        let patch = ContactPatch {
            phone_number: Some(" ".to_string()),
            ..ContactPatch::default()
        };
        assert!(patch.validate().is_err());

        assert!(ContactPatch::default().validate().is_ok());
        assert!(ContactPatch::default().is_empty());
    }

    #[test]
    fn create_payload_requires_name_and_phone() {
        let missing_phone = ContactPatch {
            name: Some("John Doe".to_string()),
            ..ContactPatch::default()
        };
        let err = missing_phone.into_contact().unwrap_err();
        assert_eq!(err.to_string(), "Name and phone number are required");

        let complete = ContactPatch {
            name: Some("John Doe".to_string()),
            phone_number: Some("1234567890".to_string()),
            email_address: None,
        };
        assert_eq!(
            complete.into_contact().ok(),
            Some(Contact::new(
                "John Doe".to_string(),
                "1234567890".to_string(),
                None
            ))
        );
    }

    #[test]
    fn query_name_is_case_insensitive_substring() {
        let query = ContactQuery {
            name: Some("jO".to_string()),
            phone: None,
        };

        assert!(john().matches(&query));
        assert!(!Contact::new("Alice".to_string(), "2".to_string(), None).matches(&query));
    }

    #[test]
    fn query_phone_and_name_must_both_match() {
        let query = ContactQuery {
            name: Some("john".to_string()),
            phone: Some("4567".to_string()),
        };
        assert!(john().matches(&query));

        let query = ContactQuery {
            name: Some("john".to_string()),
            phone: Some("000".to_string()),
        };
        assert!(!john().matches(&query));
    }

    #[test]
    fn empty_query_values_are_ignored() {
        let query = ContactQuery {
            name: Some(String::new()),
            phone: Some(String::new()),
        };

        assert!(query.is_empty());
        assert!(john().matches(&query));
    }

    #[test]
    fn repeated_query_keys_are_ignored() {
        let pairs = [
            ("name", "a"),
            ("name", "b"),
            ("phone", "123"),
            ("sort", "asc"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let query = ContactQuery::from_pairs(pairs);

        assert_eq!(query.name_criterion(), None);
        assert_eq!(query.phone_criterion(), Some("123"));
    }

    #[test]
    fn field_lookup() {
        let contact = Contact::new("Bob".to_string(), "42".to_string(), None);

        assert_eq!(contact.field(ContactField::Name), Some("Bob"));
        assert_eq!(contact.field(ContactField::PhoneNumber), Some("42"));
        assert_eq!(contact.field(ContactField::EmailAddress), None);
    }
}
