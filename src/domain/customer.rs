use serde::{Deserialize, Serialize};

/// Domain representation of a customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique identifier of the customer.
    pub id: i32,
    /// Display name of the customer.
    pub name: String,
    /// Email address, unique across all customers.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewCustomer {
    /// Build a new customer payload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Patch data applied when updating an existing customer.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UpdateCustomer {
    /// Returns `true` when the patch would not change any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone_number.is_none()
    }

    /// Replace the customer name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the customer email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replace the customer phone number.
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(UpdateCustomer::default().is_empty());
    }

    #[test]
    fn patch_with_single_field_is_not_empty() {
        let patch = UpdateCustomer::default().phone_number("555-0100");

        assert!(!patch.is_empty());
        assert_eq!(patch.phone_number.as_deref(), Some("555-0100"));
        assert!(patch.name.is_none());
        assert!(patch.email.is_none());
    }
}
