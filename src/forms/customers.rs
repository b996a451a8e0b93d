use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};
use crate::forms::FormResult;

/// JSON payload accepted by `POST /customers`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(required)]
    pub name: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
    #[validate(required)]
    pub phone_number: Option<String>,
}

impl AddCustomerForm {
    /// Checks that every field is present and converts into a domain `NewCustomer`.
    pub fn into_new_customer(self) -> FormResult<NewCustomer> {
        self.validate()?;

        // Presence is guaranteed by `validate` above.
        Ok(NewCustomer::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.phone_number.unwrap_or_default(),
        ))
    }
}

/// JSON payload accepted by `PUT /customers/{id}`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct EditCustomerForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl EditCustomerForm {
    pub fn into_update_customer(self) -> UpdateCustomer {
        UpdateCustomer {
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}
