use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone_number: Option<&'a str>,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            phone_number: value.phone_number,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            name: value.name.as_str(),
            email: value.email.as_str(),
            phone_number: value.phone_number.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(value: &'a DomainUpdateCustomer) -> Self {
        Self {
            name: value.name.as_deref(),
            email: value.email.as_deref(),
            phone_number: value.phone_number.as_deref(),
        }
    }
}
