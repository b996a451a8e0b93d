use crate::domain::customer::Customer;
use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a customer from a complete payload.
pub fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let new_customer = form.into_new_customer()?;

    repo.create_customer(&new_customer).map_err(ServiceError::from)
}

/// Loads a single customer by identifier.
pub fn load_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Overlays the supplied fields onto an existing customer.
pub fn modify_customer<R>(
    repo: &R,
    customer_id: i32,
    form: EditCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let updates = form.into_update_customer();

    repo.update_customer(customer_id, &updates).map_err(ServiceError::from)
}

/// Deletes a customer.
pub fn remove_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(customer_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockCustomerReader, MockCustomerWriter};

    fn sample_customer(id: i32, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: "alice@example.com".to_string(),
            phone_number: "555-0100".to_string(),
        }
    }

    fn complete_form() -> AddCustomerForm {
        AddCustomerForm {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            phone_number: Some("555-0100".to_string()),
        }
    }

    #[test]
    fn create_customer_persists_payload() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_create_customer()
            .times(1)
            .withf(|new_customer| {
                assert_eq!(new_customer.name, "Alice");
                assert_eq!(new_customer.email, "alice@example.com");
                assert_eq!(new_customer.phone_number, "555-0100");
                true
            })
            .returning(|_| Ok(sample_customer(1, "Alice")));

        let created = create_customer(&repo, complete_form()).expect("expected success");

        assert_eq!(created.id, 1);
    }

    #[test]
    fn create_customer_rejects_incomplete_payload_without_touching_store() {
        let repo = MockCustomerWriter::new();
        let form = AddCustomerForm {
            name: Some("A".to_string()),
            ..AddCustomerForm::default()
        };

        let result = create_customer(&repo, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn create_customer_surfaces_store_failure() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_create_customer().times(1).returning(|_| {
            Err(RepositoryError::from(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                Box::new("UNIQUE constraint failed: customers.email".to_string()),
            )))
        });

        match create_customer(&repo, complete_form()) {
            Err(ServiceError::Repository(err)) => {
                assert_eq!(err.to_string(), "UNIQUE constraint failed: customers.email");
            }
            other => panic!("expected repository error, got {other:?}"),
        }
    }

    #[test]
    fn load_customer_returns_not_found_for_missing_row() {
        let mut repo = MockCustomerReader::new();

        repo.expect_get_customer_by_id()
            .times(1)
            .withf(|id| *id == 999_999)
            .returning(|_| Ok(None));

        let result = load_customer(&repo, 999_999);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn load_customer_returns_record() {
        let mut repo = MockCustomerReader::new();

        repo.expect_get_customer_by_id()
            .times(1)
            .returning(|id| Ok(Some(sample_customer(id, "Alice"))));

        let customer = load_customer(&repo, 4).expect("expected success");

        assert_eq!(customer.id, 4);
        assert_eq!(customer.name, "Alice");
    }

    #[test]
    fn modify_customer_passes_only_supplied_fields() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_update_customer()
            .times(1)
            .withf(|customer_id, updates| {
                assert_eq!(*customer_id, 5);
                assert_eq!(updates.name.as_deref(), Some("New"));
                assert!(updates.email.is_none());
                assert!(updates.phone_number.is_none());
                true
            })
            .returning(|id, _| Ok(sample_customer(id, "New")));

        let form = EditCustomerForm {
            name: Some("New".to_string()),
            ..EditCustomerForm::default()
        };

        let updated = modify_customer(&repo, 5, form).expect("expected success");

        assert_eq!(updated.name, "New");
    }

    #[test]
    fn modify_customer_maps_missing_row_to_not_found() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_update_customer()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = modify_customer(&repo, 12, EditCustomerForm::default());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn remove_customer_deletes_record() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_delete_customer()
            .times(1)
            .withf(|customer_id| *customer_id == 4)
            .returning(|_| Ok(()));

        assert!(matches!(remove_customer(&repo, 4), Ok(())));
    }

    #[test]
    fn remove_customer_maps_missing_row_to_not_found() {
        let mut repo = MockCustomerWriter::new();

        repo.expect_delete_customer()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        assert!(matches!(
            remove_customer(&repo, 4),
            Err(ServiceError::NotFound)
        ));
    }
}
