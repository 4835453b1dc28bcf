use serde_json::{Value, json};

use seedwork_catalog::{Category, CategoryProperties};
use seedwork_core::{DomainError, Entity, UniqueEntityId, ValidatorRules, deep_freeze};

#[test]
fn category_with_supplied_identity_projects_to_object() {
    let id = UniqueEntityId::parse("b0da610e-726a-4e1a-aa9a-a1baa8e1d876").unwrap();
    let created_at = "2024-01-02T03:04:05Z".parse().unwrap();

    let category = Category::new(
        CategoryProperties {
            name: "Movie".to_string(),
            description: Some("some description".to_string()),
            is_active: Some(false),
            created_at: Some(created_at),
        },
        Some(id),
    )
    .unwrap();

    assert_eq!(category.id(), "b0da610e-726a-4e1a-aa9a-a1baa8e1d876");
    assert_eq!(
        Value::Object(category.to_object().unwrap()),
        json!({
            "id": "b0da610e-726a-4e1a-aa9a-a1baa8e1d876",
            "name": "Movie",
            "description": "some description",
            "is_active": false,
            "created_at": "2024-01-02T03:04:05Z",
        })
    );
}

#[test]
fn malformed_identity_never_reaches_the_entity() {
    let result: Result<Category, DomainError> = UniqueEntityId::parse("fake-id")
        .and_then(|id| Category::new(CategoryProperties::named("Movie"), Some(id)));

    assert_eq!(result.unwrap_err(), DomainError::InvalidUuid);
}

#[test]
fn validation_errors_propagate_unmodified() {
    let mut category = Category::new(CategoryProperties::named("Movie"), None).unwrap();

    let err = category.update("x".repeat(300), None).unwrap_err();
    assert_eq!(
        err.validation_message(),
        Some("The name length must be less or equal than 255 characters.")
    );
    assert_eq!(category.name(), "Movie");
}

#[test]
fn raw_input_is_checked_rule_by_rule() {
    let input = json!({ "name": 5, "is_active": "true" });

    let name = ValidatorRules::values(input["name"].clone(), "name")
        .required()
        .and_then(ValidatorRules::string)
        .unwrap_err();
    assert_eq!(name.message(), "The name must be a string.");

    let is_active = ValidatorRules::values(input["is_active"].clone(), "is_active")
        .boolean()
        .unwrap_err();
    assert_eq!(is_active.message(), "The is_active must be a boolean.");

    // Missing keys index to null, which only `required` rejects.
    assert!(
        ValidatorRules::values(input["description"].clone(), "description")
            .string()
            .and_then(|v| v.max_length(10))
            .is_ok()
    );
}

#[test]
fn projections_are_fresh_and_can_be_frozen() {
    let entity = Entity::new(json!({ "a": 1, "b": 2 }), None);

    let first = deep_freeze(entity.to_object().unwrap());
    let second = entity.to_object().unwrap();

    assert_eq!(*first, second);
    assert_eq!(first["id"], entity.id());
    assert_eq!(first.len(), 3);
}
