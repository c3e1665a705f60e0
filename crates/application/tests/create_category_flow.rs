use std::sync::Arc;

use codefix_application::{
    ApplicationError, CategoryRepository, CreateCategory, CreateCategoryInput, InMemoryCatalog,
    UnitOfWork,
};

#[test]
fn create_category_from_json_request() {
    codefix_observability::init();

    let catalog = InMemoryCatalog::new();
    let repository: Arc<dyn CategoryRepository> = Arc::new(catalog.repository());
    let unit_of_work: Arc<dyn UnitOfWork> = Arc::new(catalog.unit_of_work());
    let use_case = CreateCategory::new(repository.clone(), unit_of_work);

    let input: CreateCategoryInput =
        serde_json::from_str(r#"{"name": "Books", "description": "Printed and e-books"}"#)
            .unwrap();
    assert!(input.is_active);

    let output = use_case.handle(input).unwrap();
    let stored = repository.get(output.id).unwrap();
    assert_eq!(stored.name(), "Books");
    assert_eq!(stored.description(), "Printed and e-books");
    assert!(stored.is_active());

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["id"], output.id.to_string());
    assert_eq!(json["name"], "Books");
    assert_eq!(json["is_active"], true);
}

#[test]
fn request_without_description_fails_with_verbatim_message() {
    codefix_observability::init();

    let catalog = InMemoryCatalog::new();
    let use_case = CreateCategory::new(catalog.repository(), catalog.unit_of_work());

    let input: CreateCategoryInput =
        serde_json::from_str(r#"{"name": "Books", "is_active": false}"#).unwrap();
    let err = use_case.handle(input).unwrap_err();

    assert_eq!(
        err,
        ApplicationError::Validation("Description should not be null!".to_string())
    );
    assert!(catalog.is_empty());
    assert_eq!(catalog.commits(), 0);
}

#[test]
fn each_request_creates_a_distinct_category() {
    let catalog = InMemoryCatalog::new();
    let use_case = CreateCategory::new(catalog.repository(), catalog.unit_of_work());

    let first = use_case
        .handle(CreateCategoryInput::new("Books", "", true))
        .unwrap();
    let second = use_case
        .handle(CreateCategoryInput::new("Books", "", true))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.commits(), 2);
}
