//! Message rendering through the engine.

use fieldward_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn renders_value_and_quoted_field() {
    let input = input_map([("name", "bob")]);
    let rules = rule_set! { "name" => ["no_digits"] };
    let catalog = MessageCatalog::new().with_language(
        "en",
        LanguageMessages::new(
            "Field :field does not exist",
            "Field :field contains wrong data",
            "Method :field doesn't exist",
        ),
    );
    let validator = Validator::builder()
        .catalog(catalog)
        .predicates(PredicateTable::new().with("no_digits", |_| false))
        .print_value(true)
        .build()
        .unwrap();

    let outcome = validator.evaluate(&input, &rules).unwrap();
    assert_eq!(outcome.messages(), ["Field 'name' contains wrong data: bob"]);
}

#[test]
fn renames_follow_the_resolved_language() {
    let renames = RenameTable::new()
        .with("en", "first_name", "First name")
        .with("de", "first_name", "Vorname");
    let validator = Validator::builder().renames(renames).build().unwrap();
    let rules = rule_set! { "first_name" => [required] };

    let de = validator
        .evaluate_with(&InputMap::new(), &rules, &Overrides::none().language("De"))
        .unwrap();
    assert_eq!(de.messages(), ["Feld 'Vorname' existiert nicht"]);

    let fallback = validator
        .evaluate_with(&InputMap::new(), &rules, &Overrides::none().language("xx"))
        .unwrap();
    assert_eq!(fallback.messages(), ["Field 'First name' does not exist"]);
}

#[test]
fn catalog_and_renames_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("messages.toml");
    std::fs::write(
        &catalog_path,
        r#"
[en]
required = "Please   fill in :field"
field = ":field looks wrong"
method = "No check for :field"
"#,
    )
    .unwrap();
    let renames_path = dir.path().join("renames.json");
    std::fs::write(&renames_path, r#"{"en": {"tel": "phone number"}}"#).unwrap();

    let validator = Validator::builder()
        .catalog(MessageCatalog::from_path(&catalog_path).unwrap())
        .renames(RenameTable::from_path(&renames_path).unwrap())
        .print_field(false)
        .build()
        .unwrap();

    let outcome = validator
        .evaluate(&InputMap::new(), &rule_set! { "tel" => [required] })
        .unwrap();
    assert_eq!(outcome.messages(), ["Please fill in phone number"]);
}

#[test]
fn catalog_without_fallback_is_rejected_at_build() {
    let catalog = MessageCatalog::new()
        .with_language("de", LanguageMessages::new(":field", ":field", ":field"));
    let err = Validator::builder().catalog(catalog).build().unwrap_err();
    assert!(matches!(err, ValidatorError::MissingLanguage { .. }));
}
