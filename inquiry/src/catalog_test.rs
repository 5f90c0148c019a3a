use super::*;

#[test]
fn builtin_catalog_is_ordered_and_non_empty() {
    let catalog = Catalog::builtin();
    assert!(!catalog.solutions().is_empty());
    assert_eq!(catalog.default_solution(), "ESET PROTECT Entry");
    assert_eq!(catalog.solutions()[0].id, "protect-entry");
}

#[test]
fn builtin_catalog_ids_are_unique() {
    let solutions = Catalog::builtin().solutions();
    for (i, a) in solutions.iter().enumerate() {
        for b in &solutions[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn new_rejects_empty_list() {
    assert_eq!(Catalog::new(Vec::new()), Err(InquiryError::EmptyCatalog));
}

#[test]
fn from_json_keeps_order_and_defaults_summary() {
    let catalog = Catalog::from_json(
        r#"[{"id":"b","name":"Beta"},{"id":"a","name":"Alpha","summary":"first"}]"#,
    )
    .unwrap();
    assert_eq!(catalog.default_solution(), "Beta");
    assert_eq!(catalog.solutions()[0].summary, "");
    assert_eq!(catalog.solutions()[1].summary, "first");
}

#[test]
fn from_json_rejects_empty_array() {
    assert_eq!(Catalog::from_json("[]"), Err(InquiryError::EmptyCatalog));
}

#[test]
fn from_json_reports_parse_errors() {
    let err = Catalog::from_json(r#"{"id":"x"}"#).unwrap_err();
    assert!(matches!(err, InquiryError::CatalogParse(_)));
}

#[test]
fn contains_and_find_by_id() {
    let catalog = Catalog::builtin();
    assert!(catalog.contains("ESET PROTECT MDR"));
    assert!(!catalog.contains("Endpoint Protection"));
    assert_eq!(catalog.find_by_id("protect-elite").map(|s| s.name.as_str()), Some("ESET PROTECT Elite"));
    assert!(catalog.find_by_id("missing").is_none());
}
