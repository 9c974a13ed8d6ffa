use anyhow::Result;

use super::ModelCatalog;

fn catalog() -> ModelCatalog {
    return ModelCatalog::new(
        vec!["m1".to_string(), "m2".to_string()],
        "m1",
    )
    .unwrap();
}

#[test]
fn it_rejects_an_empty_allow_list() {
    let res = ModelCatalog::new(vec![], "m1");
    assert!(res.is_err());
}

#[test]
fn it_rejects_a_default_outside_the_allow_list() {
    let res = ModelCatalog::new(vec!["m1".to_string()], "m2");
    assert!(res.is_err());
}

#[test]
fn it_checks_membership() {
    let catalog = catalog();
    assert!(catalog.contains("m1"));
    assert!(catalog.contains("m2"));
    assert!(!catalog.contains("m3"));
}

#[test]
fn it_exposes_the_default_model() -> Result<()> {
    let catalog = catalog();
    assert_eq!(catalog.default_model(), "m1");
    assert_eq!(catalog.models(), &["m1".to_string(), "m2".to_string()]);
    return Ok(());
}
