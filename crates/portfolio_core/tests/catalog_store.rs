use portfolio_core::{builtin_catalog, Catalog, CatalogError, Project};
use std::io::Write;

fn sample() -> Catalog {
    Catalog::try_new(vec![
        Project::new("a", "Shop", "Online store", "/a.png").with_tags(["React", "E-commerce"]),
        Project::new("b", "Blog", "Personal blog", "/b.png").with_tags(["WordPress"]),
        Project::new("c", "Notes", "Mobile notes", "/c.png").with_tags(["react native", "Mobile"]),
        Project::new("d", "Untagged", "No tags", "/d.png"),
    ])
    .unwrap()
}

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|project| project.id.clone()).collect()
}

#[test]
fn get_all_preserves_declaration_order() {
    let catalog = sample();
    let all = catalog
        .get_all()
        .iter()
        .map(|project| project.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(all, vec!["a", "b", "c", "d"]);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn get_by_tag_matches_whole_tag_case_insensitively() {
    let catalog = sample();
    assert_eq!(ids(&catalog.get_by_tag("react")), vec!["a"]);
    assert_eq!(ids(&catalog.get_by_tag("REACT NATIVE")), vec!["c"]);
    assert!(catalog.get_by_tag("vue").is_empty());
    assert!(catalog.get_by_tag("  ").is_empty());
    assert!(catalog.get_by_tag("").is_empty());
}

#[test]
fn get_by_tag_does_not_trim_input() {
    let catalog = sample();
    assert!(catalog.get_by_tag("  React").is_empty());
    assert!(catalog.get_by_tag("mobile ").is_empty());
    assert_eq!(ids(&catalog.get_by_tag("Mobile")), vec!["c"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::try_new(vec![
        Project::new("same", "One", "", "/1.png"),
        Project::new("same", "Two", "", "/2.png"),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "same"));
}

#[test]
fn invalid_record_is_rejected() {
    let err = Catalog::try_new(vec![Project::new("ok", "", "", "/1.png")]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidProject(_)));
}

#[test]
fn get_by_id_and_related() {
    let catalog = sample();
    assert_eq!(catalog.get_by_id("b").unwrap().title, "Blog");
    assert!(catalog.get_by_id("zzz").is_none());

    let catalog = Catalog::try_new(vec![
        Project::new("a", "A", "", "/a.png").with_tags(["React", "PWA"]),
        Project::new("b", "B", "", "/b.png").with_tags(["php"]),
        Project::new("c", "C", "", "/c.png").with_tags(["pwa"]),
        Project::new("d", "D", "", "/d.png").with_tags(["react"]),
        Project::new("e", "E", "", "/e.png").with_tags(["React"]),
    ])
    .unwrap();
    assert_eq!(ids(&catalog.related("a", 10)), vec!["c", "d", "e"]);
    assert_eq!(ids(&catalog.related("a", 2)), vec!["c", "d"]);
    assert!(catalog.related("b", 10).is_empty());
    assert!(catalog.related("missing", 10).is_empty());
}

#[test]
fn tags_are_distinct_in_first_seen_order() {
    let catalog = Catalog::try_new(vec![
        Project::new("a", "A", "", "/a.png").with_tags(["React", "PWA"]),
        Project::new("b", "B", "", "/b.png").with_tags(["react", "PHP", "pwa"]),
    ])
    .unwrap();
    assert_eq!(catalog.tags(), vec!["React", "PWA", "PHP"]);
}

#[test]
fn json_catalog_loads_and_rejects_duplicates() {
    let catalog = Catalog::from_json_str(
        r#"[{"id":"a","title":"A","tags":["x"]},{"id":"b","title":"B","featured":true}]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get_by_id("b").unwrap().featured);

    let err = Catalog::from_json_str(r#"[{"id":"a","title":"A"},{"id":"a","title":"B"}]"#)
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(_)));

    let err = Catalog::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn json_catalog_file_round_trip_and_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id":"site","title":"Site","tags":["PWA"]}}]"#).unwrap();

    let catalog = Catalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.get_all()[0].id, "site");

    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn builtin_catalog_has_unique_ids_and_is_shared() {
    let first = builtin_catalog().unwrap();
    let second = builtin_catalog().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(first.len() >= 3);
}
