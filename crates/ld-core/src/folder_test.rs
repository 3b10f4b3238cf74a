use super::*;

fn folder(id: &str, parent: Option<&str>, name: Option<&str>) -> FolderRecord {
    FolderRecord {
        id: FolderId::new(id),
        parent_id: parent.map(FolderId::new),
        name: name.map(String::from),
    }
}

#[test]
fn test_lookup_existing_folder() {
    let index = FolderIndex::build(vec![
        folder("1", None, Some("Shared")),
        folder("7", Some("1"), Some("Marketing")),
    ]);
    assert_eq!(index.len(), 2);
    let found = index.lookup("7").unwrap();
    assert_eq!(found.name.as_deref(), Some("Marketing"));
    assert_eq!(found.parent().map(|p| p.as_str()), Some("1"));
}

#[test]
fn test_lookup_missing_folder_is_absent() {
    let index = FolderIndex::build(vec![folder("1", None, Some("Shared"))]);
    assert!(index.lookup("2").is_none());
}

#[test]
fn test_integer_and_string_ids_share_a_key() {
    let folders: Vec<FolderRecord> = serde_json::from_str(
        r#"[{"id": 12, "parent_id": "1", "name": "Ops"}, {"id": "1", "parent_id": null, "name": "Shared"}]"#,
    )
    .unwrap();
    let index = FolderIndex::build(folders);
    assert!(index.lookup("12").is_some());
    assert!(index.lookup("1").unwrap().parent().is_none());
}

#[test]
fn test_literal_none_parent_is_absent() {
    let f = folder("3", Some("None"), Some("Root-ish"));
    assert!(f.parent().is_none());
}

#[test]
fn test_empty_index() {
    let index = FolderIndex::build(Vec::new());
    assert!(index.is_empty());
    assert!(index.lookup("1").is_none());
}
