use super::*;

fn error(message: &str) -> ValidationError {
    ValidationError {
        message: Some(message.to_string()),
        field_name: Some("orders.total".to_string()),
        model_name: Some("ecommerce".to_string()),
        explore_name: Some("orders".to_string()),
        removable: Some(true),
    }
}

#[test]
fn test_compute_checksum_known_value() {
    assert_eq!(
        compute_checksum(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_fingerprint_is_deterministic() {
    let errors = vec![error("Unknown field")];
    let a = fingerprint("1", Some("Look Name = A"), Some("A"), &errors, "f1");
    let b = fingerprint("1", Some("Look Name = A"), Some("A"), &errors, "f1");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
}

#[test]
fn test_fingerprint_sensitive_to_each_input() {
    let errors = vec![error("Unknown field")];
    let base = fingerprint("1", Some("Tile"), Some("Sales"), &errors, "f1");

    assert_ne!(base, fingerprint("2", Some("Tile"), Some("Sales"), &errors, "f1"));
    assert_ne!(base, fingerprint("1", Some("Tile 2"), Some("Sales"), &errors, "f1"));
    assert_ne!(base, fingerprint("1", None, Some("Sales"), &errors, "f1"));
    assert_ne!(base, fingerprint("1", Some("Tile"), Some("Sales!"), &errors, "f1"));
    assert_ne!(base, fingerprint("1", Some("Tile"), Some("Sales"), &errors, "f2"));
    assert_ne!(
        base,
        fingerprint("1", Some("Tile"), Some("Sales"), &[error("Unknown view")], "f1")
    );
}

#[test]
fn test_fingerprint_covers_later_errors() {
    let one = vec![error("Unknown field")];
    let two = vec![error("Unknown field"), error("Unknown view")];
    assert_ne!(
        fingerprint("1", None, Some("Sales"), &one, "f1"),
        fingerprint("1", None, Some("Sales"), &two, "f1")
    );
}

#[test]
fn test_absent_element_hashes_like_literal_none() {
    let errors = vec![error("Unknown field")];
    assert_eq!(
        fingerprint("1", None, None, &errors, "f1"),
        fingerprint("1", Some("None"), Some("None"), &errors, "f1")
    );
}
