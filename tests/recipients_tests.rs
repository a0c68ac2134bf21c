use recap::api::RecipientsField;
use recap::utils::recipients::{is_plausible_address, split_address_list};

#[test]
fn test_split_address_list_basic() {
    assert_eq!(
        split_address_list("a@x.com,b@x.com"),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_split_address_list_trims_whitespace() {
    assert_eq!(
        split_address_list(" a@x.com , b@x.com "),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_split_address_list_drops_empty_segments() {
    assert_eq!(
        split_address_list("a@x.com,,b@x.com,"),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
    assert!(split_address_list("").is_empty());
    assert!(split_address_list(" , ,").is_empty());
}

#[test]
fn test_split_address_list_preserves_order_and_duplicates() {
    assert_eq!(
        split_address_list("b@x.com,a@x.com,b@x.com"),
        vec![
            "b@x.com".to_string(),
            "a@x.com".to_string(),
            "b@x.com".to_string()
        ]
    );
}

#[test]
fn test_is_plausible_address() {
    assert!(is_plausible_address("a@x.com"));
    assert!(is_plausible_address("first.last+tag@sub.example.org"));

    assert!(!is_plausible_address(""));
    assert!(!is_plausible_address("not-an-address"));
    assert!(!is_plausible_address("missing@tld"));
    assert!(!is_plausible_address("two@@x.com"));
    assert!(!is_plausible_address("spaces in@x.com"));
}

#[test]
fn test_recipients_field_normalizes_single_string() {
    let field = RecipientsField::One("a@x.com, b@x.com".to_string());
    assert_eq!(
        field.normalize(),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_recipients_field_normalizes_list() {
    let field = RecipientsField::Many(vec!["a@x.com".to_string(), "b@x.com".to_string()]);
    assert_eq!(
        field.normalize(),
        vec!["a@x.com".to_string(), "b@x.com".to_string()]
    );
}

#[test]
fn test_recipients_field_flattens_comma_joined_list_entries() {
    // A list entry may itself be comma-joined; the shape never leaks past
    // normalization.
    let field = RecipientsField::Many(vec![
        "a@x.com,b@x.com".to_string(),
        "c@x.com".to_string(),
    ]);
    assert_eq!(
        field.normalize(),
        vec![
            "a@x.com".to_string(),
            "b@x.com".to_string(),
            "c@x.com".to_string()
        ]
    );
}
