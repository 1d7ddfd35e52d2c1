use chrono::NaiveDate;
use contact_graph::model::*;
use contact_graph::CgError;

// ==========================================================================
// NAME TESTS
// ==========================================================================

#[test]
fn name_parts_display_their_value() {
    assert_eq!(FirstName::new("Ana").to_string(), "Ana");
    assert_eq!(Suffix::new("Jr.").to_string(), "Jr.");
}

#[test]
fn nicknames_from_strings_keeps_order() {
    let n = Nicknames::from_strings(["Bob", "Bobby"]);
    assert_eq!(n.values, vec![Nickname::new("Bob"), Nickname::new("Bobby")]);
    assert_eq!(n.to_string(), "Bob, Bobby");
}

// ==========================================================================
// CONTACT INFO TESTS
// ==========================================================================

#[test]
fn phone_number_rejects_invalid_length() {
    let result = PhoneNumber::new(12345, None, None);
    assert!(matches!(result, Err(CgError::InvalidPhoneNumber { .. })));
}

#[test]
fn phone_numbers_display_with_tags() {
    let phones = PhoneNumbers::new(vec![
        PhoneNumber::new(15551234567, None, Some(PhoneTag::Mobile)).unwrap(),
        PhoneNumber::new(5559876543, None, None).unwrap(),
    ]);
    assert_eq!(phones.to_string(), "+1 (555) 123-4567 (mobile), (555) 987-6543");
}

#[test]
fn company_displays_name() {
    let c = Company::new("Acme", None);
    assert_eq!(c.to_string(), "Acme");
}

// ==========================================================================
// PROFILE TESTS
// ==========================================================================

#[test]
fn birthday_displays_iso_date() {
    let b = Birthday::new(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
    assert_eq!(b.to_string(), "1990-05-15");
}

#[test]
fn groups_deduplicate_and_contain() {
    let g = Groups::from_strings(["family", "work", "family"]);
    assert_eq!(g.names.len(), 2);
    assert!(g.contains("family"));
    assert!(!g.contains("friends"));
}

// ==========================================================================
// COMPONENT TESTS
// ==========================================================================

#[test]
fn any_component_serde_roundtrip() {
    let any: AnyComponent = Groups::from_strings(["family"]).into();
    let json = serde_json::to_value(&any).unwrap();
    assert_eq!(json["kind"], "Groups");
    let back: AnyComponent = serde_json::from_value(json).unwrap();
    assert_eq!(back, any);
}

#[test]
fn from_any_owned_unwraps_matching_kind() {
    let any: AnyComponent = Company::new("Acme", None).into();
    assert_eq!(Company::from_any_owned(any.clone()), Some(Company::new("Acme", None)));
    assert_eq!(Birthday::from_any_owned(any), None);
}
