//! Property tests for topology parsing.

use std::path::Path;

use proptest::prelude::*;

use microtopo::parse_str;

fn component_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Za-z0-9 ]{0,12}[a-z0-9]")
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_str` never panics on arbitrary small input.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,256}") {
        let _ = parse_str(&content, Path::new("fuzz.odm.yaml"));
    }

    /// PROPERTY: component order follows the document.
    #[test]
    fn property_parse_preserves_document_order(
        names in proptest::collection::btree_set(component_name(), 1..8),
    ) {
        // b-tree order, then reversed so it differs from sorted order
        let names: Vec<String> = names.into_iter().rev().collect();
        let content: String = names
            .iter()
            .map(|n| format!("\"{}\": {{class: sim.Device}}\n", n))
            .collect();

        let doc = parse_str(&content, Path::new("order.odm.yaml")).unwrap();
        let parsed: Vec<&str> = doc.topology.iter().map(|c| c.name.as_str()).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: any repeated name is rejected, whatever the bodies say.
    #[test]
    fn property_duplicate_names_rejected(
        name in component_name(),
        first_class in "[a-z]{1,8}",
        second_class in "[a-z]{1,8}",
    ) {
        let content = format!(
            "\"{name}\": {{class: {first_class}}}\nOther: {{}}\n\"{name}\": {{class: {second_class}}}\n"
        );
        prop_assume!(name != "Other");
        let err = parse_str(&content, Path::new("dup.odm.yaml")).unwrap_err();
        prop_assert_eq!(err.kind(), "duplicate_name");
    }
}
