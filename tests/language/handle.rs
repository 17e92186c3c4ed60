//! Integration tests for Language handle lookups
//!
//! Tests node-kind and field queries against the built-in Grz tables.

use std::path::Path;

use grz::grammar::{FieldId, SymbolId, SymbolKind, grz as tables};

fn language() -> grz::Language {
    grz::language().expect("Error loading Grz grammar")
}

// =============================================================================
// Node Kinds
// =============================================================================

#[test]
fn node_kind_round_trip_for_rules() {
    let lang = language();
    for rule in ["source_file", "slide", "viewbox", "obj", "register", "completion"] {
        let id = lang
            .id_for_node_kind(rule, true)
            .unwrap_or_else(|| panic!("no id for {rule}"));
        assert_eq!(lang.node_kind_for_id(id), Some(rule));
        assert!(lang.node_kind_is_named(id));
    }
}

#[test]
fn anonymous_tokens_are_separate_from_named() {
    let lang = language();
    let brace = lang.id_for_node_kind("{", false).unwrap();
    assert!(!lang.node_kind_is_named(brace));
    assert!(lang.node_kind_is_visible(brace));
    assert_eq!(lang.id_for_node_kind("{", true), None);
}

#[test]
fn kinds_spelled_both_ways_resolve_by_namedness() {
    let lang = language();
    let operation = lang.id_for_node_kind("operation", true).unwrap();
    assert_eq!(operation, SymbolId(25));
    assert_eq!(lang.id_for_node_kind("operation", false), None);
}

#[test]
fn hidden_and_auxiliary_rules_are_not_indexed() {
    let lang = language();
    assert_eq!(lang.id_for_node_kind("_definition", true), None);
    assert_eq!(lang.id_for_node_kind("source_file_repeat1", true), None);

    let aux = SymbolId(58);
    assert_eq!(lang.node_kind_for_id(aux), Some("source_file_repeat1"));
    assert_eq!(lang.symbol_kind(aux), Some(SymbolKind::Auxiliary));
    assert!(!lang.node_kind_is_visible(aux));
}

#[test]
fn aliases_are_named_kinds() {
    let lang = language();
    assert!(lang.id_for_node_kind("size", true).is_some());
    assert!(lang.id_for_node_kind("inherit", true).is_some());
}

#[test]
fn out_of_range_ids() {
    let lang = language();
    let past_end = SymbolId(u16::try_from(lang.node_kind_count()).unwrap());
    assert_eq!(lang.node_kind_for_id(past_end), None);
    assert_eq!(lang.symbol_kind(past_end), None);
    assert!(!lang.node_kind_is_named(past_end));
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn every_field_resolves() {
    let lang = language();
    assert_eq!(lang.field_count(), tables::FIELDS.len());
    for name in tables::FIELDS {
        let id = lang.field_id_for_name(name).unwrap();
        assert_eq!(lang.field_name_for_id(id), Some(*name));
    }
}

#[test]
fn field_ids_start_at_one() {
    let lang = language();
    assert_eq!(lang.field_id_for_name("body"), FieldId::new(1));
    assert_eq!(FieldId::new(0), None);
    assert_eq!(lang.field_id_for_name("colour"), None);
}

// =============================================================================
// Lexical Tables and Metadata
// =============================================================================

#[test]
fn lexical_tables() {
    let lang = language();
    assert_eq!(lang.word_token(), Some(tables::IDENTIFIER));
    assert_eq!(lang.extras(), [tables::WHITESPACE, tables::COMMENT]);
    assert_eq!(
        lang.external_tokens(),
        [
            tables::STRING_CONTENT,
            tables::RAW_STRING_CONTENT,
            tables::OBJ_OTHER
        ]
    );
}

#[test]
fn metadata() {
    let lang = language();
    assert_eq!(lang.name(), grz::NAME);
    assert_eq!(lang.scope(), grz::SCOPE);
    assert!(lang.matches_path(Path::new("deck/intro.grz")));
    assert!(!lang.matches_path(Path::new("deck/intro.md")));
    assert_eq!(lang.to_string(), format!("grz (abi {})", lang.abi_version()));
}
