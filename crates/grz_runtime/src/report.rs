//! Human-readable reports about loaded grammars.

use std::fmt::Write;

use grz_language::{FieldId, Language, SymbolId};

/// One-line summary of a loaded grammar.
#[must_use]
pub fn summary(language: &Language) -> String {
    format!(
        "{} {} (abi {}, {} node kinds, {} fields, fingerprint {:016x})",
        language.name(),
        language.version(),
        language.abi_version(),
        language.node_kind_count(),
        language.field_count(),
        language.fingerprint(),
    )
}

/// Full node-kind and field tables of a loaded grammar.
#[must_use]
pub fn tables(language: &Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", language.name());
    let _ = writeln!(out, "Scope: {}", language.scope());
    let _ = writeln!(out, "File types: {}", language.file_types().join(", "));
    if let Some(word) = language.word_token() {
        let _ = writeln!(out, "Word token: {}", kind_name(language, word));
    }
    let _ = writeln!(out, "Extras: {}", kind_list(language, language.extras()));
    let _ = writeln!(
        out,
        "External tokens: {}",
        kind_list(language, language.external_tokens())
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Node kinds:");
    let count = u16::try_from(language.node_kind_count()).unwrap_or(u16::MAX);
    for id in (0..count).map(SymbolId) {
        let kind = language
            .symbol_kind(id)
            .map_or("unknown", |kind| kind.name());
        let _ = writeln!(out, "  {:>4}  {:<10} {}", id.0, kind, kind_name(language, id));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Fields:");
    let fields = u16::try_from(language.field_count()).unwrap_or(u16::MAX);
    for id in (1..=fields).filter_map(FieldId::new) {
        let name = language.field_name_for_id(id).unwrap_or("?");
        let _ = writeln!(out, "  {:>4}  {name}", id.get());
    }
    out
}

fn kind_name(language: &Language, id: SymbolId) -> String {
    match language.node_kind_for_id(id) {
        Some(name) if language.node_kind_is_named(id) => name.to_string(),
        Some(name) => format!("{name:?}"),
        None => id.to_string(),
    }
}

fn kind_list(language: &Language, ids: &[SymbolId]) -> String {
    ids.iter()
        .map(|&id| kind_name(language, id))
        .collect::<Vec<_>>()
        .join(", ")
}
