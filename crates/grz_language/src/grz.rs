//! The compiled Grz grammar.
//!
//! Grz describes slide decks: viewboxes that split the screen, objects
//! with parameters, slides that place objects into viewboxes, and
//! registers. These tables list every node kind and field the grammar
//! produces, in symbol-id order: builtin `end`, lexical tokens, external
//! scanner tokens, rules, repeat helpers, then alias names.

use std::sync::OnceLock;

use grz_foundation::Result;

use crate::artifact::{ArtifactMetadata, GrammarArtifact, LANGUAGE_VERSION, LanguageFn};
use crate::language::Language;
use crate::loader::load;
use crate::symbol::{SymbolEntry, SymbolId, SymbolMetadata};

/// Grammar name.
pub const NAME: &str = "grz";

/// Scope name used by editors.
pub const SCOPE: &str = "source.grz";

/// File extensions of Grz sources.
pub const FILE_TYPES: &[&str] = &["grz"];

/// `identifier`, also the word token.
pub const IDENTIFIER: SymbolId = SymbolId(1);
/// `comment` extra.
pub const COMMENT: SymbolId = SymbolId(29);
/// `whitespace` extra.
pub const WHITESPACE: SymbolId = SymbolId(30);
/// Body of a `"..."` string, produced by the external scanner.
pub const STRING_CONTENT: SymbolId = SymbolId(31);
/// Body of a `r#"..."#` string, produced by the external scanner.
pub const RAW_STRING_CONTENT: SymbolId = SymbolId(32);
/// Free-form object parameter value, produced by the external scanner.
pub const OBJ_OTHER: SymbolId = SymbolId(33);

const N: SymbolMetadata = SymbolMetadata::NAMED;
const A: SymbolMetadata = SymbolMetadata::ANONYMOUS;
const H: SymbolMetadata = SymbolMetadata::HIDDEN;
const X: SymbolMetadata = SymbolMetadata::AUXILIARY;

/// Symbol table, indexed by [`SymbolId`].
pub const SYMBOLS: &[(&str, SymbolMetadata)] = &[
    ("end", H),
    // lexical tokens
    ("identifier", N),
    (".", A),
    ("escape_sequence", N),
    ("\"", A),
    ("r#\"", A),
    ("\"#", A),
    ("number_literal", N),
    ("integer_literal", N),
    ("[", A),
    ("]", A),
    ("edge_parser", N),
    ("Size", A),
    ("()", A),
    ("{", A),
    ("}", A),
    (":", A),
    ("|", A),
    ("~", A),
    ("..", A),
    ("...", A),
    ("..=", A),
    (",", A),
    ("(", A),
    (")", A),
    ("operation", N),
    ("direction", N),
    ("<", A),
    (">", A),
    ("comment", N),
    ("whitespace", N),
    // external scanner
    ("string_content", N),
    ("raw_string_content", N),
    ("obj_other", N),
    // rules
    ("source_file", N),
    ("_definition", H),
    ("completion", N),
    ("_simple_string_literal", H),
    ("_raw_string_literal", H),
    ("string_literal", N),
    ("_text_ident", H),
    ("index_parser", N),
    ("_vb_identifier", H),
    ("slide_from", N),
    ("slide_vb", N),
    ("range", N),
    ("slide_obj", N),
    ("slide_objects", N),
    ("slide_function", N),
    ("slide_functions", N),
    ("slide", N),
    ("viewbox_obj", N),
    ("viewbox_inner", N),
    ("viewbox", N),
    ("obj_param", N),
    ("obj_inner", N),
    ("obj", N),
    ("register", N),
    // repeat helpers
    ("source_file_repeat1", X),
    ("_simple_string_literal_repeat1", X),
    ("slide_objects_repeat1", X),
    ("slide_function_repeat1", X),
    ("slide_functions_repeat1", X),
    ("viewbox_inner_repeat1", X),
    ("obj_inner_repeat1", X),
    // aliases
    ("size", N),
    ("inherit", N),
];

/// Field names, sorted; field id `n` is `FIELDS[n - 1]`.
pub const FIELDS: &[&str] = &[
    "body",
    "denominator",
    "direction",
    "function",
    "key",
    "name",
    "object",
    "objects",
    "operation",
    "range",
    "ty",
    "value",
    "viewbox",
    "viewbox_index",
];

/// Returns the compiled Grz artifact, built on first use.
pub fn artifact() -> &'static GrammarArtifact {
    static ARTIFACT: OnceLock<GrammarArtifact> = OnceLock::new();
    ARTIFACT.get_or_init(build)
}

fn build() -> GrammarArtifact {
    let mut artifact = GrammarArtifact::new(NAME, LANGUAGE_VERSION);
    artifact.symbols = SYMBOLS
        .iter()
        .map(|&(name, metadata)| SymbolEntry::new(name, metadata))
        .collect();
    artifact.fields = FIELDS.iter().map(|&f| f.to_string()).collect();
    artifact.external_tokens = vec![STRING_CONTENT, RAW_STRING_CONTENT, OBJ_OTHER];
    artifact.extras = vec![WHITESPACE, COMMENT];
    artifact.word_token = Some(IDENTIFIER);
    artifact.metadata = ArtifactMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        scope: SCOPE.to_string(),
        file_types: FILE_TYPES.iter().map(|&f| f.to_string()).collect(),
    };
    artifact.sealed()
}

fn grz_artifact() -> Option<&'static GrammarArtifact> {
    Some(artifact())
}

/// Entry point yielding the compiled Grz artifact.
pub const LANGUAGE: LanguageFn = LanguageFn::from_fn(grz_artifact);

/// Loads the Grz grammar with the default loader configuration.
///
/// # Errors
/// Returns a load failure if the built-in artifact is rejected.
pub fn language() -> Result<Language> {
    load(LANGUAGE.artifact())
}
