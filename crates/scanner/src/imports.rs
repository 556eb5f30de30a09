use once_cell::sync::Lazy;
use regex::Regex;

/// An import-statement-like line: a keyword followed by a quoted-or-bare
/// module token of word characters, dots, slashes, `@`, and hyphens.
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:import|from|include)\s+["']?([@\w./-]+)["']?"#)
        .expect("import pattern compiles")
});

/// Extract candidate module stems from file content.
///
/// A stem is the last path segment of a matched module token with any
/// extension stripped, e.g. `./utils/date-helper.ts` -> `date-helper`.
/// Pure function over the content; the traversal and the graph never see
/// the regex. Swap this out for a per-language parser without touching
/// either.
pub fn extract_stems(content: &str) -> Vec<String> {
    IMPORT_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .filter_map(|token| stem_of(token.as_str()))
        .collect()
}

fn stem_of(module: &str) -> Option<String> {
    let base = module.rsplit('/').next().unwrap_or(module);
    let stem = base.split('.').next().unwrap_or("");
    (!stem.is_empty()).then(|| stem.to_string())
}
