use std::io::ErrorKind;
use std::path::Path;

/// Outcome of a best-effort source read during the edge-derivation pass.
///
/// `Unreadable` and `NotFound` are treated uniformly by the scanner as "no
/// edges contributed"; neither is a scan failure.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceText {
    Content(String),
    Unreadable,
    NotFound,
}

/// Read a file for import scanning. Binary or invalid UTF-8 content is
/// decoded lossily rather than rejected.
pub fn read_source(path: &Path) -> SourceText {
    match std::fs::read(path) {
        Ok(bytes) => SourceText::Content(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == ErrorKind::NotFound => SourceText::NotFound,
        Err(_) => SourceText::Unreadable,
    }
}
