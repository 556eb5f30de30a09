//! # Repograph Scanner
//!
//! One-shot repository scan: walk a directory tree, turn source files into
//! graph nodes, then re-read each file to link import-like references
//! between them.
//!
//! The import linker is deliberately a heuristic, not a resolver: it regex
//! matches import-statement-shaped lines and connects files by filename
//! stem. False positives and negatives are accepted; crashing is not. A
//! missing scan root, an unreadable file, or binary content all degrade to
//! "no nodes" / "no edges contributed".

mod imports;
mod scanner;
mod source;

pub use imports::extract_stems;
pub use scanner::{RepoScanner, ScanOutcome};
pub use source::{read_source, SourceText};
