//! Rust launch spec

use super::LanguageSpec;

/// Get the spec for Rust
pub fn spec() -> LanguageSpec {
    LanguageSpec {
        language: "rust",
        dir: "rust",
        entry_file: "Cargo.toml",
        command_prefix: &["cargo", "run", "--release", "--quiet", "--manifest-path"],
    }
}
