//! Go launch spec

use super::LanguageSpec;

/// Get the spec for Go
pub fn spec() -> LanguageSpec {
    LanguageSpec {
        language: "go",
        dir: "go",
        entry_file: "main.go",
        command_prefix: &["go", "run"],
    }
}
