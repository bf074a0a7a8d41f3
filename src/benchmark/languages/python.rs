//! Python launch spec

use super::LanguageSpec;

/// Get the spec for Python
pub fn spec() -> LanguageSpec {
    LanguageSpec {
        language: "python",
        dir: "python",
        entry_file: "main.py",
        command_prefix: &["python3"],
    }
}
