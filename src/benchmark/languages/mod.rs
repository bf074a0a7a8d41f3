//! Language-specific launch specifications

pub mod go;
pub mod python;
pub mod rust;

use std::path::Path;

use crate::benchmark::runner::CommandRunnable;
use crate::constants::languages;
use crate::error::{AppError, AppResult};

/// Launch specification for one language's solutions
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    language: &'static str,
    /// Directory under the solutions root holding this language's problems
    dir: &'static str,
    /// File that must exist inside a problem directory
    entry_file: &'static str,
    /// Command prefix; the entry file path is appended as the last argument
    command_prefix: &'static [&'static str],
}

impl LanguageSpec {
    /// Get the spec for a specific language
    pub fn for_language(language: &str) -> AppResult<Self> {
        match language {
            languages::PYTHON => Ok(python::spec()),
            languages::RUST => Ok(rust::spec()),
            languages::GO => Ok(go::spec()),
            _ => Err(AppError::Discovery(format!(
                "Unsupported language: {language}"
            ))),
        }
    }

    /// All supported language specs, in registry order
    pub fn all() -> Vec<Self> {
        vec![python::spec(), rust::spec(), go::spec()]
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn dir(&self) -> &'static str {
        self.dir
    }

    pub fn entry_file(&self) -> &'static str {
        self.entry_file
    }

    /// Build the runnable that executes one problem of this language
    pub fn runnable(&self, entry_path: &Path) -> CommandRunnable {
        let mut args: Vec<String> = self.command_prefix[1..]
            .iter()
            .map(|s| s.to_string())
            .collect();
        args.push(entry_path.display().to_string());
        CommandRunnable::new(self.command_prefix[0], args)
    }
}
