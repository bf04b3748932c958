//! Error types for registration, flag parsing and catalog loading.

use std::path::PathBuf;

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XtagError {
	/// Extra names must be non-empty and alphanumeric.
	#[error("invalid extra name {name:?}: only letters and digits are allowed")]
	InvalidName { name: String },
}

/// Errors raised while parsing or resolving an `--extras` flag string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
	#[error("unknown extra letter '{letter}' in {flags:?}")]
	UnknownLetter { letter: char, flags: String },
	#[error("unknown extra name {{{name}}} in {flags:?}")]
	UnknownName { name: String, flags: String },
	#[error("unterminated '{{' in {flags:?}")]
	UnterminatedName { flags: String },
	#[error("empty extra name '{{}}' in {flags:?}")]
	EmptyName { flags: String },
	/// Single-letter shorthands only exist for common extras.
	#[error("letter '{letter}' is not usable for language-specific extras; use {{name}}")]
	LetterInLanguageScope { letter: char },
}

/// Errors raised while loading a language catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("failed to read catalog {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse catalog: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("catalog holds {count} languages, more than a language identity can address")]
	TooManyLanguages { count: usize },
	#[error("language {name:?} is declared more than once")]
	DuplicateLanguage { name: String },
	#[error("language {language:?} declares an invalid extra: {source}")]
	InvalidExtra {
		language: String,
		#[source]
		source: XtagError,
	},
}
