//! Language catalog loaded from TOML.
//!
//! A catalog lists languages and the extras each one defines. It acts as the
//! [`LanguageHost`] of a registry: a language's extras are registered the first
//! time that language is initialized.
//!
//! ```toml
//! [[language]]
//! name = "Fortran"
//!
//! [[language.extra]]
//! name = "linkName"
//! description = "Include the link name of procedures"
//! enabled = false
//! ```

use std::path::Path;

use rustc_hash::FxHashMap as HashMap;
use serde::Deserialize;
use tracing::{debug, error};

use crate::def::{XtagDefinition, is_valid_name};
use crate::error::{CatalogError, XtagError};
use crate::id::LanguageId;
use crate::registry::{LanguageHost, XtagRegistry};

/// Extra declared by a catalog language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraSpec {
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub enabled: bool,
}

/// Language entry of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSpec {
	pub name: String,
	#[serde(default, rename = "extra")]
	pub extras: Vec<ExtraSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
	#[serde(default, rename = "language")]
	languages: Vec<LanguageSpec>,
}

#[derive(Debug)]
struct CatalogLanguage {
	spec: LanguageSpec,
	initialized: bool,
}

/// Languages and their extra declarations.
#[derive(Debug, Default)]
pub struct Catalog {
	languages: Vec<CatalogLanguage>,
	by_name: HashMap<String, LanguageId>,
}

impl Catalog {
	/// Builds a catalog, validating language and extra names.
	pub fn new(specs: Vec<LanguageSpec>) -> Result<Self, CatalogError> {
		let mut catalog = Catalog::default();
		for spec in specs {
			let key = spec.name.to_lowercase();
			if catalog.by_name.contains_key(&key) {
				return Err(CatalogError::DuplicateLanguage { name: spec.name });
			}
			if let Some(bad) = spec.extras.iter().find(|e| !is_valid_name(&e.name)) {
				return Err(CatalogError::InvalidExtra {
					language: spec.name.clone(),
					source: XtagError::InvalidName { name: bad.name.clone() },
				});
			}
			let index = catalog.languages.len();
			let raw = u32::try_from(index).map_err(|_| CatalogError::TooManyLanguages { count: index })?;
			let id = LanguageId::new(raw);
			catalog.by_name.insert(key, id);
			catalog.languages.push(CatalogLanguage { spec, initialized: false });
		}
		Ok(catalog)
	}

	pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
		let file: CatalogFile = toml::from_str(source)?;
		Self::new(file.languages)
	}

	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	pub fn len(&self) -> usize {
		self.languages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}

	pub fn is_initialized(&self, language: LanguageId) -> bool {
		self.languages.get(language.index()).is_some_and(|l| l.initialized)
	}

	fn declare(&mut self, language: LanguageId, registry: &mut XtagRegistry) {
		let Some(lang) = self.languages.get_mut(language.index()) else {
			error!(%language, "initialization requested for unknown language");
			return;
		};
		if lang.initialized {
			return;
		}
		lang.initialized = true;

		debug!(language = %lang.spec.name, extras = lang.spec.extras.len(), "declaring extras");
		for extra in &lang.spec.extras {
			let def = XtagDefinition::new(extra.name.as_str(), extra.description.as_str(), extra.enabled);
			if let Err(e) = registry.register(def, language) {
				error!(language = %lang.spec.name, "{e}");
			}
		}
	}
}

impl LanguageHost for Catalog {
	fn initialize_all(&mut self, registry: &mut XtagRegistry) {
		for index in 0..self.languages.len() {
			self.declare(LanguageId::from_index(index), registry);
		}
	}

	fn initialize(&mut self, language: LanguageId, registry: &mut XtagRegistry) {
		self.declare(language, registry);
	}

	fn language_name(&self, language: LanguageId) -> Option<&str> {
		self.languages.get(language.index()).map(|l| l.spec.name.as_str())
	}

	fn language_by_name(&self, name: &str) -> Option<LanguageId> {
		self.by_name.get(&name.to_lowercase()).copied()
	}

	fn languages(&self) -> Vec<LanguageId> {
		(0..self.languages.len()).map(LanguageId::from_index).collect()
	}
}
