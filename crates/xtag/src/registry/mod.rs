//! Append-only registry of extras.
//!
//! # Mental model
//!
//! * [`XtagRegistry::initialize`] installs the common set at identities `0..COMMON_XTAG_COUNT`.
//! * Languages add their own extras through [`XtagRegistry::register`]; each call appends one
//!   entry and returns its dense identity.
//! * Entries are never removed or reordered, so identities are safe to cache.
//!
//! # Invariants
//!
//! * Entry `i` has identity `i`; entries below `COMMON_XTAG_COUNT` have no owner, all later
//!   entries are owned by a language.
//! * Registered names are alphanumeric. Rejected registrations leave the registry untouched.
//! * Extras registered after startup never carry a letter.
//! * Same-named entries form a forward chain ordered by identity (see [`XtagRegistry::next_sibling`]).
//!
//! # Lazy language initialization
//!
//! Lookups may ask the [`LanguageHost`] to declare extras that do not exist yet. An `Auto`
//! lookup initializes every language once and raises a registry-wide flag; a lookup for a
//! concrete language initializes only that language and leaves the flag alone, so each
//! language gets its own request until the first `Auto` lookup.

mod lookup;
mod policy;

use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::common::{COMMON_XTAG_COUNT, CommonHooks, common_definitions};
use crate::def::{XtagDefinition, is_valid_name};
use crate::error::XtagError;
use crate::id::{LanguageId, XtagId};

/// Label used for the owner of common extras.
pub const NO_OWNER_LABEL: &str = "NONE";

/// Owning-scope subsystem that knows about languages and declares their extras.
///
/// The registry is handed to the host while a language initializes so that the
/// host can call [`XtagRegistry::register`]. Hosts must tolerate repeated
/// initialization requests for the same language.
pub trait LanguageHost {
	/// Initializes every known language.
	fn initialize_all(&mut self, registry: &mut XtagRegistry);
	/// Initializes a single language.
	fn initialize(&mut self, language: LanguageId, registry: &mut XtagRegistry);
	/// Display name of a language.
	fn language_name(&self, language: LanguageId) -> Option<&str>;
	/// Resolves a display name (case-insensitively) to a language.
	fn language_by_name(&self, name: &str) -> Option<LanguageId>;
	/// Every known language, in declaration order.
	fn languages(&self) -> Vec<LanguageId>;
}

/// A definition bound to its owner and to the next same-named entry.
#[derive(Debug)]
pub struct XtagEntry {
	def: XtagDefinition,
	owner: Option<LanguageId>,
	sibling: Option<XtagId>,
}

impl XtagEntry {
	pub fn def(&self) -> &XtagDefinition {
		&self.def
	}

	/// Owning language, or `None` for common extras.
	pub fn owner(&self) -> Option<LanguageId> {
		self.owner
	}
}

/// Registry of every extra known to the process.
pub struct XtagRegistry {
	entries: Vec<XtagEntry>,
	host: Option<Box<dyn LanguageHost>>,
	/// Language names captured while the host is lent out and cannot be asked.
	lent_names: HashMap<LanguageId, String>,
	languages_initialized: bool,
}

impl XtagRegistry {
	/// Creates the registry and installs the common extras.
	pub fn initialize(hooks: CommonHooks) -> Self {
		let mut entries = Vec::with_capacity(COMMON_XTAG_COUNT);
		for (index, mut def) in common_definitions(&hooks).into_iter().enumerate() {
			def.xtype = Some(XtagId::from_index(index));
			entries.push(XtagEntry {
				def,
				owner: None,
				sibling: None,
			});
		}
		Self {
			entries,
			host: None,
			lent_names: HashMap::default(),
			languages_initialized: false,
		}
	}

	/// Attaches the subsystem consulted by lookups to declare language extras.
	pub fn with_language_host(mut self, host: impl LanguageHost + 'static) -> Self {
		self.host = Some(Box::new(host));
		self
	}

	pub fn set_language_host(&mut self, host: Box<dyn LanguageHost>) {
		self.host = Some(host);
	}

	pub fn language_host(&self) -> Option<&dyn LanguageHost> {
		self.host.as_deref()
	}

	/// Registers a language-owned extra and returns its identity.
	///
	/// The definition's letter is cleared: only common extras have shorthands.
	pub fn register(&mut self, mut def: XtagDefinition, owner: LanguageId) -> Result<XtagId, XtagError> {
		if !is_valid_name(&def.name) {
			return Err(XtagError::InvalidName { name: def.name });
		}
		def.letter = None;

		let id = XtagId::from_index(self.entries.len());
		def.xtype = Some(id);
		self.entries.push(XtagEntry {
			def,
			owner: Some(owner),
			sibling: None,
		});
		self.link_sibling(id);

		let entry = &self.entries[id.index()];
		debug!(
			id = %id,
			name = %entry.def.name,
			description = %entry.def.description,
			language = %self.owner_label(entry.owner),
			"Add extra"
		);
		Ok(id)
	}

	/// Points the nearest earlier entry with the same name at `id`.
	fn link_sibling(&mut self, id: XtagId) {
		let (earlier, rest) = self.entries.split_at_mut(id.index());
		let name = &rest[0].def.name;
		if let Some(prev) = earlier.iter_mut().rev().find(|e| e.def.name == *name) {
			assert!(
				prev.sibling.is_none(),
				"extra {:?} already shadowed by {:?} while linking {id}",
				prev.def.name,
				prev.sibling
			);
			prev.sibling = Some(id);
		}
	}

	/// Number of registered extras.
	pub fn count(&self) -> usize {
		self.entries.len()
	}

	/// Returns the entry for `id`.
	///
	/// # Panics
	///
	/// Panics if `id` was not produced by this registry.
	pub fn get(&self, id: XtagId) -> &XtagEntry {
		assert!(id.index() < self.entries.len(), "extra id {id} out of range (count {})", self.entries.len());
		&self.entries[id.index()]
	}

	pub(crate) fn get_mut(&mut self, id: XtagId) -> &mut XtagEntry {
		assert!(id.index() < self.entries.len(), "extra id {id} out of range (count {})", self.entries.len());
		&mut self.entries[id.index()]
	}

	pub fn definition(&self, id: XtagId) -> &XtagDefinition {
		&self.get(id).def
	}

	pub fn name(&self, id: XtagId) -> &str {
		&self.get(id).def.name
	}

	pub fn description(&self, id: XtagId) -> &str {
		&self.get(id).def.description
	}

	pub fn letter(&self, id: XtagId) -> Option<char> {
		self.get(id).def.letter
	}

	pub fn owner(&self, id: XtagId) -> Option<LanguageId> {
		self.get(id).owner
	}

	pub fn next_sibling(&self, id: XtagId) -> Option<XtagId> {
		self.get(id).sibling
	}

	/// Walks the same-name chain starting after `id`.
	pub fn siblings(&self, id: XtagId) -> impl Iterator<Item = XtagId> + '_ {
		std::iter::successors(self.next_sibling(id), |&next| self.next_sibling(next))
	}

	pub fn is_common(&self, id: XtagId) -> bool {
		id.index() < COMMON_XTAG_COUNT
	}

	/// Every identity in registration order.
	pub fn ids(&self) -> impl Iterator<Item = XtagId> + '_ {
		(0..self.entries.len()).map(XtagId::from_index)
	}

	pub fn entries(&self) -> &[XtagEntry] {
		&self.entries
	}

	/// Display label for an owner: the language name, or [`NO_OWNER_LABEL`].
	///
	/// Names stay available while the host is busy declaring extras.
	pub fn owner_label(&self, owner: Option<LanguageId>) -> String {
		let Some(lang) = owner else {
			return NO_OWNER_LABEL.to_string();
		};
		let name = match self.host.as_deref() {
			Some(host) => host.language_name(lang),
			None => self.lent_names.get(&lang).map(String::as_str),
		};
		name.map_or_else(|| lang.to_string(), str::to_string)
	}
}

impl core::fmt::Debug for XtagRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("XtagRegistry")
			.field("entries", &self.entries)
			.field("host", &self.host.as_ref().map(|_| ".."))
			.field("languages_initialized", &self.languages_initialized)
			.finish()
	}
}
