//! Lookup by letter and by name within a scope.
//!
//! Both lookups are a first-match scan from identity zero. Before scanning, a name
//! lookup may ask the language host to declare pending extras:
//!
//! * `Auto` with the registry-wide flag unset: set the flag, then initialize every language.
//! * A concrete language with the flag unset: initialize that language only; the flag stays
//!   unset so a later `Auto` lookup still performs the full initialization exactly once.
//! * `Common` (and every letter lookup): no initialization.

use tracing::trace;

use super::{XtagEntry, XtagRegistry};
use crate::id::{Scope, XtagId};

impl XtagRegistry {
	/// Finds the first extra with the given shorthand letter.
	///
	/// Extras without a letter never match, so `'\0'` is always "not found".
	pub fn find_by_letter(&self, letter: char) -> Option<XtagId> {
		// Letter lookups never initialize languages.
		self.scan(|entry| entry.def.letter == Some(letter))
	}

	/// Finds the first extra called `name` whose owner falls in `scope`.
	pub fn find_by_name(&mut self, name: &str, scope: Scope) -> Option<XtagId> {
		self.find_generic(scope, |entry| scope.matches(entry.owner) && entry.def.name == name)
	}

	fn find_generic(&mut self, scope: Scope, predicate: impl Fn(&XtagEntry) -> bool) -> Option<XtagId> {
		self.prepare_scope(scope);
		self.scan(predicate)
	}

	fn scan(&self, predicate: impl Fn(&XtagEntry) -> bool) -> Option<XtagId> {
		self.entries.iter().position(predicate).map(XtagId::from_index)
	}

	/// Declares the extras of every language, as an `Auto` lookup would.
	pub fn initialize_all_languages(&mut self) {
		self.prepare_scope(Scope::Auto);
	}

	/// Declares the extras of one language, as a lookup scoped to it would.
	pub fn initialize_language(&mut self, language: crate::id::LanguageId) {
		self.prepare_scope(Scope::Language(language));
	}

	fn prepare_scope(&mut self, scope: Scope) {
		if self.languages_initialized {
			return;
		}
		match scope {
			Scope::Auto => {
				self.languages_initialized = true;
				trace!("initializing every language before extra lookup");
				self.with_host(|host, registry| host.initialize_all(registry));
			}
			Scope::Language(language) => {
				trace!(%language, "initializing language before extra lookup");
				self.with_host(|host, registry| host.initialize(language, registry));
			}
			Scope::Common => {}
		}
	}

	/// Lends the language host the registry. Re-entrant requests made while the
	/// host is running find no host and do nothing.
	pub(crate) fn with_host(&mut self, f: impl FnOnce(&mut dyn super::LanguageHost, &mut XtagRegistry)) {
		if let Some(mut host) = self.host.take() {
			self.lent_names = host
				.languages()
				.into_iter()
				.filter_map(|lang| host.language_name(lang).map(|name| (lang, name.to_string())))
				.collect();
			f(host.as_mut(), self);
			self.lent_names.clear();
			self.host = Some(host);
		}
	}
}
