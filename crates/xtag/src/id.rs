//! Dense identities for extras and the languages that own them.

use core::fmt;

/// Dense identity of a registered extra.
///
/// Assigned in registration order starting at zero and never reused, so an
/// `XtagId` stays valid for the lifetime of the registry that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XtagId(u32);

impl XtagId {
	/// Creates an identity from its raw index.
	pub const fn from_u32(raw: u32) -> Self {
		Self(raw)
	}

	/// Returns the raw index.
	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the slot of this identity in the registry table.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}

	pub(crate) fn from_index(index: usize) -> Self {
		debug_assert!(index <= u32::MAX as usize);
		Self(index as u32)
	}
}

impl fmt::Display for XtagId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Identity of a language known to the owning-scope subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageId(u32);

impl LanguageId {
	pub const fn new(raw: u32) -> Self {
		Self(raw)
	}

	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the position of this language in a host's language table.
	///
	/// `usize` is at least 32 bits on every supported target.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}

	/// Builds an identity from a table position.
	///
	/// Callers hold tables whose length was checked against `u32::MAX` on insertion.
	pub(crate) fn from_index(index: usize) -> Self {
		debug_assert!(index <= u32::MAX as usize);
		Self(index as u32)
	}
}

impl fmt::Display for LanguageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "language#{}", self.0)
	}
}

/// Scope selector for name lookups, resets and flag application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
	/// Wildcard: matches every owner and forces every language to declare its extras.
	Auto,
	/// Extras with no owner (the common set).
	Common,
	/// Extras owned by one language.
	Language(LanguageId),
}

impl Scope {
	/// Returns true if an extra owned by `owner` belongs to this scope.
	pub fn matches(self, owner: Option<LanguageId>) -> bool {
		match self {
			Scope::Auto => true,
			Scope::Common => owner.is_none(),
			Scope::Language(lang) => owner == Some(lang),
		}
	}
}

impl From<Option<LanguageId>> for Scope {
	fn from(owner: Option<LanguageId>) -> Self {
		owner.map_or(Scope::Common, Scope::Language)
	}
}
