//! Extra definitions and their optional behavior hooks.

use std::sync::Arc;

use crate::id::XtagId;

/// Computes the effective enabled or fixed state of a definition.
pub type StateHook = Arc<dyn Fn(&XtagDefinition) -> bool + Send + Sync>;

/// Applies an explicit enable request; responsible for storing the new state.
pub type EnableHook = Arc<dyn Fn(&mut XtagDefinition, bool) + Send + Sync>;

/// Describes one category of extra tag entries.
///
/// Everything except the `enabled` slot and the `is_enabled` hook is fixed once
/// the definition is registered. The hooks are late-bound so that a category can
/// derive its state from another subsystem (for instance whether the output
/// writer supports pseudo tags).
#[derive(Clone)]
pub struct XtagDefinition {
	/// Stored enabled state, consulted when no `is_enabled` hook is present.
	pub enabled: bool,
	/// Single-character shorthand. Only common extras carry one.
	pub letter: Option<char>,
	pub name: String,
	pub description: String,
	/// Overrides the stored state until the first explicit toggle.
	pub is_enabled: Option<StateHook>,
	/// Reports whether toggling is currently forbidden.
	pub is_fixed: Option<StateHook>,
	/// Replaces the plain store performed by [`crate::XtagRegistry::set_enabled`].
	pub enable: Option<EnableHook>,
	pub(crate) xtype: Option<XtagId>,
}

impl XtagDefinition {
	/// Creates a plain definition with no shorthand and no hooks.
	pub fn new(name: impl Into<String>, description: impl Into<String>, enabled: bool) -> Self {
		Self {
			enabled,
			letter: None,
			name: name.into(),
			description: description.into(),
			is_enabled: None,
			is_fixed: None,
			enable: None,
			xtype: None,
		}
	}

	pub fn with_letter(mut self, letter: char) -> Self {
		self.letter = Some(letter);
		self
	}

	pub fn with_is_enabled(mut self, hook: impl Fn(&XtagDefinition) -> bool + Send + Sync + 'static) -> Self {
		self.is_enabled = Some(Arc::new(hook));
		self
	}

	pub fn with_is_fixed(mut self, hook: impl Fn(&XtagDefinition) -> bool + Send + Sync + 'static) -> Self {
		self.is_fixed = Some(Arc::new(hook));
		self
	}

	pub fn with_enable(mut self, hook: impl Fn(&mut XtagDefinition, bool) + Send + Sync + 'static) -> Self {
		self.enable = Some(Arc::new(hook));
		self
	}

	/// Returns the identity assigned at registration, if any.
	pub fn xtype(&self) -> Option<XtagId> {
		self.xtype
	}

	/// Resolves the effective enabled state: the hook if present, else the stored slot.
	pub fn effective_enabled(&self) -> bool {
		match &self.is_enabled {
			Some(hook) => hook(self),
			None => self.enabled,
		}
	}

	/// Resolves the effective fixed state. Definitions without a hook are never fixed.
	pub fn effective_fixed(&self) -> bool {
		self.is_fixed.as_ref().is_some_and(|hook| hook(self))
	}
}

impl core::fmt::Debug for XtagDefinition {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("XtagDefinition")
			.field("xtype", &self.xtype)
			.field("letter", &self.letter)
			.field("name", &self.name)
			.field("enabled", &self.enabled)
			.field("is_enabled", &self.is_enabled.as_ref().map(|_| ".."))
			.field("is_fixed", &self.is_fixed.as_ref().map(|_| ".."))
			.field("enable", &self.enable.as_ref().map(|_| ".."))
			.finish_non_exhaustive()
	}
}

/// Returns true if `name` is non-empty and strictly alphanumeric.
pub(crate) fn is_valid_name(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Verifies that a definition without hooks reports its stored state.
	#[test]
	fn test_plain_definition_uses_stored_slot() {
		let mut def = XtagDefinition::new("plain", "", false);
		assert!(!def.effective_enabled());
		def.enabled = true;
		assert!(def.effective_enabled());
		assert!(!def.effective_fixed());
	}

	/// Verifies that state hooks take precedence over the stored slot.
	#[test]
	fn test_hooks_override_stored_slot() {
		let def = XtagDefinition::new("hooked", "", false)
			.with_is_enabled(|_| true)
			.with_is_fixed(|d| !d.enabled);
		assert!(def.effective_enabled());
		assert!(def.effective_fixed());
	}

	/// Verifies which extra names are accepted.
	#[test]
	fn test_name_validation() {
		assert!(is_valid_name("qualified"));
		assert!(is_valid_name("linkName2"));
		assert!(!is_valid_name(""));
		assert!(!is_valid_name("file-scope"));
		assert!(!is_valid_name("with space"));
		assert!(!is_valid_name("{braced}"));
	}
}
