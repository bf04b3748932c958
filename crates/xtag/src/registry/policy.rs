//! Enable/disable resolution.

use tracing::debug;

use super::XtagRegistry;
use crate::id::{Scope, XtagId};

impl XtagRegistry {
	/// Effective enabled state of an extra.
	pub fn is_enabled(&self, id: XtagId) -> bool {
		self.get(id).def.effective_enabled()
	}

	/// Whether toggling the extra is currently forbidden.
	pub fn is_fixed(&self, id: XtagId) -> bool {
		self.get(id).def.effective_fixed()
	}

	/// Requests a new enabled state and returns the previous effective state.
	///
	/// Fixed extras keep their current state. Whatever happens, the definition's
	/// `is_enabled` hook is dropped: from here on the stored slot is authoritative.
	pub fn set_enabled(&mut self, id: XtagId, state: bool) -> bool {
		let def = &mut self.get_mut(id).def;
		let old = def.effective_enabled();

		if def.effective_fixed() {
			debug!(id = %id, name = %def.name, requested = state, kept = old, "extra is fixed");
			def.enabled = old;
		} else if let Some(hook) = def.enable.clone() {
			hook(def, state);
		} else {
			def.enabled = state;
		}
		def.is_enabled = None;

		old
	}

	/// Sets every extra in `scope` to `state`.
	pub fn reset(&mut self, scope: Scope, state: bool) {
		let ids: Vec<XtagId> = self.ids().filter(|&id| scope.matches(self.owner(id))).collect();
		for id in ids {
			self.set_enabled(id, state);
		}
	}
}
