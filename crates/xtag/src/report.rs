//! Listing of extras as a table.

use std::cmp::Ordering;
use std::io::{self, Write};

use crate::common::COMMON_XTAG_COUNT;
use crate::id::{LanguageId, XtagId};
use crate::registry::{NO_OWNER_LABEL, XtagRegistry};
use crate::table::{Line, Table};

/// Placeholder shown for extras without a letter.
pub const NO_LETTER_LABEL: char = '-';

const COLUMNS: [&str; 6] = ["LETTER", "NAME", "ENABLED", "LANGUAGE", "FIXED", "DESCRIPTION"];
const COL_LETTER: usize = 0;
const COL_NAME: usize = 1;
const COL_LANGUAGE: usize = 3;

/// Which extras a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
	/// The common extras.
	Common,
	/// The extras registered by one language.
	Language(LanguageId),
}

/// Table of extras, one line per extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XtagTable {
	table: Table,
}

impl Default for XtagTable {
	fn default() -> Self {
		Self::new()
	}
}

impl XtagTable {
	pub fn new() -> Self {
		Self {
			table: Table::new(&COLUMNS),
		}
	}

	pub fn add_common_lines(&mut self, registry: &XtagRegistry) {
		for index in 0..COMMON_XTAG_COUNT {
			self.add_line(registry, XtagId::from_index(index));
		}
	}

	pub fn add_language_lines(&mut self, registry: &XtagRegistry, language: LanguageId) {
		for id in registry.ids().skip(COMMON_XTAG_COUNT) {
			if registry.owner(id) == Some(language) {
				self.add_line(registry, id);
			}
		}
	}

	fn add_line(&mut self, registry: &XtagRegistry, id: XtagId) {
		let entry = registry.get(id);
		let def = entry.def();
		self.table
			.new_line()
			.push_char(def.letter.unwrap_or(NO_LETTER_LABEL))
			.push_text(def.name.as_str())
			.push_bool(registry.is_enabled(id))
			.push_text(registry.owner_label(entry.owner()))
			.push_bool(registry.is_fixed(id))
			.push_text(def.description.as_str());
	}

	pub fn table(&self) -> &Table {
		&self.table
	}

	pub fn sort(&mut self) {
		self.table.sort_by(compare_lines);
	}

	/// Sorts the lines and writes them to `out`.
	pub fn sort_and_print(&mut self, with_header: bool, machinable: bool, out: &mut dyn Write) -> io::Result<()> {
		self.sort();
		self.table.print(with_header, machinable, out)
	}
}

/// Common extras first, ordered by letter; then language extras grouped by
/// language name; name breaks every remaining tie.
fn compare_lines(a: &Line, b: &Line) -> Ordering {
	let a_lang = a.column(COL_LANGUAGE);
	let b_lang = b.column(COL_LANGUAGE);
	let a_common = a_lang == NO_OWNER_LABEL;
	let b_common = b_lang == NO_OWNER_LABEL;

	let first = match (a_common, b_common) {
		(true, false) => return Ordering::Less,
		(false, true) => return Ordering::Greater,
		(false, false) => a_lang.cmp(b_lang),
		(true, true) => a.column(COL_LETTER).cmp(b.column(COL_LETTER)),
	};
	first.then_with(|| a.column(COL_NAME).cmp(b.column(COL_NAME)))
}

impl XtagRegistry {
	/// Builds an unsorted report.
	pub fn build_report(&self, mode: ReportMode) -> XtagTable {
		let mut table = XtagTable::new();
		match mode {
			ReportMode::Common => table.add_common_lines(self),
			ReportMode::Language(language) => table.add_language_lines(self, language),
		}
		table
	}

	/// Declares every language's extras, then reports the common set and each
	/// language in host order.
	pub fn build_full_report(&mut self) -> XtagTable {
		self.initialize_all_languages();
		let mut table = self.build_report(ReportMode::Common);
		let languages = self.language_host().map(|host| host.languages()).unwrap_or_default();
		for language in languages {
			table.add_language_lines(self, language);
		}
		table
	}
}
