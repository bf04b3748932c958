//! `--extras` flag strings.
//!
//! Grammar: an optional leading sign followed by items.
//!
//! * `+` enables and `-` disables the items that follow, up to the next sign.
//! * Without a leading sign every extra in scope is first disabled, then the
//!   listed items are enabled.
//! * An item is a shorthand letter, `{name}`, or `*` for every extra in scope.
//!
//! Letters are only accepted in the common scope. A language scope declares that
//! language's extras first, so `*` and the implicit reset reach them. The whole
//! string is parsed and resolved before any extra is toggled, so a bad string
//! changes nothing.

use tracing::debug;

use crate::error::FlagError;
use crate::id::{Scope, XtagId};
use crate::registry::XtagRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
	All,
	Letter(char),
	Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Parsed {
	reset: bool,
	items: Vec<(bool, Item)>,
}

fn parse(flags: &str) -> Result<Parsed, FlagError> {
	let reset = !matches!(flags.chars().next(), Some('+' | '-'));
	let mut state = true;
	let mut items = Vec::new();
	let mut chars = flags.chars();

	while let Some(c) = chars.next() {
		match c {
			'+' => state = true,
			'-' => state = false,
			'*' => items.push((state, Item::All)),
			'{' => {
				let mut name = String::new();
				loop {
					match chars.next() {
						Some('}') => break,
						Some(c) => name.push(c),
						None => return Err(FlagError::UnterminatedName { flags: flags.to_string() }),
					}
				}
				if name.is_empty() {
					return Err(FlagError::EmptyName { flags: flags.to_string() });
				}
				items.push((state, Item::Name(name)));
			}
			letter => items.push((state, Item::Letter(letter))),
		}
	}

	Ok(Parsed { reset, items })
}

#[derive(Debug)]
enum Action {
	All(bool),
	One(XtagId, bool),
}

/// Applies an `--extras` flag string to the extras in `scope`.
pub fn apply_extras_flags(registry: &mut XtagRegistry, scope: Scope, flags: &str) -> Result<(), FlagError> {
	let parsed = parse(flags)?;
	if let Scope::Language(language) = scope {
		registry.initialize_language(language);
	}

	let mut actions = Vec::with_capacity(parsed.items.len());
	for (state, item) in parsed.items {
		let action = match item {
			Item::All => Action::All(state),
			Item::Letter(letter) => {
				if scope != Scope::Common {
					return Err(FlagError::LetterInLanguageScope { letter });
				}
				let id = registry.find_by_letter(letter).ok_or_else(|| FlagError::UnknownLetter {
					letter,
					flags: flags.to_string(),
				})?;
				Action::One(id, state)
			}
			Item::Name(name) => match registry.find_by_name(&name, scope) {
				Some(id) => Action::One(id, state),
				None => {
					return Err(FlagError::UnknownName {
						name,
						flags: flags.to_string(),
					});
				}
			},
		};
		actions.push(action);
	}

	if parsed.reset {
		debug!(?scope, "resetting extras before applying {flags:?}");
		registry.reset(scope, false);
	}
	for action in actions {
		match action {
			Action::All(state) => registry.reset(scope, state),
			Action::One(id, state) => {
				let old = registry.set_enabled(id, state);
				debug!(id = %id, name = registry.name(id), old, new = registry.is_enabled(id), "extra toggled");
			}
		}
	}
	Ok(())
}
