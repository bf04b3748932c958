//! Operations behind the command line: flag application and listings.

use std::io::{self, Write};

use anyhow::{Context, bail};
use xtags_registry::{LanguageId, ReportMode, Scope, XtagRegistry, apply_extras_flags};

/// Applies `--extras` strings to the common set, then `--extras-for` `LANG=FLAGS`
/// pairs to their languages.
pub fn apply_flags(registry: &mut XtagRegistry, extras: &[String], extras_for: &[String]) -> anyhow::Result<()> {
	for flags in extras {
		apply_extras_flags(registry, Scope::Common, flags).with_context(|| format!("--extras={flags}"))?;
	}
	for spec in extras_for {
		let Some((language, flags)) = spec.split_once('=') else {
			bail!("--extras-for expects LANG=FLAGS, got {spec:?}");
		};
		let language = resolve_language(registry, language)?;
		apply_extras_flags(registry, Scope::Language(language), flags)
			.with_context(|| format!("--extras-for={spec}"))?;
	}
	Ok(())
}

pub fn resolve_language(registry: &XtagRegistry, name: &str) -> anyhow::Result<LanguageId> {
	registry
		.language_host()
		.and_then(|host| host.language_by_name(name))
		.with_context(|| format!("unknown language {name:?}"))
}

/// Prints the extras table for `which`: `NONE` for the common set, `all` for
/// every extra, or a language name.
pub fn list_extras(
	registry: &mut XtagRegistry,
	which: &str,
	with_header: bool,
	machinable: bool,
	out: &mut dyn Write,
) -> anyhow::Result<()> {
	let mut table = if which.eq_ignore_ascii_case("NONE") {
		registry.build_report(ReportMode::Common)
	} else if which.eq_ignore_ascii_case("all") {
		registry.build_full_report()
	} else {
		let language = resolve_language(registry, which)?;
		registry.initialize_language(language);
		registry.build_report(ReportMode::Language(language))
	};

	table.sort_and_print(with_header, machinable, out)?;
	Ok(())
}

/// Prints one `name<TAB>language` line per enabled extra, in identity order.
pub fn print_enabled(registry: &XtagRegistry, out: &mut dyn Write) -> io::Result<()> {
	for id in registry.ids().filter(|&id| registry.is_enabled(id)) {
		writeln!(out, "{}\t{}", registry.name(id), registry.owner_label(registry.owner(id)))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use xtags_registry::{COMMON_XTAG_COUNT, Catalog, CommonHooks};

	use super::*;

	const CATALOG: &str = r#"
[[language]]
name = "Fortran"

[[language.extra]]
name = "linkName"
description = "Include the link name of procedures"

[[language.extra]]
name = "other"
description = "Something else"
enabled = true

[[language]]
name = "Ada"

[[language.extra]]
name = "qualified"
description = "Include qualified tags specific to Ada"
"#;

	fn registry() -> XtagRegistry {
		let catalog = Catalog::from_toml_str(CATALOG).unwrap();
		XtagRegistry::initialize(CommonHooks::default()).with_language_host(catalog)
	}

	fn strings(items: &[&str]) -> Vec<String> {
		items.iter().map(|s| s.to_string()).collect()
	}

	fn listing(registry: &mut XtagRegistry, which: &str) -> String {
		let mut out = Vec::new();
		list_extras(registry, which, true, true, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	fn enabled(registry: &XtagRegistry) -> String {
		let mut out = Vec::new();
		print_enabled(registry, &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	/// Verifies that `--extras-for` values without `=` are rejected.
	#[test]
	fn test_extras_for_requires_language_and_flags() {
		let mut reg = registry();
		let err = apply_flags(&mut reg, &[], &strings(&["Fortran"])).unwrap_err();
		assert_eq!(err.to_string(), "--extras-for expects LANG=FLAGS, got \"Fortran\"");
	}

	/// Verifies that unknown languages are reported by name.
	#[test]
	fn test_unknown_language_is_an_error() {
		let mut reg = registry();
		let err = apply_flags(&mut reg, &[], &strings(&["Cobol=+*"])).unwrap_err();
		assert_eq!(err.to_string(), "unknown language \"Cobol\"");

		let err = list_extras(&mut reg, "Cobol", true, false, &mut Vec::new()).unwrap_err();
		assert_eq!(err.to_string(), "unknown language \"Cobol\"");

		let mut bare = XtagRegistry::initialize(CommonHooks::default());
		assert!(resolve_language(&bare, "Fortran").is_err());
		assert!(list_extras(&mut bare, "Fortran", true, false, &mut Vec::new()).is_err());
	}

	/// Verifies that language names resolve case-insensitively.
	#[test]
	fn test_resolve_language_ignores_case() {
		let reg = registry();
		assert_eq!(resolve_language(&reg, "fortran").unwrap(), LanguageId::new(0));
		assert_eq!(resolve_language(&reg, "ADA").unwrap(), LanguageId::new(1));
	}

	/// Verifies that a bad `--extras` string names the offending option.
	#[test]
	fn test_bad_common_flags_carry_option_context() {
		let mut reg = registry();
		let err = apply_flags(&mut reg, &strings(&["+Z"]), &[]).unwrap_err();
		assert_eq!(err.to_string(), "--extras=+Z");
	}

	/// Verifies that `*` in a language scope enables extras the language had not declared.
	#[test]
	fn test_language_star_enables_every_language_extra() {
		let mut reg = registry();
		apply_flags(&mut reg, &strings(&["-{fileScope}"]), &strings(&["fortran=+*"])).unwrap();
		assert_eq!(reg.count(), COMMON_XTAG_COUNT + 2);

		let text = enabled(&reg);
		assert!(text.contains("linkName\tFortran\n"), "{text}");
		assert!(text.contains("other\tFortran\n"), "{text}");
		assert!(!text.contains("fileScope"), "{text}");
	}

	/// Verifies that unsigned language flags reset that language before enabling.
	#[test]
	fn test_unsigned_language_flags_reset_the_language() {
		let mut reg = registry();
		apply_flags(&mut reg, &[], &strings(&["Fortran={linkName}"])).unwrap();

		let text = enabled(&reg);
		assert!(text.contains("linkName\tFortran\n"), "{text}");
		assert!(!text.contains("other"), "{text}");
		assert!(text.starts_with("fileScope\tNONE\n"), "{text}");
	}

	/// Verifies the common listing in machine-readable form.
	#[test]
	fn test_list_common_extras() {
		let mut reg = registry();
		let text = listing(&mut reg, "NONE");
		let lines: Vec<&str> = text.lines().collect();

		assert_eq!(lines.len(), 1 + COMMON_XTAG_COUNT);
		assert_eq!(lines[0], "#LETTER\tNAME\tENABLED\tLANGUAGE\tFIXED\tDESCRIPTION");
		assert_eq!(lines[3], "F\tfileScope\tTRUE\tNONE\tFALSE\tInclude tags of file scope");
		assert_eq!(reg.count(), COMMON_XTAG_COUNT, "no language is declared");
	}

	/// Verifies that a language listing declares and lists only that language.
	#[test]
	fn test_list_one_language() {
		let mut reg = registry();
		let text = listing(&mut reg, "fortran");
		assert_eq!(
			text,
			"#LETTER\tNAME\tENABLED\tLANGUAGE\tFIXED\tDESCRIPTION\n\
			 -\tlinkName\tFALSE\tFortran\tFALSE\tInclude the link name of procedures\n\
			 -\tother\tTRUE\tFortran\tFALSE\tSomething else\n"
		);
		assert_eq!(reg.count(), COMMON_XTAG_COUNT + 2);
	}

	/// Verifies that `all` lists the common set, then languages by name.
	#[test]
	fn test_list_all_extras() {
		let mut reg = registry();
		let text = listing(&mut reg, "all");
		let lines: Vec<&str> = text.lines().collect();

		assert_eq!(lines.len(), 1 + COMMON_XTAG_COUNT + 3);
		assert_eq!(
			lines[1 + COMMON_XTAG_COUNT..],
			[
				"-\tqualified\tFALSE\tAda\tFALSE\tInclude qualified tags specific to Ada",
				"-\tlinkName\tFALSE\tFortran\tFALSE\tInclude the link name of procedures",
				"-\tother\tTRUE\tFortran\tFALSE\tSomething else",
			]
		);
	}

	/// Verifies that the header can be left out.
	#[test]
	fn test_listing_without_header() {
		let mut reg = registry();
		let mut out = Vec::new();
		list_extras(&mut reg, "Ada", false, true, &mut out).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"-\tqualified\tFALSE\tAda\tFALSE\tInclude qualified tags specific to Ada\n"
		);
	}
}
