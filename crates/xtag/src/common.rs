//! The common extras installed at startup.
//!
//! These are available regardless of language, carry the only single-letter
//! shorthands, and occupy identities `0..COMMON_XTAG_COUNT` in declaration order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::def::XtagDefinition;
use crate::id::XtagId;

/// Number of common extras.
pub const COMMON_XTAG_COUNT: usize = 9;

/// Identities of the common extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CommonXtag {
	FileScope = 0,
	InputFile,
	Pseudo,
	Qualified,
	Reference,
	Guest,
	Subparser,
	Subword,
	Anonymous,
}

impl CommonXtag {
	pub const ALL: [CommonXtag; COMMON_XTAG_COUNT] = [
		CommonXtag::FileScope,
		CommonXtag::InputFile,
		CommonXtag::Pseudo,
		CommonXtag::Qualified,
		CommonXtag::Reference,
		CommonXtag::Guest,
		CommonXtag::Subparser,
		CommonXtag::Subword,
		CommonXtag::Anonymous,
	];

	pub const fn id(self) -> XtagId {
		XtagId::from_u32(self as u32)
	}
}

impl From<CommonXtag> for XtagId {
	fn from(xtag: CommonXtag) -> Self {
		xtag.id()
	}
}

/// What the output writer can do, as far as extras are concerned.
pub trait OutputCapabilities: Send + Sync {
	/// Whether the selected output format can carry pseudo tags.
	fn can_print_pseudo_tags(&self) -> bool;
	/// Whether tags are written to standard output rather than a file.
	fn is_destination_stdout(&self) -> bool;
}

/// Switch for the default "file" kind emitted once per input file.
pub trait FileKindSwitch: Send + Sync {
	fn enable_default_file_kind(&self, state: bool);
}

/// Fixed output capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTarget {
	pub pseudo_tags: bool,
	pub stdout: bool,
}

impl Default for OutputTarget {
	fn default() -> Self {
		Self {
			pseudo_tags: true,
			stdout: false,
		}
	}
}

impl OutputCapabilities for OutputTarget {
	fn can_print_pseudo_tags(&self) -> bool {
		self.pseudo_tags
	}

	fn is_destination_stdout(&self) -> bool {
		self.stdout
	}
}

/// Default file kind state shared with the tag emitter.
#[derive(Debug, Default)]
pub struct DefaultFileKind(AtomicBool);

impl DefaultFileKind {
	pub fn new(enabled: bool) -> Self {
		Self(AtomicBool::new(enabled))
	}

	pub fn is_enabled(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

impl FileKindSwitch for DefaultFileKind {
	fn enable_default_file_kind(&self, state: bool) {
		self.0.store(state, Ordering::Relaxed);
	}
}

/// Collaborators consulted by the hooks of the common extras.
#[derive(Clone)]
pub struct CommonHooks {
	pub output: Arc<dyn OutputCapabilities>,
	pub file_kind: Arc<dyn FileKindSwitch>,
}

impl Default for CommonHooks {
	fn default() -> Self {
		Self {
			output: Arc::new(OutputTarget::default()),
			file_kind: Arc::new(DefaultFileKind::default()),
		}
	}
}

/// Builds the common definitions in identity order.
pub(crate) fn common_definitions(hooks: &CommonHooks) -> Vec<XtagDefinition> {
	let output_enabled = Arc::clone(&hooks.output);
	let output_fixed = Arc::clone(&hooks.output);
	let file_kind = Arc::clone(&hooks.file_kind);

	vec![
		XtagDefinition::new("fileScope", "Include tags of file scope", true).with_letter('F'),
		XtagDefinition::new(
			"inputFile",
			"Include an entry for the base file name of every input file",
			false,
		)
		.with_letter('f')
		.with_enable(move |def, state| {
			file_kind.enable_default_file_kind(state);
			def.enabled = state;
		}),
		XtagDefinition::new("pseudo", "Include pseudo tags", false)
			.with_letter('p')
			.with_is_enabled(move |_| output_enabled.can_print_pseudo_tags() && !output_enabled.is_destination_stdout())
			.with_is_fixed(move |_| !output_fixed.can_print_pseudo_tags()),
		XtagDefinition::new("qualified", "Include an extra class-qualified tag entry for each tag", false)
			.with_letter('q'),
		XtagDefinition::new("reference", "Include reference tags", false).with_letter('r'),
		XtagDefinition::new("guest", "Include tags generated by guest parsers", false).with_letter('g'),
		XtagDefinition::new("subparser", "Include tags generated by subparsers", true).with_letter('s'),
		XtagDefinition::new(
			"subword",
			"Include tags for subwords generated by splitting the original tag (only for ctags development)",
			false,
		),
		XtagDefinition::new("anonymous", "Include tags for non-named objects like lambda", true),
	]
}
