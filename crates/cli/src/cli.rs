use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "xtags")]
#[command(about = "List and toggle optional tag categories (extras)")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// TOML catalog of languages and the extras they define
	#[arg(long, value_name = "PATH")]
	pub catalog: Option<PathBuf>,

	/// Extras to enable or disable, e.g. `+q-F` or `+{qualified}`
	#[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
	pub extras: Vec<String>,

	/// Language-specific extras, e.g. `Fortran=+{linkName}`
	#[arg(long = "extras-for", value_name = "LANG=FLAGS", allow_hyphen_values = true)]
	pub extras_for: Vec<String>,

	/// List extras: common ones by default, `all`, or those of one language
	#[arg(long, value_name = "LANGUAGE", num_args = 0..=1, default_missing_value = "NONE")]
	pub list_extras: Option<String>,

	/// Print a header line in listings
	#[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
	pub with_list_header: bool,

	/// Tab-separated listing output
	#[arg(long)]
	pub machinable: bool,

	/// Tag file destination (`-` for standard output)
	#[arg(short = 'o', long, value_name = "FILE", default_value = "tags")]
	pub output: PathBuf,

	/// Tag file format
	#[arg(long, value_enum, default_value_t = OutputFormat::UCtags)]
	pub output_format: OutputFormat,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

/// Tag file formats. Only some can carry pseudo tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	#[value(name = "u-ctags")]
	UCtags,
	#[value(name = "e-ctags")]
	ECtags,
	Etags,
	Xref,
	Json,
}

impl OutputFormat {
	pub fn can_print_pseudo_tags(self) -> bool {
		matches!(self, OutputFormat::UCtags | OutputFormat::ECtags | OutputFormat::Json)
	}
}
