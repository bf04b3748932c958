//! `xtags` binary.
//!
//! Builds the extras registry, applies `--extras` flags and prints listings.

mod cli;
mod commands;

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use xtags_registry::{Catalog, CommonHooks, DefaultFileKind, OutputTarget, XtagRegistry};

use crate::cli::Cli;
use crate::commands::{apply_flags, list_extras, print_enabled};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if cli.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::WARN
		})
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let mut registry = build_registry(&cli)?;
	apply_flags(&mut registry, &cli.extras, &cli.extras_for)?;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	match cli.list_extras.as_deref() {
		Some(which) => list_extras(&mut registry, which, cli.with_list_header, cli.machinable, &mut out)?,
		None => print_enabled(&registry, &mut out)?,
	}
	out.flush()?;
	Ok(())
}

fn build_registry(cli: &Cli) -> anyhow::Result<XtagRegistry> {
	let hooks = CommonHooks {
		output: Arc::new(OutputTarget {
			pseudo_tags: cli.output_format.can_print_pseudo_tags(),
			stdout: cli.output == Path::new("-"),
		}),
		file_kind: Arc::new(DefaultFileKind::default()),
	};
	let mut registry = XtagRegistry::initialize(hooks);

	if let Some(path) = &cli.catalog {
		let catalog = Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?;
		if catalog.is_empty() {
			warn!(path = %path.display(), "catalog declares no languages");
		} else {
			debug!(languages = catalog.len(), "catalog loaded");
		}
		registry.set_language_host(Box::new(catalog));
	}
	Ok(registry)
}
