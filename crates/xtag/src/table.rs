//! Column-aligned tabular output.
//!
//! Human output pads every column but the last to its widest cell and separates
//! columns with one space. Machine output separates columns with tabs. Either way
//! the optional header line is prefixed with `#`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::io::{self, Write};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
	Text(String),
	Bool(bool),
}

impl Cell {
	/// Rendered text of the cell.
	pub fn render(&self, machinable: bool) -> Cow<'_, str> {
		match (self, machinable) {
			(Cell::Text(s), _) => Cow::Borrowed(s),
			(Cell::Bool(true), false) => Cow::Borrowed("yes"),
			(Cell::Bool(false), false) => Cow::Borrowed("no"),
			(Cell::Bool(true), true) => Cow::Borrowed("TRUE"),
			(Cell::Bool(false), true) => Cow::Borrowed("FALSE"),
		}
	}

	/// Text used when comparing cells. Booleans compare by their human rendering.
	pub fn as_str(&self) -> &str {
		match self {
			Cell::Text(s) => s,
			Cell::Bool(true) => "yes",
			Cell::Bool(false) => "no",
		}
	}
}

/// One row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
	cells: Vec<Cell>,
}

impl Line {
	pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
		self.cells.push(Cell::Text(text.into()));
		self
	}

	pub fn push_char(&mut self, c: char) -> &mut Self {
		self.cells.push(Cell::Text(c.to_string()));
		self
	}

	pub fn push_bool(&mut self, value: bool) -> &mut Self {
		self.cells.push(Cell::Bool(value));
		self
	}

	/// Cell text at `column`, or `""` if the line is shorter.
	pub fn column(&self, column: usize) -> &str {
		self.cells.get(column).map_or("", Cell::as_str)
	}
}

/// A table with fixed column labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
	labels: Vec<&'static str>,
	lines: Vec<Line>,
}

impl Table {
	pub fn new(labels: &[&'static str]) -> Self {
		Self {
			labels: labels.to_vec(),
			lines: Vec::new(),
		}
	}

	/// Appends an empty line and returns it for filling.
	pub fn new_line(&mut self) -> &mut Line {
		self.lines.push(Line::default());
		let last = self.lines.len() - 1;
		&mut self.lines[last]
	}

	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	/// Stable sort of the lines.
	pub fn sort_by(&mut self, compare: impl FnMut(&Line, &Line) -> Ordering) {
		self.lines.sort_by(compare);
	}

	/// Writes the table to `out`.
	pub fn print(&self, with_header: bool, machinable: bool, out: &mut dyn Write) -> io::Result<()> {
		let header: Vec<String> = self
			.labels
			.iter()
			.enumerate()
			.map(|(i, label)| if i == 0 { format!("#{label}") } else { (*label).to_string() })
			.collect();

		if machinable {
			if with_header {
				writeln!(out, "{}", header.join("\t"))?;
			}
			for line in &self.lines {
				let cells: Vec<Cow<'_, str>> = line.cells.iter().map(|c| c.render(true)).collect();
				writeln!(out, "{}", cells.join("\t"))?;
			}
			return Ok(());
		}

		let mut widths = vec![0usize; self.labels.len()];
		if with_header {
			for (width, label) in widths.iter_mut().zip(&header) {
				*width = label.chars().count();
			}
		}
		for line in &self.lines {
			for (width, cell) in widths.iter_mut().zip(&line.cells) {
				*width = (*width).max(cell.render(false).chars().count());
			}
		}

		if with_header {
			write_padded(out, header.iter().map(|s| Cow::Borrowed(s.as_str())), &widths)?;
		}
		for line in &self.lines {
			write_padded(out, line.cells.iter().map(|c| c.render(false)), &widths)?;
		}
		Ok(())
	}
}

fn write_padded<'a>(out: &mut dyn Write, cells: impl Iterator<Item = Cow<'a, str>>, widths: &[usize]) -> io::Result<()> {
	let cells: Vec<Cow<'a, str>> = cells.collect();
	let last = cells.len().saturating_sub(1);
	for (i, cell) in cells.iter().enumerate() {
		if i == last {
			writeln!(out, "{cell}")?;
		} else {
			write!(out, "{cell:<width$} ", width = widths[i])?;
		}
	}
	if cells.is_empty() {
		writeln!(out)?;
	}
	Ok(())
}
