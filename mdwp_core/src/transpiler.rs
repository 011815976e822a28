use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::Block;
use crate::Document;
use crate::ListKind;
use crate::MdwpResult;

/// Separator placed between the rendered README and the rendered changelog.
pub const CHANGELOG_SEPARATOR: &str = "\n\n== Changelog ==\n";

static INLINE_LINK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^)]+)\)").expect("valid link regex"));

static LEADING_H1: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\A# [^\n]*(?:\n|\z)").expect("valid heading regex"));

/// Convert markdown into the WordPress plugin readme dialect.
///
/// Headings of level 1 to 3 become `=== x ===`, `== x ==` and `= x =`;
/// deeper headings keep their `#` prefix. List items become `* item` lines,
/// inline links become `text (url)` and runs of blank lines collapse to one.
/// The result is trimmed.
pub fn render(markdown: &str) -> MdwpResult<String> {
	let document = Document::parse(markdown)?;
	Ok(render_document(&document))
}

/// Render an already parsed document.
pub fn render_document(document: &Document) -> String {
	let mut output = String::new();

	for block in &document.blocks {
		render_block(block, &mut output);
	}

	output.trim().to_string()
}

fn render_block(block: &Block, output: &mut String) {
	match block {
		Block::Heading { level, text } => {
			let text = render_inline(text);
			let line = match level {
				1 => format!("=== {text} ==="),
				2 => format!("== {text} =="),
				3 => format!("= {text} ="),
				_ => format!("{} {text}", "#".repeat(usize::from(*level))),
			};
			push_line(output, &line);
		}
		Block::List { kind, items } => {
			for (index, item) in items.iter().enumerate() {
				let marker = match kind {
					ListKind::Bullet => "*".to_string(),
					ListKind::Ordered(start) => format!("{}.", u64::from(*start) + index as u64),
				};
				push_line(output, &format!("{marker} {}", render_inline(item)));
			}
			push_blank_line(output);
		}
		Block::Paragraph { text } => {
			push_line(output, &render_inline(text));
			push_blank_line(output);
		}
		Block::Blockquote { text } => {
			for line in render_inline(text).lines() {
				if line.is_empty() {
					push_line(output, ">");
				} else {
					push_line(output, &format!("> {line}"));
				}
			}
			push_blank_line(output);
		}
		Block::Blank => push_blank_line(output),
		Block::Raw(raw) => {
			push_line(output, raw);
			push_blank_line(output);
		}
	}
}

fn push_line(output: &mut String, line: &str) {
	output.push_str(line.trim_end());
	output.push('\n');
}

/// Terminate the current block with a blank line unless one is already
/// there.
fn push_blank_line(output: &mut String) {
	if output.is_empty() || output.ends_with("\n\n") {
		return;
	}

	if !output.ends_with('\n') {
		output.push('\n');
	}

	output.push('\n');
}

/// Rewrite each `[text](url)` as `text (url)`. Single pass.
pub fn render_inline(text: &str) -> Cow<'_, str> {
	INLINE_LINK.replace_all(text, "$1 ($2)")
}

/// Drop the first line when it is a level one heading (`# Title`).
///
/// Used on the changelog so the combined readme does not repeat a top level
/// title. At most one line is removed.
pub fn strip_leading_h1(text: &str) -> &str {
	match LEADING_H1.find(text) {
		Some(found) => &text[found.end()..],
		None => text,
	}
}

/// Build the full `readme.txt` body from the README and changelog markdown.
pub fn build_readme_txt(readme_md: &str, changelog_md: &str) -> MdwpResult<String> {
	let readme = render(readme_md)?;
	let changelog = render(strip_leading_h1(changelog_md))?;

	Ok(format!("{readme}{CHANGELOG_SEPARATOR}{changelog}"))
}
