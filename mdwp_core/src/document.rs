use markdown::ParseOptions;
use markdown::mdast::Node;
use markdown::to_mdast;

use crate::MdwpError;
use crate::MdwpResult;

/// Markdown source of a block, with `[text](url)` links still unresolved.
pub type InlineContent = String;

/// A parsed markdown document: top-level blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
	pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Block {
	Heading { level: u8, text: InlineContent },
	List { kind: ListKind, items: Vec<InlineContent> },
	Paragraph { text: InlineContent },
	Blockquote { text: InlineContent },
	/// At least one empty line separated the surrounding blocks.
	Blank,
	/// Any block without a WordPress readme equivalent (code, html, tables,
	/// thematic breaks, definitions). Kept verbatim.
	Raw(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
	Bullet,
	/// Ordered list with its starting number.
	Ordered(u32),
}

impl Document {
	/// Parse markdown into a flat block sequence.
	pub fn parse(content: impl AsRef<str>) -> MdwpResult<Self> {
		let content = content.as_ref();
		let options = ParseOptions::gfm();
		let mdast = to_mdast(content, &options).map_err(|e| MdwpError::Markdown(e.to_string()))?;
		let Some(children) = mdast.children() else {
			return Ok(Self::default());
		};

		let mut blocks = vec![];
		let mut previous_end: Option<usize> = None;

		for node in children {
			let Some((start, end)) = span(node) else {
				continue;
			};

			if previous_end.is_some_and(|end| has_blank_line(&content[end..start])) {
				blocks.push(Block::Blank);
			}

			blocks.push(lower_block(node, content));
			previous_end = Some(end);
		}

		tracing::debug!(blocks = blocks.len(), "parsed markdown document");

		Ok(Self { blocks })
	}
}

fn lower_block(node: &Node, source: &str) -> Block {
	match node {
		Node::Heading(heading) => {
			Block::Heading {
				level: heading.depth,
				text: children_source(&heading.children, source).to_string(),
			}
		}
		Node::Paragraph(_) => {
			Block::Paragraph {
				text: node_source(node, source).to_string(),
			}
		}
		Node::Blockquote(_) => {
			Block::Blockquote {
				text: strip_quote_markers(node_source(node, source)),
			}
		}
		Node::List(list) => {
			let kind = if list.ordered {
				ListKind::Ordered(list.start.unwrap_or(1))
			} else {
				ListKind::Bullet
			};
			let mut items = vec![];
			flatten_list_items(&list.children, source, &mut items);

			Block::List { kind, items }
		}
		_ => Block::Raw(node_source(node, source).to_string()),
	}
}

/// Collect every list item, including items of nested lists, in document
/// order. Each item's own content is joined onto a single line.
fn flatten_list_items(children: &[Node], source: &str, items: &mut Vec<InlineContent>) {
	for child in children {
		let Node::ListItem(item) = child else {
			continue;
		};

		let mut text = vec![];
		let mut nested = vec![];

		for part in &item.children {
			match part {
				Node::List(list) => nested.push(list),
				_ => text.push(join_lines(node_source(part, source))),
			}
		}

		items.push(text.join(" "));

		for list in nested {
			flatten_list_items(&list.children, source, items);
		}
	}
}

fn span(node: &Node) -> Option<(usize, usize)> {
	node.position()
		.map(|position| (position.start.offset, position.end.offset))
}

fn node_source<'a>(node: &Node, source: &'a str) -> &'a str {
	span(node).map_or("", |(start, end)| &source[start..end])
}

/// Source text spanning from the first child to the last child.
fn children_source<'a>(children: &[Node], source: &'a str) -> &'a str {
	let start = children.first().and_then(span).map(|(start, _)| start);
	let end = children.last().and_then(span).map(|(_, end)| end);

	match (start, end) {
		(Some(start), Some(end)) if start <= end => &source[start..end],
		_ => "",
	}
}

fn has_blank_line(gap: &str) -> bool {
	gap.matches('\n').count() >= 2
}

fn join_lines(text: &str) -> String {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

fn strip_quote_markers(text: &str) -> String {
	text.lines()
		.map(|line| {
			let line = line.trim_start();
			let line = line.strip_prefix('>').unwrap_or(line);
			line.strip_prefix(' ').unwrap_or(line)
		})
		.collect::<Vec<_>>()
		.join("\n")
}
