use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Captures;
use regex::Regex;

/// Substituted when the README carries no version.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// ASCII digits only.
const SEMVER: &str = r"[0-9]+\.[0-9]+\.[0-9]+";

static DOCBLOCK_VERSION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(r"(?P<key>Version:)\s(?P<pad>\s*){SEMVER}")).expect("valid docblock regex")
});

static CONSTANT_VERSION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(&format!(r"(?P<head>define\(\s*'[A-Za-z0-9_]+_VERSION',\s*'){SEMVER}(?P<tail>'\s*\);)"))
		.expect("valid constant regex")
});

/// Find the version following `<pattern>:` at the start of a line.
///
/// Falls back to [`DEFAULT_VERSION`] when nothing matches. The pattern is a
/// regex fragment; when it does not compile it is matched literally.
pub fn extract_version(source: &str, pattern: &str) -> String {
	find_version(source, pattern).unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Like [`extract_version`] but reports whether a version was found.
pub fn find_version(source: &str, pattern: &str) -> Option<String> {
	let regex = label_regex(pattern, |label| {
		format!(r"(?m)^(?:{label})\s*:\s*(?P<version>{SEMVER})")
	});

	regex
		.captures(source)
		.and_then(|captures| captures.name("version"))
		.map(|found| found.as_str().to_string())
}

/// The kinds of version declaration that can be rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VersionDialect {
	/// `<key>: 1.2.3` header as found in theme and plugin style sheets. Any
	/// whitespace after the `: ` is preserved.
	StyleHeader { key: String },
	/// `Version: 1.2.3` line in a source file docblock.
	SourceDocblock,
	/// `define( 'PLUGIN_VERSION', '1.2.3' );` constant.
	SourceConstant,
}

impl VersionDialect {
	/// Compile the dialect into a rule ready to apply.
	pub fn compile(&self) -> VersionRule {
		let regex = match self {
			Self::StyleHeader { key } => {
				label_regex(key, |key| format!(r"(?P<key>{key})\s*:\s(?P<pad>\s*){SEMVER}"))
			}
			Self::SourceDocblock => DOCBLOCK_VERSION.clone(),
			Self::SourceConstant => CONSTANT_VERSION.clone(),
		};

		VersionRule {
			dialect: self.clone(),
			regex,
		}
	}
}

/// A [`VersionDialect`] with its pattern compiled.
#[derive(Debug, Clone)]
pub struct VersionRule {
	dialect: VersionDialect,
	regex: Regex,
}

impl VersionRule {
	/// Replace the first declaration in `content` with `version`. Returns
	/// the content untouched when there is no declaration.
	pub fn apply<'a>(&self, content: &'a str, version: &str) -> Cow<'a, str> {
		self.regex.replacen(content, 1, |captures: &Captures<'_>| {
			let group = |name| captures.name(name).map_or("", |found| found.as_str());

			match self.dialect {
				VersionDialect::StyleHeader { .. } => {
					format!("{}: {}{version}", group("key"), group("pad"))
				}
				VersionDialect::SourceDocblock => format!("{} {}{version}", group("key"), group("pad")),
				VersionDialect::SourceConstant => format!("{}{version}{}", group("head"), group("tail")),
			}
		})
	}
}

/// What kind of file a target is, which decides the dialects applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
	Style,
	Source,
}

impl FileRole {
	pub fn dialects(self, style_key: &str) -> Vec<VersionDialect> {
		match self {
			Self::Style => {
				vec![VersionDialect::StyleHeader {
					key: style_key.to_string(),
				}]
			}
			Self::Source => vec![VersionDialect::SourceDocblock, VersionDialect::SourceConstant],
		}
	}

	pub fn rules(self, style_key: &str) -> Vec<VersionRule> {
		self.dialects(style_key)
			.iter()
			.map(VersionDialect::compile)
			.collect()
	}
}

/// Apply every rule in order, each independently of the others.
pub fn apply_rules(content: &str, version: &str, rules: &[VersionRule]) -> String {
	rules.iter().fold(content.to_string(), |current, rule| {
		rule.apply(&current, version).into_owned()
	})
}

/// Build a regex around a user supplied label. The label is always wrapped
/// in its own group, so alternations and capture groups inside it never leak
/// into the surrounding pattern. Labels that are not valid regex syntax on
/// their own are escaped and matched literally.
fn label_regex(label: &str, build: impl Fn(&str) -> String) -> Regex {
	let compiled = Regex::new(label)
		.ok()
		.and_then(|_| Regex::new(&build(label)).ok());

	compiled.unwrap_or_else(|| {
		tracing::debug!(label, "pattern is not a valid regex, matching literally");
		Regex::new(&build(&regex::escape(label))).expect("escaped label is a valid regex")
	})
}
