use std::path::Path;
use std::path::PathBuf;

pub const README_MD: &str = "# Title\n\nStable tag: 1.2.0\n\n[Link](http://x)\n";

pub const CHANGELOG_MD: &str = "# Changelog\n* entry one\n";

pub const STYLE_CSS: &str = "/*\nTheme Name: Example\nVersion:   1.0.0\nAuthor: Someone\n*/\n\nbody \
                             { margin: 0; }\n";

pub const PLUGIN_PHP: &str = "<?php\n/**\n * Plugin Name: Example\n * Version: 1.0.0\n \
                              */\n\ndefine('EXAMPLE_VERSION', '1.0.0' );\n";

/// Write `content` to `name` under `dir` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, content).unwrap();
	path
}
