use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn mdwp_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("mdwp"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Lay out a small plugin project with a config, docs and version files.
pub fn write_project(root: &Path) -> std::io::Result<()> {
	std::fs::write(
		root.join("config.json"),
		r#"{
	"readmeMdPath": "README.md",
	"changelogMdPath": "CHANGELOG.md",
	"readmeTxtPath": "readme.txt",
	"stableTagPattern": "Stable tag",
	"versionReplacementPattern": "Version",
	"styleFiles": ["style.css", "missing.css"],
	"phpFiles": ["plugin.php"]
}
"#,
	)?;
	std::fs::write(
		root.join("README.md"),
		"# Title\n\nStable tag: 1.2.0\n\n[Link](http://x)\n",
	)?;
	std::fs::write(root.join("CHANGELOG.md"), "# Changelog\n* entry one\n")?;
	std::fs::write(
		root.join("style.css"),
		"/*\nTheme Name: Example\nVersion:  1.0.0\n*/\n",
	)?;
	std::fs::write(
		root.join("plugin.php"),
		"<?php\n/**\n * Version: 1.0.0\n */\ndefine( 'EXAMPLE_VERSION', '1.0.0' );\n",
	)?;

	Ok(())
}
