use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;

#[derive(Parser)]
#[command(
	name = "mdwp",
	version,
	disable_version_flag = true,
	about = "Generate a WordPress plugin readme.txt from markdown and sync plugin versions.",
	long_about = "mdwp converts a project's README.md and CHANGELOG.md into a WordPress plugin \
	              readme.txt, then copies the README's `Stable tag` version into the configured \
	              style and PHP files.\n\nSettings are read from `config.json` in the project \
	              root:\n  readmeMdPath, changelogMdPath, readmeTxtPath, stableTagPattern,\n  \
	              versionReplacementPattern, styleFiles, phpFiles"
)]
pub struct MdwpCli {
	/// Print the version and exit.
	#[arg(long, short = 'v', action = ArgAction::Version)]
	pub version: Option<bool>,

	/// Path to the project root directory.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// Config file, relative to the project root. Defaults to `config.json`.
	#[arg(long, short)]
	pub config: Option<PathBuf>,

	/// Show what would change without writing any file.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Enable verbose output.
	#[arg(long, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}
