use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::MdwpError;
use crate::MdwpResult;

/// Default config file name, resolved against the project root.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Label used to find the released version in the README.
pub const DEFAULT_STABLE_TAG_PATTERN: &str = "Stable tag";

/// Header key rewritten in style files.
pub const DEFAULT_VERSION_REPLACEMENT_PATTERN: &str = "Version";

/// Configuration loaded from a `config.json` file.
///
/// ```json
/// {
/// 	"readmeMdPath": "README.md",
/// 	"changelogMdPath": "CHANGELOG.md",
/// 	"readmeTxtPath": "readme.txt",
/// 	"stableTagPattern": "Stable tag",
/// 	"versionReplacementPattern": "Version",
/// 	"styleFiles": ["style.css"],
/// 	"phpFiles": ["my-plugin.php"]
/// }
/// ```
///
/// Every key is optional. Relative paths are resolved against the project
/// root with [`MdwpConfig::resolve`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MdwpConfig {
	/// Markdown README to transpile. Also the source of the version.
	#[serde(default = "default_readme_md_path")]
	pub readme_md_path: PathBuf,
	/// Markdown changelog appended under `== Changelog ==`.
	#[serde(default = "default_changelog_md_path")]
	pub changelog_md_path: PathBuf,
	/// Output path of the generated WordPress readme.
	#[serde(default = "default_readme_txt_path")]
	pub readme_txt_path: PathBuf,
	/// Label preceding the version in the README, e.g. `Stable tag`.
	/// Interpreted as a regex fragment.
	#[serde(default = "default_stable_tag_pattern")]
	pub stable_tag_pattern: String,
	/// Header key rewritten in every style file, e.g. `Version`.
	#[serde(default = "default_version_replacement_pattern")]
	pub version_replacement_pattern: String,
	/// Files carrying a `Version: x.y.z` style header.
	#[serde(default)]
	pub style_files: Vec<PathBuf>,
	/// Plugin source files carrying a docblock `Version:` and/or a
	/// `define('<NAME>_VERSION', 'x.y.z');` constant.
	#[serde(default)]
	pub php_files: Vec<PathBuf>,
}

fn default_readme_md_path() -> PathBuf {
	PathBuf::from("README.md")
}

fn default_changelog_md_path() -> PathBuf {
	PathBuf::from("CHANGELOG.md")
}

fn default_readme_txt_path() -> PathBuf {
	PathBuf::from("readme.txt")
}

fn default_stable_tag_pattern() -> String {
	DEFAULT_STABLE_TAG_PATTERN.to_string()
}

fn default_version_replacement_pattern() -> String {
	DEFAULT_VERSION_REPLACEMENT_PATTERN.to_string()
}

impl Default for MdwpConfig {
	fn default() -> Self {
		Self {
			readme_md_path: default_readme_md_path(),
			changelog_md_path: default_changelog_md_path(),
			readme_txt_path: default_readme_txt_path(),
			stable_tag_pattern: default_stable_tag_pattern(),
			version_replacement_pattern: default_version_replacement_pattern(),
			style_files: vec![],
			php_files: vec![],
		}
	}
}

impl MdwpConfig {
	/// The config path used when none is given explicitly.
	#[must_use]
	pub fn resolve_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
		match explicit {
			Some(path) => root.join(path),
			None => root.join(CONFIG_FILE_NAME),
		}
	}

	/// Load and parse the config at `path`. A missing file is an error: the
	/// pipeline cannot run without knowing its inputs.
	pub async fn load(path: &Path) -> MdwpResult<MdwpConfig> {
		let content = match tokio::fs::read_to_string(path).await {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				return Err(MdwpError::ConfigNotFound {
					path: path.display().to_string(),
				});
			}
			Err(e) => return Err(e.into()),
		};

		Self::from_json(&content).map_err(|reason| {
			MdwpError::ConfigParse {
				path: path.display().to_string(),
				reason,
			}
		})
	}

	/// Parse a config from JSON text.
	pub fn from_json(content: &str) -> Result<MdwpConfig, String> {
		serde_json::from_str(content).map_err(|e| e.to_string())
	}

	/// Return a copy with every relative path joined onto `root`.
	#[must_use]
	pub fn resolve(&self, root: &Path) -> MdwpConfig {
		MdwpConfig {
			readme_md_path: root.join(&self.readme_md_path),
			changelog_md_path: root.join(&self.changelog_md_path),
			readme_txt_path: root.join(&self.readme_txt_path),
			stable_tag_pattern: self.stable_tag_pattern.clone(),
			version_replacement_pattern: self.version_replacement_pattern.clone(),
			style_files: self.style_files.iter().map(|path| root.join(path)).collect(),
			php_files: self.php_files.iter().map(|path| root.join(path)).collect(),
		}
	}
}
