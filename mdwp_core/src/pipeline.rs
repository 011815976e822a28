use std::path::Path;
use std::path::PathBuf;

use crate::FileRole;
use crate::MdwpConfig;
use crate::MdwpError;
use crate::MdwpResult;
use crate::SyncMode;
use crate::SyncReport;
use crate::build_readme_txt;
use crate::find_version;
use crate::sync_files;
use crate::version::DEFAULT_VERSION;

/// The generated `readme.txt` and the version it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReadme {
	pub path: PathBuf,
	pub version: String,
	pub content: String,
	/// `false` when the README had no version line and the default was used.
	pub version_found: bool,
}

/// Everything a full run produced.
#[derive(Debug)]
pub struct RunReport {
	pub readme: GeneratedReadme,
	pub style: SyncReport,
	pub source: SyncReport,
}

impl RunReport {
	pub fn is_ok(&self) -> bool {
		self.style.is_ok() && self.source.is_ok()
	}
}

/// Read the README and changelog, render them and write `readme.txt`.
///
/// Both inputs are read concurrently. Failing to read either one aborts
/// before anything is written.
pub async fn generate_readme(config: &MdwpConfig, mode: SyncMode) -> MdwpResult<GeneratedReadme> {
	let (readme_md, changelog_md) = tokio::try_join!(
		read_input(&config.readme_md_path),
		read_input(&config.changelog_md_path),
	)?;

	let found = find_version(&readme_md, &config.stable_tag_pattern);
	let version_found = found.is_some();
	let version = found.unwrap_or_else(|| {
		tracing::warn!(
			pattern = %config.stable_tag_pattern,
			"no version found in {}, falling back to {DEFAULT_VERSION}",
			config.readme_md_path.display(),
		);
		DEFAULT_VERSION.to_string()
	});

	let content = build_readme_txt(&readme_md, &changelog_md)?;
	let path = config.readme_txt_path.clone();

	if mode == SyncMode::Write {
		tokio::fs::write(&path, &content).await.map_err(|source| {
			MdwpError::OutputWrite {
				path: path.display().to_string(),
				source,
			}
		})?;
		tracing::info!("Generated {}", path.display());
	} else {
		tracing::info!("{} would be generated", path.display());
	}

	Ok(GeneratedReadme {
		path,
		version,
		content,
		version_found,
	})
}

/// Generate the readme, then sync the style files, then the source files.
///
/// `config` paths are used as given; call [`MdwpConfig::resolve`] first to
/// anchor them to a project root.
pub async fn run(config: &MdwpConfig, mode: SyncMode) -> MdwpResult<RunReport> {
	let readme = generate_readme(config, mode).await?;

	let style = sync_files(
		FileRole::Style,
		&readme.version,
		&config.style_files,
		&config.version_replacement_pattern,
		mode,
	)
	.await;

	let source = sync_files(
		FileRole::Source,
		&readme.version,
		&config.php_files,
		&config.version_replacement_pattern,
		mode,
	)
	.await;

	Ok(RunReport {
		readme,
		style,
		source,
	})
}

/// Load the config found under `root` and run the whole pipeline.
pub async fn run_in(root: &Path, config_path: Option<&Path>, mode: SyncMode) -> MdwpResult<RunReport> {
	let config_path = MdwpConfig::resolve_path(root, config_path);
	let config = MdwpConfig::load(&config_path).await?.resolve(root);
	tracing::debug!(config = %config_path.display(), "loaded config");

	run(&config, mode).await
}

async fn read_input(path: &Path) -> MdwpResult<String> {
	tokio::fs::read_to_string(path).await.map_err(|source| {
		MdwpError::InputRead {
			path: path.display().to_string(),
			source,
		}
	})
}
