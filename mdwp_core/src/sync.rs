use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::FileRole;
use crate::MdwpError;
use crate::MdwpResult;
use crate::VersionRule;
use crate::apply_rules;

/// Whether a batch writes its results back to disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncMode {
	#[default]
	Write,
	/// Compute every file's result without writing anything.
	DryRun,
}

/// Result of synchronizing one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
	/// At least one version declaration was rewritten.
	Updated,
	/// Nothing to rewrite, either no declaration matched or it already held
	/// the version. The content is written back as is.
	Unchanged,
}

#[derive(Debug)]
pub struct FileSync {
	pub path: PathBuf,
	pub result: MdwpResult<FileStatus>,
}

/// Per-file outcomes of a batch, in the order the files were given.
#[derive(Debug, Default)]
pub struct SyncReport {
	pub files: Vec<FileSync>,
}

impl SyncReport {
	pub fn updated(&self) -> impl Iterator<Item = &Path> {
		self.with_status(FileStatus::Updated)
	}

	pub fn unchanged(&self) -> impl Iterator<Item = &Path> {
		self.with_status(FileStatus::Unchanged)
	}

	pub fn failures(&self) -> impl Iterator<Item = (&Path, &MdwpError)> {
		self.files.iter().filter_map(|file| {
			match &file.result {
				Err(error) => Some((file.path.as_path(), error)),
				Ok(_) => None,
			}
		})
	}

	pub fn is_ok(&self) -> bool {
		self.failures().next().is_none()
	}

	fn with_status(&self, status: FileStatus) -> impl Iterator<Item = &Path> {
		self.files.iter().filter_map(move |file| {
			match &file.result {
				Ok(found) if *found == status => Some(file.path.as_path()),
				_ => None,
			}
		})
	}
}

/// Rewrite the `<key_pattern>: x.y.z` header of every style file.
pub async fn sync_style_files(version: &str, files: &[PathBuf], key_pattern: &str) -> SyncReport {
	sync_files(FileRole::Style, version, files, key_pattern, SyncMode::Write).await
}

/// Rewrite the docblock `Version:` line and the `*_VERSION` constant of every
/// source file.
pub async fn sync_source_files(version: &str, files: &[PathBuf]) -> SyncReport {
	sync_files(FileRole::Source, version, files, "", SyncMode::Write).await
}

/// Synchronize a batch of files of the same role.
///
/// Every file is processed in its own task and the batch resolves once all
/// of them have finished. A failing file is logged and reported; it never
/// stops the rest of the batch.
pub async fn sync_files(
	role: FileRole,
	version: &str,
	files: &[PathBuf],
	style_key: &str,
	mode: SyncMode,
) -> SyncReport {
	let rules: Arc<[VersionRule]> = role.rules(style_key).into();
	let version: Arc<str> = Arc::from(version);
	let mut tasks = JoinSet::new();

	for (index, path) in files.iter().cloned().enumerate() {
		let rules = Arc::clone(&rules);
		let version = Arc::clone(&version);
		tasks.spawn(async move {
			let result = sync_file(&path, &version, &rules, mode).await;
			(index, FileSync { path, result })
		});
	}

	let mut finished = Vec::with_capacity(files.len());
	while let Some(joined) = tasks.join_next().await {
		match joined {
			Ok(entry) => finished.push(entry),
			Err(error) => tracing::error!(%error, "version sync task did not complete"),
		}
	}
	finished.sort_by_key(|(index, _)| *index);

	let report = SyncReport {
		files: finished.into_iter().map(|(_, entry)| entry).collect(),
	};
	log_report(&report, &version, mode);

	report
}

async fn sync_file(
	path: &Path,
	version: &str,
	rules: &[VersionRule],
	mode: SyncMode,
) -> MdwpResult<FileStatus> {
	let content = tokio::fs::read_to_string(path)
		.await
		.map_err(|e| MdwpError::target_file(path, e))?;
	let updated = apply_rules(&content, version, rules);
	let status = if updated == content {
		FileStatus::Unchanged
	} else {
		FileStatus::Updated
	};

	if mode == SyncMode::Write {
		tokio::fs::write(path, updated)
			.await
			.map_err(|e| MdwpError::target_file(path, e))?;
	}

	Ok(status)
}

fn log_report(report: &SyncReport, version: &str, mode: SyncMode) {
	for file in &report.files {
		let path = file.path.display();
		match &file.result {
			Ok(FileStatus::Updated) if mode == SyncMode::DryRun => {
				tracing::info!("{path} would be updated to version {version}");
			}
			Ok(FileStatus::Updated) => tracing::info!("{path} updated with version {version}"),
			Ok(FileStatus::Unchanged) => {
				tracing::debug!("{path} has no version declaration to update");
			}
			Err(MdwpError::TargetFileMissing { .. }) => {
				tracing::warn!("{path} does not exist, skipping");
			}
			Err(error) => tracing::error!("error updating {path}: {error}"),
		}
	}
}
