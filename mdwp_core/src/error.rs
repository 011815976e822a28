use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdwpError {
	#[error(transparent)]
	#[diagnostic(code(mdwp::io_error))]
	Io(#[from] std::io::Error),

	#[error("failure to load markdown: {0}")]
	#[diagnostic(code(mdwp::markdown))]
	Markdown(String),

	#[error("config file not found: `{path}`")]
	#[diagnostic(
		code(mdwp::config_not_found),
		help("create a `config.json` in the project root or pass `--config <file>`")
	)]
	ConfigNotFound { path: String },

	#[error("failed to parse config file `{path}`: {reason}")]
	#[diagnostic(
		code(mdwp::config_parse),
		help("check that the config is a JSON object with camelCase keys such as `readmeMdPath`")
	)]
	ConfigParse { path: String, reason: String },

	#[error("failed to read input document `{path}`")]
	#[diagnostic(
		code(mdwp::input_read),
		help("check `readmeMdPath` and `changelogMdPath` in the config")
	)]
	InputRead {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{path}`")]
	#[diagnostic(code(mdwp::output_write))]
	OutputWrite {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("target file not found: `{path}`")]
	#[diagnostic(
		code(mdwp::target_file_missing),
		help("remove the entry from `styleFiles` / `phpFiles` or create the file")
	)]
	TargetFileMissing { path: String },

	#[error("failed to update target file `{path}`")]
	#[diagnostic(code(mdwp::target_file_io))]
	TargetFileIo {
		path: String,
		#[source]
		source: std::io::Error,
	},
}

impl MdwpError {
	/// Classify an I/O failure on a style or source file.
	pub(crate) fn target_file(path: &std::path::Path, source: std::io::Error) -> Self {
		let path = path.display().to_string();
		if source.kind() == std::io::ErrorKind::NotFound {
			Self::TargetFileMissing { path }
		} else {
			Self::TargetFileIo { path, source }
		}
	}
}

pub type MdwpResult<T> = Result<T, MdwpError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
