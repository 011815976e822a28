use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdwp_cli::MdwpCli;
use mdwp_core::RunReport;
use mdwp_core::SyncMode;
use mdwp_core::SyncReport;
use mdwp_core::run_in;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdwpCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		match e.downcast::<mdwp_core::MdwpError>() {
			Ok(mdwp_err) => {
				let report: miette::Report = (*mdwp_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn resolve_root(args: &MdwpCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run(args: &MdwpCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mode = if args.dry_run {
		SyncMode::DryRun
	} else {
		SyncMode::Write
	};

	// Reads and writes are concurrent within a batch but never parallel.
	let rt = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build()?;
	let report = rt.block_on(run_in(&root, args.config.as_deref(), mode))?;

	print_summary(&report, &root, mode, args.verbose);

	Ok(())
}

fn print_summary(report: &RunReport, root: &Path, mode: SyncMode, verbose: bool) {
	let readme_path = make_relative(&report.readme.path, root);
	let version = &report.readme.version;

	if mode == SyncMode::DryRun {
		println!("Dry run: would generate {readme_path} (version {version})");
	} else {
		println!("Generated {readme_path} (version {version})");
	}

	for (label, batch) in [("style", &report.style), ("PHP", &report.source)] {
		print_batch(label, batch, root, mode, verbose);
	}
}

fn print_batch(label: &str, batch: &SyncReport, root: &Path, mode: SyncMode, verbose: bool) {
	if batch.files.is_empty() {
		return;
	}

	let updated: Vec<_> = batch.updated().collect();
	let verb = if mode == SyncMode::DryRun {
		"Would update"
	} else {
		"Updated"
	};
	println!(
		"{verb} {} of {} {label} file(s).",
		colored!(updated.len(), green),
		batch.files.len()
	);

	if verbose {
		for path in &updated {
			println!("  {}", make_relative(path, root));
		}
	}

	let failed = batch.failures().count();
	if failed > 0 {
		eprintln!(
			"{} skipped {failed} {label} file(s), see the log above.",
			colored!("warning:", yellow)
		);
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
