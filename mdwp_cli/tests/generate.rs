mod common;

use mdwp_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn generate_writes_readme_and_syncs_versions() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	common::mdwp_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Generated readme.txt (version 1.2.0)"))
		.stdout(predicates::str::contains("Updated 1 of 2 style file(s)."))
		.stdout(predicates::str::contains("Updated 1 of 1 PHP file(s)."))
		.stderr(predicates::str::contains("does not exist, skipping"));

	let readme_txt = std::fs::read_to_string(tmp.path().join("readme.txt"))?;
	assert_eq!(
		readme_txt,
		"=== Title ===\n\nStable tag: 1.2.0\n\nLink (http://x)\n\n== Changelog ==\n* entry one"
	);

	let style = std::fs::read_to_string(tmp.path().join("style.css"))?;
	assert_eq!(style, "/*\nTheme Name: Example\nVersion:  1.2.0\n*/\n");

	let plugin = std::fs::read_to_string(tmp.path().join("plugin.php"))?;
	assert_eq!(
		plugin,
		"<?php\n/**\n * Version: 1.2.0\n */\ndefine( 'EXAMPLE_VERSION', '1.2.0' );\n"
	);

	Ok(())
}

#[test]
fn dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;

	common::mdwp_cmd()
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run: would generate readme.txt"))
		.stdout(predicates::str::contains("Would update 1 of 2 style file(s)."));

	assert!(!tmp.path().join("readme.txt").exists());
	let style = std::fs::read_to_string(tmp.path().join("style.css"))?;
	assert!(style.contains("Version:  1.0.0"));

	Ok(())
}

#[test]
fn custom_config_path() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	std::fs::create_dir(tmp.path().join("build"))?;
	std::fs::rename(
		tmp.path().join("config.json"),
		tmp.path().join("build").join("wp.json"),
	)?;

	common::mdwp_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("--config")
		.arg("build/wp.json")
		.assert()
		.success();

	assert!(tmp.path().join("readme.txt").exists());

	Ok(())
}

#[test]
fn missing_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::mdwp_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("config file not found"));

	Ok(())
}

#[test]
fn malformed_config_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("config.json"), "{ \"styleFiles\": ")?;

	common::mdwp_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(predicates::str::contains("failed to parse config file"));

	Ok(())
}

#[test]
fn unreadable_changelog_aborts_before_writing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_project(tmp.path())?;
	std::fs::remove_file(tmp.path().join("CHANGELOG.md"))?;

	common::mdwp_cmd()
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.failure()
		.stderr(
			predicates::str::contains("failed to read input document")
				.and(predicates::str::contains("CHANGELOG.md")),
		);

	assert!(!tmp.path().join("readme.txt").exists());
	let style = std::fs::read_to_string(tmp.path().join("style.css"))?;
	assert!(style.contains("Version:  1.0.0"));

	Ok(())
}
