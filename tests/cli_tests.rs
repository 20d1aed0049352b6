use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn is_different_cmd() -> Command {
	Command::cargo_bin("is-different").expect("failed to find binary")
}

fn create_test_file(dir: &Path, name: &str, contents: &str) -> io::Result<PathBuf> {
	let path = dir.join(name);
	fs::write(&path, contents)?;
	Ok(path)
}

#[test]
fn identical_files_exit_zero() -> io::Result<()> {
	let dir = TempDir::new()?;
	let a = create_test_file(dir.path(), "a.txt", "hello")?;
	let b = create_test_file(dir.path(), "b.txt", "hello")?;

	is_different_cmd()
		.arg(&a)
		.arg(&b)
		.assert()
		.success()
		.stdout(predicate::str::contains("5d41402abc4b2a76b9719d911017c592"))
		.stdout(predicate::str::contains("Files are identical"));

	Ok(())
}

#[test]
fn different_files_exit_one() -> io::Result<()> {
	let dir = TempDir::new()?;
	let a = create_test_file(dir.path(), "a.txt", "hello")?;
	let c = create_test_file(dir.path(), "c.txt", "hellp")?;

	is_different_cmd()
		.arg(&a)
		.arg(&c)
		.assert()
		.code(1)
		.stdout(predicate::str::contains("Files are different"));

	Ok(())
}

#[test]
fn missing_file_exits_two_and_names_the_path() -> io::Result<()> {
	let dir = TempDir::new()?;
	let present = create_test_file(dir.path(), "present.txt", "hello")?;
	let absent = dir.path().join("absent.txt");

	is_different_cmd()
		.arg(&present)
		.arg(&absent)
		.assert()
		.code(2)
		.stderr(predicate::str::contains("absent.txt"))
		.stderr(predicate::str::contains("present.txt").not());

	Ok(())
}

#[test]
fn digests_are_printed_in_md5sum_form() -> io::Result<()> {
	let dir = TempDir::new()?;
	let a = create_test_file(dir.path(), "empty-a", "")?;
	let b = create_test_file(dir.path(), "empty-b", "")?;

	is_different_cmd()
		.arg(&a)
		.arg(&b)
		.assert()
		.success()
		.stdout(predicate::str::contains(format!(
			"d41d8cd98f00b204e9800998ecf8427e  {}",
			a.display()
		)))
		.stdout(predicate::str::contains(format!(
			"d41d8cd98f00b204e9800998ecf8427e  {}",
			b.display()
		)));

	Ok(())
}
