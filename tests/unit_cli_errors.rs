#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::Command;

#[test]
fn unknown_disk_mode_label_is_reported() {
	let output = run(&["props", &fixture("bad_disk_mode.json")]);

	assert!(!output.status.success(), "bad mode label should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unknown disk mode: persistentish"), "stderr was: {stderr}");
}

#[test]
fn unknown_kind_filter_is_reported() {
	let output = run(&["kinds", "--kind", "flatVer3"]);

	assert!(!output.status.success(), "unknown kind label should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unknown backing kind: flatVer3"), "stderr was: {stderr}");
}

#[test]
fn missing_descriptor_file_is_reported() {
	let output = run(&["props", &fixture("does_not_exist.json")]);

	assert!(!output.status.success(), "missing file should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error:"), "stderr was: {stderr}");
}

#[test]
fn props_text_output_lists_every_property() {
	let output = run(&["props", &fixture("flat_ver2.json")]);

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.starts_with("kind: flatVer2"));
	assert!(stdout.contains("FileName: [datastore1] web01/web01.vmdk"));
	assert!(stdout.contains("DiskMode: persistent"));
	assert!(stdout.contains("Split: -"), "unset optional field renders as dash");
}

fn run(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_vdiskinfo")).args(args).output().expect("command executes")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
