use crate::vim::{CompatibilityMode, DeltaDiskFormat, DiskMode, Sharing, VimError};

#[test]
fn disk_mode_labels_round_trip() {
	let modes = [
		DiskMode::Persistent,
		DiskMode::Nonpersistent,
		DiskMode::Undoable,
		DiskMode::IndependentPersistent,
		DiskMode::IndependentNonpersistent,
		DiskMode::Append,
	];

	for mode in modes {
		let parsed: DiskMode = mode.as_str().parse().expect("label parses back");
		assert_eq!(parsed, mode);
	}
}

#[test]
fn sharing_labels_round_trip() {
	for sharing in [Sharing::None, Sharing::MultiWriter] {
		let parsed: Sharing = sharing.as_str().parse().expect("label parses back");
		assert_eq!(parsed, sharing);
	}
}

#[test]
fn compatibility_labels_round_trip() {
	for mode in [CompatibilityMode::Virtual, CompatibilityMode::Physical] {
		let parsed: CompatibilityMode = mode.as_str().parse().expect("label parses back");
		assert_eq!(parsed, mode);
	}
}

#[test]
fn delta_format_labels_round_trip() {
	for format in [DeltaDiskFormat::RedoLog, DeltaDiskFormat::Native, DeltaDiskFormat::SeSparse] {
		let parsed: DeltaDiskFormat = format.as_str().parse().expect("label parses back");
		assert_eq!(parsed, format);
	}
}

#[test]
fn unknown_labels_are_rejected() {
	let err = "persistentish".parse::<DiskMode>().expect_err("unknown mode rejected");
	assert!(matches!(err, VimError::UnknownDiskMode { value } if value == "persistentish"));

	let err = "shared".parse::<Sharing>().expect_err("unknown sharing rejected");
	assert!(matches!(err, VimError::UnknownSharing { value } if value == "shared"));

	let err = "rawMode".parse::<CompatibilityMode>().expect_err("unknown compatibility rejected");
	assert!(matches!(err, VimError::UnknownCompatibilityMode { value } if value == "rawMode"));

	let err = "vmfsSparse".parse::<DeltaDiskFormat>().expect_err("unknown delta format rejected");
	assert!(matches!(err, VimError::UnknownDeltaDiskFormat { value } if value == "vmfsSparse"));
}
