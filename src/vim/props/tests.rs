use crate::vim::{
	BackingKind, CompatibilityMode, CryptoKeyId, DiskBacking, DiskMode, FlatVer1Backing, FlatVer2Backing, LocalPMemBacking, ManagedObjectRef,
	PartitionedRawDiskVer2Backing, PropValue, RawDiskMappingVer1Backing, RawDiskVer2Backing, SeSparseBacking, Sharing, SparseVer1Backing,
	SparseVer2Backing, backing_props,
};

#[test]
fn absent_backing_yields_empty_map() {
	let props = backing_props(None);
	assert!(props.is_empty());
}

#[test]
fn every_kind_exports_exactly_its_declared_props() {
	for backing in all_samples() {
		let props = backing_props(Some(&backing));
		let kind = backing.kind();

		let mut expected: Vec<&str> = kind.prop_names().to_vec();
		expected.sort_unstable();
		let actual: Vec<&str> = props.keys().map(String::as_str).collect();

		assert_eq!(actual, expected, "key set mismatch for kind {}", kind.as_str());
	}
}

#[test]
fn unset_optional_fields_extract_as_null() {
	let backing = DiskBacking::FlatVer2(bare_flat_ver2());
	let props = backing_props(Some(&backing));

	assert_eq!(props.len(), BackingKind::FlatVer2.prop_names().len());
	assert_eq!(props["FileName"], PropValue::Str("[datastore1] web01/web01.vmdk".to_owned()));
	assert_eq!(props["DiskMode"], PropValue::Str("persistent".to_owned()));
	assert!(props["Datastore"].is_null());
	assert!(props["Split"].is_null());
	assert!(props["Sharing"].is_null());
	assert!(props["KeyId"].is_null());
	assert!(props["Parent"].is_null());
}

#[test]
fn populated_fields_keep_their_shapes() {
	let backing = DiskBacking::FlatVer2(populated_flat_ver2());
	let props = backing_props(Some(&backing));

	assert_eq!(props["Datastore"], PropValue::Ref(ManagedObjectRef::new("Datastore", "datastore-112")));
	assert_eq!(props["ThinProvisioned"], PropValue::Bool(true));
	assert_eq!(props["EagerlyScrub"], PropValue::Bool(false));
	assert_eq!(props["DeltaGrainSize"], PropValue::I32(512));
	assert_eq!(props["Sharing"], PropValue::Str("sharingNone".to_owned()));
	assert_eq!(
		props["KeyId"],
		PropValue::CryptoKey(CryptoKeyId {
			key_id: "key-7".to_owned(),
			provider_id: Some("kms-1".to_owned()),
		})
	);
}

#[test]
fn parent_extracts_through_one_level_of_indirection() {
	let parent = bare_flat_ver2();
	let mut child = populated_flat_ver2();
	child.parent = Some(Box::new(parent.clone()));

	let child_props = backing_props(Some(&DiskBacking::FlatVer2(child)));
	let PropValue::Backing(extracted) = &child_props["Parent"] else {
		panic!("expected nested backing for Parent");
	};

	let direct = backing_props(Some(&DiskBacking::FlatVer2(parent)));
	assert_eq!(extracted.to_props(), direct);
}

#[test]
fn extraction_is_idempotent() {
	for backing in all_samples() {
		let first = backing_props(Some(&backing));
		let second = backing_props(Some(&backing));
		assert_eq!(first, second, "repeat extraction differed for kind {}", backing.kind().as_str());
	}
}

#[test]
fn partition_list_is_preserved() {
	let backing = DiskBacking::PartitionedRawDiskVer2(sample_partitioned_raw_disk_ver2());
	let props = backing_props(Some(&backing));
	assert_eq!(props["Partition"], PropValue::I32List(vec![1, 3]));
}

fn all_samples() -> Vec<DiskBacking> {
	vec![
		DiskBacking::FlatVer1(sample_flat_ver1()),
		DiskBacking::FlatVer2(populated_flat_ver2()),
		DiskBacking::SparseVer1(sample_sparse_ver1()),
		DiskBacking::SparseVer2(sample_sparse_ver2()),
		DiskBacking::SeSparse(sample_se_sparse()),
		DiskBacking::RawDiskMappingVer1(sample_raw_disk_mapping_ver1()),
		DiskBacking::RawDiskVer2(sample_raw_disk_ver2()),
		DiskBacking::PartitionedRawDiskVer2(sample_partitioned_raw_disk_ver2()),
		DiskBacking::LocalPMem(sample_local_pmem()),
	]
}

fn bare_flat_ver2() -> FlatVer2Backing {
	FlatVer2Backing {
		file_name: "[datastore1] web01/web01.vmdk".to_owned(),
		datastore: None,
		backing_object_id: None,
		disk_mode: DiskMode::Persistent,
		split: None,
		write_through: None,
		thin_provisioned: None,
		eagerly_scrub: None,
		uuid: None,
		content_id: None,
		change_id: None,
		parent: None,
		delta_disk_format: None,
		digest_enabled: None,
		delta_grain_size: None,
		delta_disk_format_variant: None,
		sharing: None,
		key_id: None,
	}
}

fn populated_flat_ver2() -> FlatVer2Backing {
	FlatVer2Backing {
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-112")),
		backing_object_id: Some("24-9bf1-d0e7-27b3".to_owned()),
		split: Some(false),
		write_through: Some(false),
		thin_provisioned: Some(true),
		eagerly_scrub: Some(false),
		uuid: Some("6000C296-d7c4-0a79-33e2-5a226de5d8a4".to_owned()),
		content_id: Some("f5c9b6d2aa83c2a17fa3c05efffffffe".to_owned()),
		change_id: Some("52 3c e2 88/1".to_owned()),
		delta_grain_size: Some(512),
		sharing: Some(Sharing::None),
		key_id: Some(CryptoKeyId {
			key_id: "key-7".to_owned(),
			provider_id: Some("kms-1".to_owned()),
		}),
		..bare_flat_ver2()
	}
}

fn sample_flat_ver1() -> FlatVer1Backing {
	FlatVer1Backing {
		file_name: "[datastore1] legacy/legacy.vmdk".to_owned(),
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-7")),
		backing_object_id: None,
		disk_mode: DiskMode::Undoable,
		split: Some(true),
		write_through: None,
		content_id: Some("0ffcaa71a2a0a4bbdcb6e7c1fffffffe".to_owned()),
		parent: None,
	}
}

fn sample_sparse_ver1() -> SparseVer1Backing {
	SparseVer1Backing {
		file_name: "[datastore1] legacy/legacy-sparse.vmdk".to_owned(),
		datastore: None,
		backing_object_id: None,
		disk_mode: DiskMode::Nonpersistent,
		split: None,
		write_through: None,
		space_used_in_kb: Some(40_960),
		content_id: None,
		parent: None,
	}
}

fn sample_sparse_ver2() -> SparseVer2Backing {
	SparseVer2Backing {
		file_name: "[datastore1] db01/db01-sparse.vmdk".to_owned(),
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-112")),
		backing_object_id: None,
		disk_mode: DiskMode::IndependentPersistent,
		split: Some(false),
		write_through: Some(false),
		space_used_in_kb: Some(8_388_608),
		uuid: Some("6000C294-29e2-73fa-3f45-11d3c6e4a6f0".to_owned()),
		content_id: None,
		change_id: None,
		parent: None,
		key_id: None,
	}
}

fn sample_se_sparse() -> SeSparseBacking {
	SeSparseBacking {
		file_name: "[datastore1] vdi01/vdi01-sesparse.vmdk".to_owned(),
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-112")),
		backing_object_id: None,
		disk_mode: DiskMode::Persistent,
		write_through: None,
		uuid: None,
		content_id: None,
		change_id: None,
		parent: None,
		delta_disk_format: None,
		digest_enabled: Some(false),
		grain_size: Some(4),
		key_id: None,
	}
}

fn sample_raw_disk_mapping_ver1() -> RawDiskMappingVer1Backing {
	RawDiskMappingVer1Backing {
		file_name: "[datastore1] db01/db01-rdm.vmdk".to_owned(),
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-112")),
		backing_object_id: None,
		lun_uuid: Some("02000000006006016015301d00667c9ddd7fb3e111524149442035".to_owned()),
		device_name: Some("/vmfs/devices/disks/naa.6006016015301d00667c9ddd7fb3e111".to_owned()),
		compatibility_mode: Some(CompatibilityMode::Physical),
		disk_mode: None,
		uuid: None,
		content_id: None,
		change_id: None,
		parent: None,
		delta_disk_format: None,
		delta_grain_size: None,
		sharing: Some(Sharing::MultiWriter),
	}
}

fn sample_raw_disk_ver2() -> RawDiskVer2Backing {
	RawDiskVer2Backing {
		device_name: "/vmfs/devices/disks/naa.600508b1001c16a8".to_owned(),
		use_auto_detect: Some(false),
		descriptor_file_name: "[datastore1] db01/db01-raw.vmdk".to_owned(),
		uuid: None,
		change_id: None,
		sharing: None,
	}
}

fn sample_partitioned_raw_disk_ver2() -> PartitionedRawDiskVer2Backing {
	PartitionedRawDiskVer2Backing {
		device_name: "/vmfs/devices/disks/naa.600508b1001c16a8".to_owned(),
		use_auto_detect: None,
		descriptor_file_name: "[datastore1] db01/db01-part.vmdk".to_owned(),
		uuid: None,
		change_id: None,
		sharing: None,
		partition: vec![1, 3],
	}
}

fn sample_local_pmem() -> LocalPMemBacking {
	LocalPMemBacking {
		file_name: "[PMemDS-3a5b] fast01/fast01.vmdk".to_owned(),
		datastore: Some(ManagedObjectRef::new("Datastore", "datastore-201")),
		backing_object_id: None,
		disk_mode: DiskMode::IndependentPersistent,
		uuid: None,
		volume_uuid: Some("3a5b1c2d-4e5f-6a7b-8c9d-0e1f2a3b4c5d".to_owned()),
		content_id: None,
	}
}
