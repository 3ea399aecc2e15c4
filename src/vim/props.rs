use crate::vim::backing::{
	FlatVer1Backing, FlatVer2Backing, LocalPMemBacking, PartitionedRawDiskVer2Backing, RawDiskMappingVer1Backing, RawDiskVer2Backing,
	SeSparseBacking, SparseVer1Backing, SparseVer2Backing,
};
use crate::vim::{CryptoKeyId, DiskBacking, ManagedObjectRef, PropValue, PropsMap};

/// Convert a possibly-absent backing descriptor into its exported property map.
///
/// An absent descriptor yields an empty map rather than an error; callers
/// treat "empty" as "nothing could be extracted". The input is never
/// mutated and nothing is allocated beyond the returned map.
pub fn backing_props(backing: Option<&DiskBacking>) -> PropsMap {
	match backing {
		Some(backing) => backing.to_props(),
		None => PropsMap::new(),
	}
}

impl DiskBacking {
	/// Property map of this descriptor, one entry per exported SDK field.
	pub fn to_props(&self) -> PropsMap {
		match self {
			Self::FlatVer1(backing) => flat_ver1_props(backing),
			Self::FlatVer2(backing) => flat_ver2_props(backing),
			Self::SparseVer1(backing) => sparse_ver1_props(backing),
			Self::SparseVer2(backing) => sparse_ver2_props(backing),
			Self::SeSparse(backing) => se_sparse_props(backing),
			Self::RawDiskMappingVer1(backing) => raw_disk_mapping_ver1_props(backing),
			Self::RawDiskVer2(backing) => raw_disk_ver2_props(backing),
			Self::PartitionedRawDiskVer2(backing) => partitioned_raw_disk_ver2_props(backing),
			Self::LocalPMem(backing) => local_pmem_props(backing),
		}
	}
}

fn flat_ver1_props(backing: &FlatVer1Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "Split", opt_bool(backing.split));
	insert(&mut props, "WriteThrough", opt_bool(backing.write_through));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::FlatVer1));
	props
}

fn flat_ver2_props(backing: &FlatVer2Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "Split", opt_bool(backing.split));
	insert(&mut props, "WriteThrough", opt_bool(backing.write_through));
	insert(&mut props, "ThinProvisioned", opt_bool(backing.thin_provisioned));
	insert(&mut props, "EagerlyScrub", opt_bool(backing.eagerly_scrub));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::FlatVer2));
	insert(&mut props, "DeltaDiskFormat", opt_label(backing.delta_disk_format.map(|item| item.as_str())));
	insert(&mut props, "DigestEnabled", opt_bool(backing.digest_enabled));
	insert(&mut props, "DeltaGrainSize", opt_i32(backing.delta_grain_size));
	insert(&mut props, "DeltaDiskFormatVariant", opt_str(backing.delta_disk_format_variant.as_deref()));
	insert(&mut props, "Sharing", opt_label(backing.sharing.map(|item| item.as_str())));
	insert(&mut props, "KeyId", opt_key(backing.key_id.as_ref()));
	props
}

fn sparse_ver1_props(backing: &SparseVer1Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "Split", opt_bool(backing.split));
	insert(&mut props, "WriteThrough", opt_bool(backing.write_through));
	insert(&mut props, "SpaceUsedInKB", opt_i64(backing.space_used_in_kb));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::SparseVer1));
	props
}

fn sparse_ver2_props(backing: &SparseVer2Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "Split", opt_bool(backing.split));
	insert(&mut props, "WriteThrough", opt_bool(backing.write_through));
	insert(&mut props, "SpaceUsedInKB", opt_i64(backing.space_used_in_kb));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::SparseVer2));
	insert(&mut props, "KeyId", opt_key(backing.key_id.as_ref()));
	props
}

fn se_sparse_props(backing: &SeSparseBacking) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "WriteThrough", opt_bool(backing.write_through));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::SeSparse));
	insert(&mut props, "DeltaDiskFormat", opt_label(backing.delta_disk_format.map(|item| item.as_str())));
	insert(&mut props, "DigestEnabled", opt_bool(backing.digest_enabled));
	insert(&mut props, "GrainSize", opt_i32(backing.grain_size));
	insert(&mut props, "KeyId", opt_key(backing.key_id.as_ref()));
	props
}

fn raw_disk_mapping_ver1_props(backing: &RawDiskMappingVer1Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "LunUuid", opt_str(backing.lun_uuid.as_deref()));
	insert(&mut props, "DeviceName", opt_str(backing.device_name.as_deref()));
	insert(&mut props, "CompatibilityMode", opt_label(backing.compatibility_mode.map(|item| item.as_str())));
	insert(&mut props, "DiskMode", opt_label(backing.disk_mode.map(|item| item.as_str())));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Parent", opt_parent(backing.parent.as_deref(), DiskBacking::RawDiskMappingVer1));
	insert(&mut props, "DeltaDiskFormat", opt_label(backing.delta_disk_format.map(|item| item.as_str())));
	insert(&mut props, "DeltaGrainSize", opt_i32(backing.delta_grain_size));
	insert(&mut props, "Sharing", opt_label(backing.sharing.map(|item| item.as_str())));
	props
}

fn raw_disk_ver2_props(backing: &RawDiskVer2Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "DeviceName", str_value(&backing.device_name));
	insert(&mut props, "UseAutoDetect", opt_bool(backing.use_auto_detect));
	insert(&mut props, "DescriptorFileName", str_value(&backing.descriptor_file_name));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Sharing", opt_label(backing.sharing.map(|item| item.as_str())));
	props
}

fn partitioned_raw_disk_ver2_props(backing: &PartitionedRawDiskVer2Backing) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "DeviceName", str_value(&backing.device_name));
	insert(&mut props, "UseAutoDetect", opt_bool(backing.use_auto_detect));
	insert(&mut props, "DescriptorFileName", str_value(&backing.descriptor_file_name));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "ChangeId", opt_str(backing.change_id.as_deref()));
	insert(&mut props, "Sharing", opt_label(backing.sharing.map(|item| item.as_str())));
	insert(&mut props, "Partition", PropValue::I32List(backing.partition.clone()));
	props
}

fn local_pmem_props(backing: &LocalPMemBacking) -> PropsMap {
	let mut props = PropsMap::new();
	insert(&mut props, "FileName", str_value(&backing.file_name));
	insert(&mut props, "Datastore", opt_ref(backing.datastore.as_ref()));
	insert(&mut props, "BackingObjectId", opt_str(backing.backing_object_id.as_deref()));
	insert(&mut props, "DiskMode", label(backing.disk_mode.as_str()));
	insert(&mut props, "Uuid", opt_str(backing.uuid.as_deref()));
	insert(&mut props, "VolumeUUID", opt_str(backing.volume_uuid.as_deref()));
	insert(&mut props, "ContentId", opt_str(backing.content_id.as_deref()));
	props
}

fn insert(props: &mut PropsMap, name: &str, value: PropValue) {
	props.insert(name.to_owned(), value);
}

fn str_value(value: &str) -> PropValue {
	PropValue::Str(value.to_owned())
}

fn label(value: &'static str) -> PropValue {
	PropValue::Str(value.to_owned())
}

fn opt_label(value: Option<&'static str>) -> PropValue {
	match value {
		Some(item) => PropValue::Str(item.to_owned()),
		None => PropValue::Null,
	}
}

fn opt_str(value: Option<&str>) -> PropValue {
	match value {
		Some(item) => PropValue::Str(item.to_owned()),
		None => PropValue::Null,
	}
}

fn opt_bool(value: Option<bool>) -> PropValue {
	match value {
		Some(item) => PropValue::Bool(item),
		None => PropValue::Null,
	}
}

fn opt_i32(value: Option<i32>) -> PropValue {
	match value {
		Some(item) => PropValue::I32(item),
		None => PropValue::Null,
	}
}

fn opt_i64(value: Option<i64>) -> PropValue {
	match value {
		Some(item) => PropValue::I64(item),
		None => PropValue::Null,
	}
}

fn opt_ref(value: Option<&ManagedObjectRef>) -> PropValue {
	match value {
		Some(item) => PropValue::Ref(item.clone()),
		None => PropValue::Null,
	}
}

fn opt_key(value: Option<&CryptoKeyId>) -> PropValue {
	match value {
		Some(item) => PropValue::CryptoKey(item.clone()),
		None => PropValue::Null,
	}
}

fn opt_parent<T: Clone>(parent: Option<&T>, wrap: fn(T) -> DiskBacking) -> PropValue {
	match parent {
		Some(item) => PropValue::Backing(Box::new(wrap(item.clone()))),
		None => PropValue::Null,
	}
}

#[cfg(test)]
mod tests;
