use std::str::FromStr;

use crate::vim::{CompatibilityMode, CryptoKeyId, DeltaDiskFormat, DiskMode, ManagedObjectRef, Result, Sharing, VimError};

/// Pre-VI3 flat file backing (`VirtualDiskFlatVer1BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct FlatVer1Backing {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Whether the backing is split into 2GB extent files.
	pub split: Option<bool>,
	/// Whether writes bypass the host cache.
	pub write_through: Option<bool>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<FlatVer1Backing>>,
}

/// Flat VMDK file backing (`VirtualDiskFlatVer2BackingInfo`), the common case.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatVer2Backing {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Whether the backing is split into 2GB extent files.
	pub split: Option<bool>,
	/// Whether writes bypass the host cache.
	pub write_through: Option<bool>,
	/// Whether storage is allocated lazily on first write.
	pub thin_provisioned: Option<bool>,
	/// Whether thick storage was zeroed out at creation.
	pub eagerly_scrub: Option<bool>,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<FlatVer2Backing>>,
	/// Format of this backing when it is a delta disk.
	pub delta_disk_format: Option<DeltaDiskFormat>,
	/// Whether digest-based integrity checking is enabled.
	pub digest_enabled: Option<bool>,
	/// Grain size of this backing when it is a delta disk, in sectors.
	pub delta_grain_size: Option<i32>,
	/// Format variant reported by the storage backend.
	pub delta_disk_format_variant: Option<String>,
	/// Multi-writer sharing mode.
	pub sharing: Option<Sharing>,
	/// Encryption key for an encrypted backing.
	pub key_id: Option<CryptoKeyId>,
}

/// Pre-VI3 sparse file backing (`VirtualDiskSparseVer1BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVer1Backing {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Whether the backing is split into 2GB extent files.
	pub split: Option<bool>,
	/// Whether writes bypass the host cache.
	pub write_through: Option<bool>,
	/// Space actually consumed by the sparse file, in KB.
	pub space_used_in_kb: Option<i64>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<SparseVer1Backing>>,
}

/// Sparse VMDK file backing (`VirtualDiskSparseVer2BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVer2Backing {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Whether the backing is split into 2GB extent files.
	pub split: Option<bool>,
	/// Whether writes bypass the host cache.
	pub write_through: Option<bool>,
	/// Space actually consumed by the sparse file, in KB.
	pub space_used_in_kb: Option<i64>,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<SparseVer2Backing>>,
	/// Encryption key for an encrypted backing.
	pub key_id: Option<CryptoKeyId>,
}

/// Space-efficient sparse backing (`VirtualDiskSeSparseBackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct SeSparseBacking {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Whether writes bypass the host cache.
	pub write_through: Option<bool>,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<SeSparseBacking>>,
	/// Format of this backing when it is a delta disk.
	pub delta_disk_format: Option<DeltaDiskFormat>,
	/// Whether digest-based integrity checking is enabled.
	pub digest_enabled: Option<bool>,
	/// Allocation grain size, in KB.
	pub grain_size: Option<i32>,
	/// Encryption key for an encrypted backing.
	pub key_id: Option<CryptoKeyId>,
}

/// Raw device mapping backing (`VirtualDiskRawDiskMappingVer1BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiskMappingVer1Backing {
	/// Datastore path of the mapping file.
	pub file_name: String,
	/// Datastore holding the mapping file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// UUID of the mapped LUN.
	pub lun_uuid: Option<String>,
	/// Host device name of the mapped LUN.
	pub device_name: Option<String>,
	/// Virtual or physical pass-through mode.
	pub compatibility_mode: Option<CompatibilityMode>,
	/// Persistence mode, only meaningful in virtual compatibility mode.
	pub disk_mode: Option<DiskMode>,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Parent backing in a delta-disk chain.
	pub parent: Option<Box<RawDiskMappingVer1Backing>>,
	/// Format of this backing when it is a delta disk.
	pub delta_disk_format: Option<DeltaDiskFormat>,
	/// Grain size of this backing when it is a delta disk, in sectors.
	pub delta_grain_size: Option<i32>,
	/// Multi-writer sharing mode.
	pub sharing: Option<Sharing>,
}

/// Raw device backing with descriptor file (`VirtualDiskRawDiskVer2BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiskVer2Backing {
	/// Host device name of the raw disk.
	pub device_name: String,
	/// Whether the host should auto-detect the device.
	pub use_auto_detect: Option<bool>,
	/// Datastore path of the descriptor file.
	pub descriptor_file_name: String,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Multi-writer sharing mode.
	pub sharing: Option<Sharing>,
}

/// Partition-restricted raw device backing (`VirtualDiskPartitionedRawDiskVer2BackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedRawDiskVer2Backing {
	/// Host device name of the raw disk.
	pub device_name: String,
	/// Whether the host should auto-detect the device.
	pub use_auto_detect: Option<bool>,
	/// Datastore path of the descriptor file.
	pub descriptor_file_name: String,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// Change tracking identifier, set when CBT is enabled.
	pub change_id: Option<String>,
	/// Multi-writer sharing mode.
	pub sharing: Option<Sharing>,
	/// Partition indices the guest may access.
	pub partition: Vec<i32>,
}

/// Persistent-memory file backing (`VirtualDiskLocalPMemBackingInfo`).
#[derive(Debug, Clone, PartialEq)]
pub struct LocalPMemBacking {
	/// Datastore path of the backing file.
	pub file_name: String,
	/// Datastore holding the backing file, when resolved.
	pub datastore: Option<ManagedObjectRef>,
	/// Identifier of the backing object on the storage backend.
	pub backing_object_id: Option<String>,
	/// Persistence mode.
	pub disk_mode: DiskMode,
	/// Disk UUID reported to the guest.
	pub uuid: Option<String>,
	/// UUID of the PMem volume holding the backing.
	pub volume_uuid: Option<String>,
	/// Content identifier used for change detection.
	pub content_id: Option<String>,
}

/// Tagged union over every virtual-disk backing kind the SDK defines.
#[derive(Debug, Clone, PartialEq)]
pub enum DiskBacking {
	/// Pre-VI3 flat file backing.
	FlatVer1(FlatVer1Backing),
	/// Flat VMDK file backing.
	FlatVer2(FlatVer2Backing),
	/// Pre-VI3 sparse file backing.
	SparseVer1(SparseVer1Backing),
	/// Sparse VMDK file backing.
	SparseVer2(SparseVer2Backing),
	/// Space-efficient sparse backing.
	SeSparse(SeSparseBacking),
	/// Raw device mapping backing.
	RawDiskMappingVer1(RawDiskMappingVer1Backing),
	/// Raw device backing with descriptor file.
	RawDiskVer2(RawDiskVer2Backing),
	/// Partition-restricted raw device backing.
	PartitionedRawDiskVer2(PartitionedRawDiskVer2Backing),
	/// Persistent-memory file backing.
	LocalPMem(LocalPMemBacking),
}

impl DiskBacking {
	/// Kind tag of this descriptor.
	pub fn kind(&self) -> BackingKind {
		match self {
			Self::FlatVer1(_) => BackingKind::FlatVer1,
			Self::FlatVer2(_) => BackingKind::FlatVer2,
			Self::SparseVer1(_) => BackingKind::SparseVer1,
			Self::SparseVer2(_) => BackingKind::SparseVer2,
			Self::SeSparse(_) => BackingKind::SeSparse,
			Self::RawDiskMappingVer1(_) => BackingKind::RawDiskMappingVer1,
			Self::RawDiskVer2(_) => BackingKind::RawDiskVer2,
			Self::PartitionedRawDiskVer2(_) => BackingKind::PartitionedRawDiskVer2,
			Self::LocalPMem(_) => BackingKind::LocalPMem,
		}
	}
}

/// Fieldless tag naming each supported backing kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackingKind {
	/// Pre-VI3 flat file backing.
	FlatVer1,
	/// Flat VMDK file backing.
	FlatVer2,
	/// Pre-VI3 sparse file backing.
	SparseVer1,
	/// Sparse VMDK file backing.
	SparseVer2,
	/// Space-efficient sparse backing.
	SeSparse,
	/// Raw device mapping backing.
	RawDiskMappingVer1,
	/// Raw device backing with descriptor file.
	RawDiskVer2,
	/// Partition-restricted raw device backing.
	PartitionedRawDiskVer2,
	/// Persistent-memory file backing.
	LocalPMem,
}

impl BackingKind {
	/// Every kind, in declaration order.
	pub const ALL: [BackingKind; 9] = [
		Self::FlatVer1,
		Self::FlatVer2,
		Self::SparseVer1,
		Self::SparseVer2,
		Self::SeSparse,
		Self::RawDiskMappingVer1,
		Self::RawDiskVer2,
		Self::PartitionedRawDiskVer2,
		Self::LocalPMem,
	];

	/// Render as a stable wire-style label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::FlatVer1 => "flatVer1",
			Self::FlatVer2 => "flatVer2",
			Self::SparseVer1 => "sparseVer1",
			Self::SparseVer2 => "sparseVer2",
			Self::SeSparse => "seSparse",
			Self::RawDiskMappingVer1 => "rawDiskMappingVer1",
			Self::RawDiskVer2 => "rawDiskVer2",
			Self::PartitionedRawDiskVer2 => "partitionedRawDiskVer2",
			Self::LocalPMem => "localPMem",
		}
	}

	/// Property names this kind exports, in declared field order.
	pub fn prop_names(self) -> &'static [&'static str] {
		match self {
			Self::FlatVer1 => &["FileName", "Datastore", "BackingObjectId", "DiskMode", "Split", "WriteThrough", "ContentId", "Parent"],
			Self::FlatVer2 => &[
				"FileName",
				"Datastore",
				"BackingObjectId",
				"DiskMode",
				"Split",
				"WriteThrough",
				"ThinProvisioned",
				"EagerlyScrub",
				"Uuid",
				"ContentId",
				"ChangeId",
				"Parent",
				"DeltaDiskFormat",
				"DigestEnabled",
				"DeltaGrainSize",
				"DeltaDiskFormatVariant",
				"Sharing",
				"KeyId",
			],
			Self::SparseVer1 => &[
				"FileName",
				"Datastore",
				"BackingObjectId",
				"DiskMode",
				"Split",
				"WriteThrough",
				"SpaceUsedInKB",
				"ContentId",
				"Parent",
			],
			Self::SparseVer2 => &[
				"FileName",
				"Datastore",
				"BackingObjectId",
				"DiskMode",
				"Split",
				"WriteThrough",
				"SpaceUsedInKB",
				"Uuid",
				"ContentId",
				"ChangeId",
				"Parent",
				"KeyId",
			],
			Self::SeSparse => &[
				"FileName",
				"Datastore",
				"BackingObjectId",
				"DiskMode",
				"WriteThrough",
				"Uuid",
				"ContentId",
				"ChangeId",
				"Parent",
				"DeltaDiskFormat",
				"DigestEnabled",
				"GrainSize",
				"KeyId",
			],
			Self::RawDiskMappingVer1 => &[
				"FileName",
				"Datastore",
				"BackingObjectId",
				"LunUuid",
				"DeviceName",
				"CompatibilityMode",
				"DiskMode",
				"Uuid",
				"ContentId",
				"ChangeId",
				"Parent",
				"DeltaDiskFormat",
				"DeltaGrainSize",
				"Sharing",
			],
			Self::RawDiskVer2 => &["DeviceName", "UseAutoDetect", "DescriptorFileName", "Uuid", "ChangeId", "Sharing"],
			Self::PartitionedRawDiskVer2 => &["DeviceName", "UseAutoDetect", "DescriptorFileName", "Uuid", "ChangeId", "Sharing", "Partition"],
			Self::LocalPMem => &["FileName", "Datastore", "BackingObjectId", "DiskMode", "Uuid", "VolumeUUID", "ContentId"],
		}
	}
}

impl FromStr for BackingKind {
	type Err = VimError;

	fn from_str(value: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == value)
			.ok_or_else(|| VimError::UnknownBackingKind { value: value.to_owned() })
	}
}
