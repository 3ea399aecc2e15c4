use std::str::FromStr;

use serde::Deserialize;
use vdiskinfo::vim::{
	CryptoKeyId, DiskBacking, FlatVer1Backing, FlatVer2Backing, LocalPMemBacking, ManagedObjectRef, PartitionedRawDiskVer2Backing,
	RawDiskMappingVer1Backing, RawDiskVer2Backing, Result, SeSparseBacking, SparseVer1Backing, SparseVer2Backing, VimError,
};

/// JSON document form of a backing descriptor, tagged by `kind`.
#[derive(Deserialize)]
#[serde(tag = "kind")]
pub(crate) enum BackingDoc {
	#[serde(rename = "flatVer1")]
	FlatVer1(FlatVer1Doc),
	#[serde(rename = "flatVer2")]
	FlatVer2(FlatVer2Doc),
	#[serde(rename = "sparseVer1")]
	SparseVer1(SparseVer1Doc),
	#[serde(rename = "sparseVer2")]
	SparseVer2(SparseVer2Doc),
	#[serde(rename = "seSparse")]
	SeSparse(SeSparseDoc),
	#[serde(rename = "rawDiskMappingVer1")]
	RawDiskMappingVer1(RawDiskMappingVer1Doc),
	#[serde(rename = "rawDiskVer2")]
	RawDiskVer2(RawDiskVer2Doc),
	#[serde(rename = "partitionedRawDiskVer2")]
	PartitionedRawDiskVer2(PartitionedRawDiskVer2Doc),
	#[serde(rename = "localPMem")]
	LocalPMem(LocalPMemDoc),
}

impl BackingDoc {
	/// Resolve wire labels into the typed backing model.
	pub(crate) fn into_backing(self) -> Result<DiskBacking> {
		match self {
			Self::FlatVer1(doc) => Ok(DiskBacking::FlatVer1(doc.into_backing()?)),
			Self::FlatVer2(doc) => Ok(DiskBacking::FlatVer2(doc.into_backing()?)),
			Self::SparseVer1(doc) => Ok(DiskBacking::SparseVer1(doc.into_backing()?)),
			Self::SparseVer2(doc) => Ok(DiskBacking::SparseVer2(doc.into_backing()?)),
			Self::SeSparse(doc) => Ok(DiskBacking::SeSparse(doc.into_backing()?)),
			Self::RawDiskMappingVer1(doc) => Ok(DiskBacking::RawDiskMappingVer1(doc.into_backing()?)),
			Self::RawDiskVer2(doc) => Ok(DiskBacking::RawDiskVer2(doc.into_backing()?)),
			Self::PartitionedRawDiskVer2(doc) => Ok(DiskBacking::PartitionedRawDiskVer2(doc.into_backing()?)),
			Self::LocalPMem(doc) => Ok(DiskBacking::LocalPMem(doc.into_backing()?)),
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MorefDoc {
	#[serde(rename = "type")]
	kind: String,
	value: String,
}

impl MorefDoc {
	fn into_ref(self) -> ManagedObjectRef {
		ManagedObjectRef {
			kind: self.kind,
			value: self.value,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CryptoKeyDoc {
	key_id: String,
	provider_id: Option<String>,
}

impl CryptoKeyDoc {
	fn into_key(self) -> CryptoKeyId {
		CryptoKeyId {
			key_id: self.key_id,
			provider_id: self.provider_id,
		}
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlatVer1Doc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	split: Option<bool>,
	write_through: Option<bool>,
	content_id: Option<String>,
	parent: Option<Box<FlatVer1Doc>>,
}

impl FlatVer1Doc {
	fn into_backing(self) -> Result<FlatVer1Backing> {
		Ok(FlatVer1Backing {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			split: self.split,
			write_through: self.write_through,
			content_id: self.content_id,
			parent: boxed_parent(self.parent, FlatVer1Doc::into_backing)?,
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlatVer2Doc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	split: Option<bool>,
	write_through: Option<bool>,
	thin_provisioned: Option<bool>,
	eagerly_scrub: Option<bool>,
	uuid: Option<String>,
	content_id: Option<String>,
	change_id: Option<String>,
	parent: Option<Box<FlatVer2Doc>>,
	delta_disk_format: Option<String>,
	digest_enabled: Option<bool>,
	delta_grain_size: Option<i32>,
	delta_disk_format_variant: Option<String>,
	sharing: Option<String>,
	key_id: Option<CryptoKeyDoc>,
}

impl FlatVer2Doc {
	fn into_backing(self) -> Result<FlatVer2Backing> {
		Ok(FlatVer2Backing {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			split: self.split,
			write_through: self.write_through,
			thin_provisioned: self.thin_provisioned,
			eagerly_scrub: self.eagerly_scrub,
			uuid: self.uuid,
			content_id: self.content_id,
			change_id: self.change_id,
			parent: boxed_parent(self.parent, FlatVer2Doc::into_backing)?,
			delta_disk_format: parse_opt(self.delta_disk_format)?,
			digest_enabled: self.digest_enabled,
			delta_grain_size: self.delta_grain_size,
			delta_disk_format_variant: self.delta_disk_format_variant,
			sharing: parse_opt(self.sharing)?,
			key_id: self.key_id.map(CryptoKeyDoc::into_key),
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SparseVer1Doc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	split: Option<bool>,
	write_through: Option<bool>,
	#[serde(rename = "spaceUsedInKB")]
	space_used_in_kb: Option<i64>,
	content_id: Option<String>,
	parent: Option<Box<SparseVer1Doc>>,
}

impl SparseVer1Doc {
	fn into_backing(self) -> Result<SparseVer1Backing> {
		Ok(SparseVer1Backing {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			split: self.split,
			write_through: self.write_through,
			space_used_in_kb: self.space_used_in_kb,
			content_id: self.content_id,
			parent: boxed_parent(self.parent, SparseVer1Doc::into_backing)?,
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SparseVer2Doc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	split: Option<bool>,
	write_through: Option<bool>,
	#[serde(rename = "spaceUsedInKB")]
	space_used_in_kb: Option<i64>,
	uuid: Option<String>,
	content_id: Option<String>,
	change_id: Option<String>,
	parent: Option<Box<SparseVer2Doc>>,
	key_id: Option<CryptoKeyDoc>,
}

impl SparseVer2Doc {
	fn into_backing(self) -> Result<SparseVer2Backing> {
		Ok(SparseVer2Backing {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			split: self.split,
			write_through: self.write_through,
			space_used_in_kb: self.space_used_in_kb,
			uuid: self.uuid,
			content_id: self.content_id,
			change_id: self.change_id,
			parent: boxed_parent(self.parent, SparseVer2Doc::into_backing)?,
			key_id: self.key_id.map(CryptoKeyDoc::into_key),
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeSparseDoc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	write_through: Option<bool>,
	uuid: Option<String>,
	content_id: Option<String>,
	change_id: Option<String>,
	parent: Option<Box<SeSparseDoc>>,
	delta_disk_format: Option<String>,
	digest_enabled: Option<bool>,
	grain_size: Option<i32>,
	key_id: Option<CryptoKeyDoc>,
}

impl SeSparseDoc {
	fn into_backing(self) -> Result<SeSparseBacking> {
		Ok(SeSparseBacking {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			write_through: self.write_through,
			uuid: self.uuid,
			content_id: self.content_id,
			change_id: self.change_id,
			parent: boxed_parent(self.parent, SeSparseDoc::into_backing)?,
			delta_disk_format: parse_opt(self.delta_disk_format)?,
			digest_enabled: self.digest_enabled,
			grain_size: self.grain_size,
			key_id: self.key_id.map(CryptoKeyDoc::into_key),
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDiskMappingVer1Doc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	lun_uuid: Option<String>,
	device_name: Option<String>,
	compatibility_mode: Option<String>,
	disk_mode: Option<String>,
	uuid: Option<String>,
	content_id: Option<String>,
	change_id: Option<String>,
	parent: Option<Box<RawDiskMappingVer1Doc>>,
	delta_disk_format: Option<String>,
	delta_grain_size: Option<i32>,
	sharing: Option<String>,
}

impl RawDiskMappingVer1Doc {
	fn into_backing(self) -> Result<RawDiskMappingVer1Backing> {
		Ok(RawDiskMappingVer1Backing {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			lun_uuid: self.lun_uuid,
			device_name: self.device_name,
			compatibility_mode: parse_opt(self.compatibility_mode)?,
			disk_mode: parse_opt(self.disk_mode)?,
			uuid: self.uuid,
			content_id: self.content_id,
			change_id: self.change_id,
			parent: boxed_parent(self.parent, RawDiskMappingVer1Doc::into_backing)?,
			delta_disk_format: parse_opt(self.delta_disk_format)?,
			delta_grain_size: self.delta_grain_size,
			sharing: parse_opt(self.sharing)?,
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDiskVer2Doc {
	device_name: String,
	use_auto_detect: Option<bool>,
	descriptor_file_name: String,
	uuid: Option<String>,
	change_id: Option<String>,
	sharing: Option<String>,
}

impl RawDiskVer2Doc {
	fn into_backing(self) -> Result<RawDiskVer2Backing> {
		Ok(RawDiskVer2Backing {
			device_name: self.device_name,
			use_auto_detect: self.use_auto_detect,
			descriptor_file_name: self.descriptor_file_name,
			uuid: self.uuid,
			change_id: self.change_id,
			sharing: parse_opt(self.sharing)?,
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PartitionedRawDiskVer2Doc {
	device_name: String,
	use_auto_detect: Option<bool>,
	descriptor_file_name: String,
	uuid: Option<String>,
	change_id: Option<String>,
	sharing: Option<String>,
	#[serde(default)]
	partition: Vec<i32>,
}

impl PartitionedRawDiskVer2Doc {
	fn into_backing(self) -> Result<PartitionedRawDiskVer2Backing> {
		Ok(PartitionedRawDiskVer2Backing {
			device_name: self.device_name,
			use_auto_detect: self.use_auto_detect,
			descriptor_file_name: self.descriptor_file_name,
			uuid: self.uuid,
			change_id: self.change_id,
			sharing: parse_opt(self.sharing)?,
			partition: self.partition,
		})
	}
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LocalPMemDoc {
	file_name: String,
	datastore: Option<MorefDoc>,
	backing_object_id: Option<String>,
	disk_mode: String,
	uuid: Option<String>,
	#[serde(rename = "volumeUUID")]
	volume_uuid: Option<String>,
	content_id: Option<String>,
}

impl LocalPMemDoc {
	fn into_backing(self) -> Result<LocalPMemBacking> {
		Ok(LocalPMemBacking {
			file_name: self.file_name,
			datastore: self.datastore.map(MorefDoc::into_ref),
			backing_object_id: self.backing_object_id,
			disk_mode: self.disk_mode.parse()?,
			uuid: self.uuid,
			volume_uuid: self.volume_uuid,
			content_id: self.content_id,
		})
	}
}

fn parse_opt<T>(value: Option<String>) -> Result<Option<T>>
where
	T: FromStr<Err = VimError>,
{
	value.map(|item| item.parse()).transpose()
}

fn boxed_parent<D, T>(parent: Option<Box<D>>, convert: fn(D) -> Result<T>) -> Result<Option<Box<T>>> {
	match parent {
		Some(doc) => Ok(Some(Box::new(convert(*doc)?))),
		None => Ok(None),
	}
}
