mod backing;
mod error;
mod mode;
mod moref;
mod props;
mod value;

/// Backing descriptor variants and kind tags.
pub use backing::{
	BackingKind, DiskBacking, FlatVer1Backing, FlatVer2Backing, LocalPMemBacking, PartitionedRawDiskVer2Backing, RawDiskMappingVer1Backing,
	RawDiskVer2Backing, SeSparseBacking, SparseVer1Backing, SparseVer2Backing,
};
/// Error and result aliases.
pub use error::{Result, VimError};
/// Disk mode vocabulary enums.
pub use mode::{CompatibilityMode, DeltaDiskFormat, DiskMode, Sharing};
/// Managed object reference and encryption key identifier types.
pub use moref::{CryptoKeyId, ManagedObjectRef};
/// Property extraction entry point.
pub use props::backing_props;
/// Extracted property value types.
pub use value::{PropValue, PropsMap};
