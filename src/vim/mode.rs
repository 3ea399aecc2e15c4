use std::str::FromStr;

use crate::vim::{Result, VimError};

/// Persistence mode of a disk backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskMode {
	/// Changes are written through to the backing immediately and permanently.
	Persistent,
	/// Changes are discarded when the virtual machine powers off.
	Nonpersistent,
	/// Changes can be committed or discarded at power-off.
	Undoable,
	/// Persistent and excluded from snapshots.
	IndependentPersistent,
	/// Discarded at power-off and excluded from snapshots.
	IndependentNonpersistent,
	/// Changes accumulate in a redo log appended to the backing.
	Append,
}

impl DiskMode {
	/// Render as the SDK wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Persistent => "persistent",
			Self::Nonpersistent => "nonpersistent",
			Self::Undoable => "undoable",
			Self::IndependentPersistent => "independent_persistent",
			Self::IndependentNonpersistent => "independent_nonpersistent",
			Self::Append => "append",
		}
	}
}

impl FromStr for DiskMode {
	type Err = VimError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"persistent" => Ok(Self::Persistent),
			"nonpersistent" => Ok(Self::Nonpersistent),
			"undoable" => Ok(Self::Undoable),
			"independent_persistent" => Ok(Self::IndependentPersistent),
			"independent_nonpersistent" => Ok(Self::IndependentNonpersistent),
			"append" => Ok(Self::Append),
			_ => Err(VimError::UnknownDiskMode { value: value.to_owned() }),
		}
	}
}

/// Multi-writer sharing mode of a disk backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sharing {
	/// Backing is exclusive to one virtual machine.
	None,
	/// Backing may be opened by multiple virtual machines at once.
	MultiWriter,
}

impl Sharing {
	/// Render as the SDK wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "sharingNone",
			Self::MultiWriter => "sharingMultiWriter",
		}
	}
}

impl FromStr for Sharing {
	type Err = VimError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"sharingNone" => Ok(Self::None),
			"sharingMultiWriter" => Ok(Self::MultiWriter),
			_ => Err(VimError::UnknownSharing { value: value.to_owned() }),
		}
	}
}

/// Compatibility mode of a raw device mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityMode {
	/// LUN accessed through the virtualization layer, snapshots allowed.
	Virtual,
	/// LUN commands passed through directly, no snapshots.
	Physical,
}

impl CompatibilityMode {
	/// Render as the SDK wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Virtual => "virtualMode",
			Self::Physical => "physicalMode",
		}
	}
}

impl FromStr for CompatibilityMode {
	type Err = VimError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"virtualMode" => Ok(Self::Virtual),
			"physicalMode" => Ok(Self::Physical),
			_ => Err(VimError::UnknownCompatibilityMode { value: value.to_owned() }),
		}
	}
}

/// On-disk format of a delta (child) disk in a backing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDiskFormat {
	/// Redo-log based delta format.
	RedoLog,
	/// Native snapshot delta format.
	Native,
	/// Space-efficient sparse delta format.
	SeSparse,
}

impl DeltaDiskFormat {
	/// Render as the SDK wire label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::RedoLog => "redoLogFormat",
			Self::Native => "nativeFormat",
			Self::SeSparse => "seSparseFormat",
		}
	}
}

impl FromStr for DeltaDiskFormat {
	type Err = VimError;

	fn from_str(value: &str) -> Result<Self> {
		match value {
			"redoLogFormat" => Ok(Self::RedoLog),
			"nativeFormat" => Ok(Self::Native),
			"seSparseFormat" => Ok(Self::SeSparse),
			_ => Err(VimError::UnknownDeltaDiskFormat { value: value.to_owned() }),
		}
	}
}

#[cfg(test)]
mod tests;
