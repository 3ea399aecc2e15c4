use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, VimError>;

/// Errors produced while loading and interpreting backing descriptors.
///
/// Property extraction itself is total; these arise only at the edges,
/// when reading descriptor documents or parsing wire labels.
#[derive(Debug, Error)]
pub enum VimError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Descriptor document did not parse as a known backing shape.
	#[error("invalid backing descriptor: {reason}")]
	InvalidDescriptor {
		/// Parser-provided failure detail.
		reason: String,
	},
	/// Backing kind label is not one of the supported kinds.
	#[error("unknown backing kind: {value}")]
	UnknownBackingKind {
		/// Offending kind label.
		value: String,
	},
	/// Disk mode label is not part of the SDK vocabulary.
	#[error("unknown disk mode: {value}")]
	UnknownDiskMode {
		/// Offending mode label.
		value: String,
	},
	/// Sharing label is not part of the SDK vocabulary.
	#[error("unknown sharing mode: {value}")]
	UnknownSharing {
		/// Offending sharing label.
		value: String,
	},
	/// RDM compatibility mode label is not part of the SDK vocabulary.
	#[error("unknown compatibility mode: {value}")]
	UnknownCompatibilityMode {
		/// Offending compatibility mode label.
		value: String,
	},
	/// Delta disk format label is not part of the SDK vocabulary.
	#[error("unknown delta disk format: {value}")]
	UnknownDeltaDiskFormat {
		/// Offending format label.
		value: String,
	},
}
