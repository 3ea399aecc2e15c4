use std::collections::BTreeMap;

use crate::vim::{CryptoKeyId, DiskBacking, ManagedObjectRef};

/// String-keyed property mapping extracted from one backing descriptor.
///
/// Freshly allocated per extraction and owned by the caller. Iteration
/// order is lexicographic by key and carries no meaning.
pub type PropsMap = BTreeMap<String, PropValue>;

/// Closed set of value shapes a backing property can take.
///
/// Optional fields that are unset extract as [`PropValue::Null`] so a
/// kind's key set is the same whether or not its fields carry values.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
	/// Optional field with no value set.
	Null,
	/// Boolean flag.
	Bool(bool),
	/// 32-bit integer.
	I32(i32),
	/// 64-bit integer.
	I64(i64),
	/// Text value.
	Str(String),
	/// Managed object reference.
	Ref(ManagedObjectRef),
	/// Encryption key identifier.
	CryptoKey(CryptoKeyId),
	/// Nested backing descriptor, used for parent chains.
	Backing(Box<DiskBacking>),
	/// List of 32-bit integers, used for partition lists.
	I32List(Vec<i32>),
}

impl PropValue {
	/// Whether this is the unset marker.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}
