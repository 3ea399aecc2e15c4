/// Reference to a managed object in the vSphere inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedObjectRef {
	/// Managed object type name, e.g. `Datastore`.
	pub kind: String,
	/// Opaque inventory identifier, e.g. `datastore-112`.
	pub value: String,
}

impl ManagedObjectRef {
	/// Build a reference from type name and identifier.
	pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			value: value.into(),
		}
	}

	/// Render as a `Type:identifier` label.
	pub fn as_label(&self) -> String {
		format!("{}:{}", self.kind, self.value)
	}
}

/// Identifier of an encryption key held by a key provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoKeyId {
	/// Key identifier within the provider.
	pub key_id: String,
	/// Provider identifier, absent for the default provider.
	pub provider_id: Option<String>,
}

impl CryptoKeyId {
	/// Render as `key` or `key@provider`.
	pub fn as_label(&self) -> String {
		match &self.provider_id {
			Some(provider) => format!("{}@{provider}", self.key_id),
			None => self.key_id.clone(),
		}
	}
}
