use std::path::PathBuf;

use vdiskinfo::vim::{Result, VimError, backing_props};

use crate::cmd::input::BackingDoc;
use crate::cmd::util::{emit_json, props_json, render_prop};

#[derive(clap::Args)]
pub struct Args {
	/// Path to a backing descriptor JSON document.
	pub path: PathBuf,
	/// Emit a JSON object instead of text lines.
	#[arg(long)]
	pub json: bool,
}

/// Print the exported property map of one backing descriptor.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let text = std::fs::read_to_string(&path)?;
	let doc: BackingDoc = serde_json::from_str(&text).map_err(|err| VimError::InvalidDescriptor { reason: err.to_string() })?;
	let backing = doc.into_backing()?;
	let props = backing_props(Some(&backing));

	if json {
		let payload = serde_json::json!({
			"kind": backing.kind().as_str(),
			"props": props_json(&props),
		});
		emit_json(&payload);
		return Ok(());
	}

	println!("kind: {}", backing.kind().as_str());
	for (name, value) in &props {
		println!("{name}: {}", render_prop(value));
	}

	Ok(())
}
