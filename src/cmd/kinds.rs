use vdiskinfo::vim::{BackingKind, Result};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Restrict output to one kind label.
	#[arg(long)]
	pub kind: Option<String>,
	/// Emit JSON instead of text lines.
	#[arg(long)]
	pub json: bool,
}

/// List supported backing kinds and the properties each exports.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, json } = args;

	let kinds: Vec<BackingKind> = match kind {
		Some(label) => vec![label.parse()?],
		None => BackingKind::ALL.to_vec(),
	};

	if json {
		let payload: Vec<KindJson> = kinds
			.iter()
			.map(|kind| KindJson {
				kind: kind.as_str(),
				props: kind.prop_names().to_vec(),
			})
			.collect();
		emit_json(&payload);
		return Ok(());
	}

	for kind in kinds {
		println!("{}:", kind.as_str());
		for name in kind.prop_names() {
			println!("  {name}");
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindJson {
	kind: &'static str,
	props: Vec<&'static str>,
}
