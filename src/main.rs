#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "vdiskinfo", about = "vSphere virtual disk backing inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Extract the property map of a backing descriptor document.
	Props(cmd::props::Args),
	/// List supported backing kinds and their exported properties.
	Kinds(cmd::kinds::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> vdiskinfo::vim::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Props(args) => cmd::props::run(args),
		Commands::Kinds(args) => cmd::kinds::run(args),
	}
}
