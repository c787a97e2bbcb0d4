//! imgprune - remove images the JSON catalog no longer references

use clap::Parser;

use imgsync::cli::PruneCli;
use imgsync::commands::prune;
use imgsync::ui::{self, Log};

fn main() {
	let cli = PruneCli::parse();

	Log::set_verbose(cli.verbose);
	ui::banner("imgprune");

	let mut confirm = cli.args.confirmer();
	if let Err(e) = prune::run(&cli.args.options(), confirm.as_mut()) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}
