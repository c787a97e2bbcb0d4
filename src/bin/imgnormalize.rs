//! imgnormalize - strip hash suffixes from image filenames and update the JSON catalog

use clap::Parser;

use imgsync::cli::NormalizeCli;
use imgsync::commands::normalize;
use imgsync::ui::{self, Log};

fn main() {
	let cli = NormalizeCli::parse();

	Log::set_verbose(cli.verbose);
	ui::banner("imgnormalize");

	let mut confirm = cli.args.confirmer();
	if let Err(e) = normalize::run(&cli.args.options(), confirm.as_mut()) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}
