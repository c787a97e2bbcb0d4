use clap::builder::styling::{AnsiColor, Styles};
use clap::{Args, Parser};
use colored::Colorize;
use std::path::PathBuf;

use crate::commands::PipelineOptions;
use crate::ui::{AssumeYes, Confirm, Prompt};

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().bold())
		.usage(AnsiColor::Blue.on_default().bold())
		.literal(AnsiColor::Blue.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.valid(AnsiColor::Blue.on_default())
		.invalid(AnsiColor::Red.on_default())
}

fn examples(tool: &str, desc: &str) -> String {
	format!(
		"{title}
  {tool} {args}            {desc}
  {tool} {args} {dry}  {dry_desc}",
		title = "Examples:".bright_blue().bold(),
		tool = tool.bright_blue(),
		args = "data.json ./data/imgs".yellow(),
		desc = desc.dimmed(),
		dry = "--dry-run".yellow(),
		dry_desc = "Preview without changes".dimmed(),
	)
}

/// Arguments shared by both tools
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
	/// Path to JSON file containing image references
	#[arg(value_name = "JSON_FILE")]
	pub json_file: PathBuf,

	/// Path to folder containing images
	#[arg(value_name = "DATA_FOLDER")]
	pub data_folder: PathBuf,

	/// Preview changes without modifying files or JSON
	#[arg(long = "dry-run")]
	pub dry_run: bool,

	/// Skip the confirmation prompt
	#[arg(short = 'y', long = "yes", conflicts_with = "dry_run")]
	pub yes: bool,
}

impl PipelineArgs {
	pub fn options(&self) -> PipelineOptions {
		PipelineOptions {
			json_file: self.json_file.clone(),
			data_folder: self.data_folder.clone(),
			dry_run: self.dry_run,
		}
	}

	pub fn confirmer(&self) -> Box<dyn Confirm> {
		if self.yes {
			Box::new(AssumeYes)
		} else {
			Box::new(Prompt::stdin())
		}
	}
}

#[derive(Parser, Debug)]
#[command(
	name = "imgprune",
	version,
	about = "Remove images from a data folder that the JSON file does not reference",
	styles = styles(),
	after_help = examples("imgprune", "Delete unreferenced images"),
)]
pub struct PruneCli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,

	#[command(flatten)]
	pub args: PipelineArgs,
}

#[derive(Parser, Debug)]
#[command(
	name = "imgnormalize",
	version,
	about = "Normalize image filenames by removing hash codes and update the JSON file",
	styles = styles(),
	after_help = examples("imgnormalize", "Strip hash suffixes"),
)]
pub struct NormalizeCli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose")]
	pub verbose: bool,

	#[command(flatten)]
	pub args: PipelineArgs,
}
