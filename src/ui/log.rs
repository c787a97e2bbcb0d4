//! Unified logging system

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn emit(icon: ColoredString, msg: &str) {
	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	println!("[{}] {} {}", time, icon, msg.bright_white());
}

pub fn info(msg: &str) {
	emit("ℹ".bright_blue().bold(), msg);
}

pub fn success(msg: &str) {
	emit("✓".bright_green().bold(), msg);
}

pub fn warn(msg: &str) {
	emit("⚠".bright_yellow().bold(), msg);
}

pub fn error(msg: &str) {
	emit("✗".bright_red().bold(), msg);
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Indented detail line under a log entry
pub fn detail(label: &str, value: &str) {
	println!("    {} {}", label.dimmed(), value);
}

/// Tool name and version banner
pub fn banner(tool: &str) {
	println!();
	println!(
		"{}",
		format!("─── {} v{} ───", tool, env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}

/// Prints an end-of-run summary; zero counters are omitted.
pub fn summary(done_label: &str, done: usize, skipped: usize, errors: usize) {
	header("Summary");

	println!("  {} {}", format!("{}:", done_label).bright_blue(), done);
	if skipped > 0 {
		println!("  {} {}", "Skipped:".yellow(), skipped);
	}
	if errors > 0 {
		println!("  {} {}", "Errors:".red(), errors);
	}
	println!();
}
