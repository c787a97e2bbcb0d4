//! Confirmation before destructive actions

use std::io::{self, BufRead, Write};

use colored::*;

use crate::config::CONFIRM_ANSWERS;

/// Asks the user whether a destructive step may proceed
pub trait Confirm {
	fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Pre-approved confirmation, selected by `--yes`
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
	fn confirm(&mut self, _question: &str) -> io::Result<bool> {
		Ok(true)
	}
}

/// Interactive `(y/N)` prompt
pub struct Prompt<R, W> {
	input: R,
	output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
	pub fn stdin() -> Self {
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> Prompt<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
	fn confirm(&mut self, question: &str) -> io::Result<bool> {
		write!(self.output, "\n{} {} ", question, "(y/N):".dimmed())?;
		self.output.flush()?;

		let mut answer = String::new();
		self.input.read_line(&mut answer)?;

		let answer = answer.trim();
		Ok(CONFIRM_ANSWERS.iter().any(|a| a.eq_ignore_ascii_case(answer)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn ask(input: &str) -> bool {
		let mut out = Vec::new();
		Prompt::new(Cursor::new(input.as_bytes()), &mut out)
			.confirm("Proceed?")
			.unwrap()
	}

	#[test]
	fn accepts_y_and_yes() {
		assert!(ask("y\n"));
		assert!(ask("YES\n"));
		assert!(ask("  Yes  \n"));
	}

	#[test]
	fn anything_else_declines() {
		assert!(!ask("\n"));
		assert!(!ask("n\n"));
		assert!(!ask("yep\n"));
		assert!(!ask(""));
	}

	#[test]
	fn assume_yes_never_asks() {
		assert!(AssumeYes.confirm("Delete everything?").unwrap());
	}
}
