/// Voice commands the sketch responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	/// Erase the whole canvas.
	Clear,
}

/// Matches a finalized transcript against the command vocabulary. Exact match
/// after trimming and lowercasing; embedding the keyword in a longer phrase
/// does nothing.
pub fn parse_command(transcript: &str) -> Option<Command> {
	match transcript.trim().to_lowercase().as_str() {
		"clear" => Some(Command::Clear),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn case_and_whitespace_are_ignored() {
		assert_eq!(parse_command("clear"), Some(Command::Clear));
		assert_eq!(parse_command("Clear"), Some(Command::Clear));
		assert_eq!(parse_command("  CLEAR \n"), Some(Command::Clear));
	}

	#[test]
	fn only_exact_matches_trigger() {
		assert_eq!(parse_command("please clear now"), None);
		assert_eq!(parse_command("clearly"), None);
		assert_eq!(parse_command(""), None);
	}
}
