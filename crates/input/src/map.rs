//! Line mapping from typed input to quiz actions.

/// What the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Start (or restart) a game
    Start,
    /// Abort the current game
    Stop,
    /// Submit a suburb name for the current round
    Guess(String),
    /// Zoom the map to a suburb without guessing
    Find(String),
    /// Zoom back out to the whole city
    ResetView,
    /// Switch to another city, by key
    City(String),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "commands: :start (or :s, :play), :stop, :find <suburb>, :reset, :city <melbourne|sydney>, :help, :quit; any other text is a guess";

/// Map a line of input to an action.
///
/// Returns `None` for blank lines and unknown `:` commands. Guesses are
/// trimmed but otherwise passed through verbatim; matching against the
/// target is exact.
pub fn parse_line(line: &str) -> Option<UserAction> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(UserAction::Guess(line.to_string()));
    };

    let command = command.trim();
    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));

    match (name.to_lowercase().as_str(), arg) {
        ("start" | "s" | "play" | "again", "") => Some(UserAction::Start),
        ("stop" | "menu", "") => Some(UserAction::Stop),
        ("find" | "f", "") | ("reset", "") => Some(UserAction::ResetView),
        ("find" | "f", suburb) => Some(UserAction::Find(suburb.to_string())),
        ("city" | "c", key) if !key.is_empty() => Some(UserAction::City(key.to_string())),
        ("help" | "h" | "?", "") => Some(UserAction::Help),
        ("quit" | "q" | "exit", "") => Some(UserAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(parse_line(":start"), Some(UserAction::Start));
        assert_eq!(parse_line(":S"), Some(UserAction::Start));
        assert_eq!(parse_line(":again"), Some(UserAction::Start));
        assert_eq!(parse_line(":stop"), Some(UserAction::Stop));
        assert_eq!(parse_line(":menu"), Some(UserAction::Stop));
        assert_eq!(parse_line(":help"), Some(UserAction::Help));
        assert_eq!(parse_line(":?"), Some(UserAction::Help));
        assert_eq!(parse_line(":q"), Some(UserAction::Quit));
        assert_eq!(parse_line("  :Quit  "), Some(UserAction::Quit));
    }

    #[test]
    fn test_guess_is_trimmed_but_verbatim() {
        assert_eq!(
            parse_line("  North Melbourne \n"),
            Some(UserAction::Guess("North Melbourne".to_string()))
        );
        assert_eq!(
            parse_line("richmond"),
            Some(UserAction::Guess("richmond".to_string()))
        );
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line(":bogus"), None);
    }

    #[test]
    fn test_find_and_reset() {
        assert_eq!(
            parse_line(":find North Melbourne"),
            Some(UserAction::Find("North Melbourne".to_string()))
        );
        assert_eq!(
            parse_line(":F   St Kilda  "),
            Some(UserAction::Find("St Kilda".to_string()))
        );
        assert_eq!(parse_line(":find"), Some(UserAction::ResetView));
        assert_eq!(parse_line(":reset"), Some(UserAction::ResetView));
    }

    #[test]
    fn test_city_switch() {
        assert_eq!(
            parse_line(":city Sydney"),
            Some(UserAction::City("Sydney".to_string()))
        );
        assert_eq!(
            parse_line(":c perth"),
            Some(UserAction::City("perth".to_string()))
        );
        assert_eq!(parse_line(":city"), None);
    }

    #[test]
    fn test_commands_without_arguments_reject_extras() {
        assert_eq!(parse_line(":start now"), None);
        assert_eq!(parse_line(":quit please"), None);
    }
}
