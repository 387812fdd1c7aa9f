/// Inbound chat command, parsed from the wire strings the keyboard
/// buttons carry as callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/start`: first contact, answered with a greeting.
    Start,
    /// `/play`: start (or restart) a game.
    Play,
    /// `/move <row> <col>`: place the human mark.
    Move { row: usize, col: usize },
    /// `ignore`: a disabled keyboard button, dropped silently.
    Ignore,
}

impl ChatCommand {
    pub fn parse(data: &str) -> Result<Self, String> {
        let mut parts = data.split_whitespace();

        match parts.next() {
            Some("/start") => Ok(ChatCommand::Start),
            Some("/play") => Ok(ChatCommand::Play),
            Some("ignore") => Ok(ChatCommand::Ignore),
            Some("/move") => {
                let row = parts
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .ok_or_else(|| format!("Invalid move format: {}", data))?;
                let col = parts
                    .next()
                    .and_then(|v| v.parse::<usize>().ok())
                    .ok_or_else(|| format!("Invalid move format: {}", data))?;

                if parts.next().is_some() {
                    return Err(format!("Invalid move format: {}", data));
                }

                Ok(ChatCommand::Move { row, col })
            }
            _ => Err(format!("Unknown command: {}", data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ChatCommand::parse("/start"), Ok(ChatCommand::Start));
        assert_eq!(ChatCommand::parse("/play"), Ok(ChatCommand::Play));
        assert_eq!(ChatCommand::parse("ignore"), Ok(ChatCommand::Ignore));
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            ChatCommand::parse("/move 1 2"),
            Ok(ChatCommand::Move { row: 1, col: 2 })
        );
        assert_eq!(
            ChatCommand::parse("/move 0 0"),
            Ok(ChatCommand::Move { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_parse_move_accepts_out_of_range_coordinates() {
        // Range checking belongs to the game state, not the parser.
        assert_eq!(
            ChatCommand::parse("/move 7 0"),
            Ok(ChatCommand::Move { row: 7, col: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_malformed_moves() {
        assert!(ChatCommand::parse("/move").is_err());
        assert!(ChatCommand::parse("/move 1").is_err());
        assert!(ChatCommand::parse("/move a b").is_err());
        assert!(ChatCommand::parse("/move 1 2 3").is_err());
        assert!(ChatCommand::parse("/move -1 0").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_commands() {
        assert!(ChatCommand::parse("/help").is_err());
        assert!(ChatCommand::parse("").is_err());
    }
}
