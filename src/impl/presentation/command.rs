/// Chat command recognized by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Reply with the id and title of the invoking chat.
    ChatId,
    /// Daily summary; optional `YYYY-MM-DD` argument.
    Summary(Option<String>),
    /// Monthly summary; optional `YYYY-MM` argument.
    Month(Option<String>),
    /// Administrative reset of the payment store.
    Clear,
}

impl Command {
    /// Whether the text is addressed to the command router at all.
    pub fn is_command(text: &str) -> bool {
        text.trim_start().starts_with('/')
    }

    /// Parses `/name[@bot] [argument]`. Returns `None` for plain text, for
    /// unknown commands and for commands addressed to a bot other than
    /// `bot_username` (compared case-insensitively, leading `@` optional).
    /// Without a configured username every mention is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Command> {
        let rest = text.trim().strip_prefix('/')?;
        let (head, arg) = match rest.split_once(char::is_whitespace) {
            Some((head, arg)) => (head, Some(arg.trim())),
            None => (rest, None),
        };
        let (name, mention) = match head.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (head, None),
        };
        if let (Some(mention), Some(username)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(username.trim_start_matches('@')) {
                return None;
            }
        }
        let arg = arg.filter(|a| !a.is_empty()).map(str::to_string);
        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Command::Start),
            "chatid" => Some(Command::ChatId),
            "summary" => Some(Command::Summary(arg)),
            "month" => Some(Command::Month(arg)),
            "clear" => Some(Command::Clear),
            _ => None,
        }
    }
}
