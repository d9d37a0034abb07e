#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    /// A leading `//` sends the rest literally with a single slash, so text
    /// such as `/s` can be said rather than run.
    pub fn unescape(text: &str) -> Option<String> {
        let trimmed = text.trim_start();
        if !trimmed.starts_with("//") {
            return None;
        }

        return Some(trimmed[1..].to_string());
    }

    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }
        let prefix = args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_agent_1()
            || cmd.is_agent_2()
            || cmd.is_switch()
            || cmd.is_clear()
            || cmd.is_suggest()
            || cmd.is_use_suggestion()
            || cmd.is_copy_chat()
            || cmd.is_help()
            || cmd.is_send()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_agent_1(&self) -> bool {
        return ["/1", "/agent1"].contains(&self.command.as_str());
    }

    pub fn is_agent_2(&self) -> bool {
        return ["/2", "/agent2"].contains(&self.command.as_str());
    }

    pub fn is_switch(&self) -> bool {
        return ["/s", "/switch"].contains(&self.command.as_str());
    }

    pub fn is_clear(&self) -> bool {
        return ["/clear"].contains(&self.command.as_str());
    }

    pub fn is_suggest(&self) -> bool {
        return ["/r", "/suggest"].contains(&self.command.as_str());
    }

    pub fn is_use_suggestion(&self) -> bool {
        return ["/u", "/use"].contains(&self.command.as_str()) && !self.args.is_empty();
    }

    pub fn is_copy_chat(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_send(&self) -> bool {
        return ["/send"].contains(&self.command.as_str());
    }

    /// Position of the participant named by `/agent1`, `/2` and friends.
    pub fn participant_position(&self) -> &str {
        return self
            .command
            .trim_start_matches('/')
            .trim_start_matches("agent");
    }

    /// Free text following the command, e.g. the question for `/suggest`.
    pub fn rest(&self) -> String {
        return self.args.join(" ");
    }
}
