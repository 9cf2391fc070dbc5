// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  list | refresh                  reload and print all activities
  options                         print the activities available for signup
  select <option>                 pick the activity to sign up for
  email <address>                 enter the email to sign up
  submit                          sign up with the selected activity and email
  signup <option> <address>       select, enter and submit in one go
  unregister <card> <participant> remove a participant, both numbers as listed
  status                          print the current status message
  help                            print this help
  quit                            leave";

/// A line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Refresh,
    Options,
    Select(usize),
    Email(String),
    Submit,
    Signup { option: usize, email: String },
    Unregister { card: usize, participant: usize },
    Status,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("`{0}` is not a positive number")]
    InvalidNumber(String),
    #[error("too many arguments for `{0}`")]
    TooManyArguments(&'static str),
}

fn number<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<usize, ParseError> {
    let arg = args.next().ok_or(ParseError::Missing(what))?;

    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber(arg.into())),
    }
}

fn text<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<String, ParseError> {
    args.next()
        .map(ToOwned::to_owned)
        .ok_or(ParseError::Missing(what))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut args = line.split_whitespace();

        let name = args.next().ok_or(ParseError::Empty)?;

        let (command, name) = match name {
            "help" | "?" => (Command::Help, "help"),
            "list" | "refresh" => (Command::Refresh, "list"),
            "options" => (Command::Options, "options"),
            "select" => (Command::Select(number(&mut args, "option")?), "select"),
            "email" => (Command::Email(text(&mut args, "email address")?), "email"),
            "submit" => (Command::Submit, "submit"),
            "signup" => (
                Command::Signup {
                    option: number(&mut args, "option")?,
                    email: text(&mut args, "email address")?,
                },
                "signup",
            ),
            "unregister" => (
                Command::Unregister {
                    card: number(&mut args, "card")?,
                    participant: number(&mut args, "participant")?,
                },
                "unregister",
            ),
            "status" => (Command::Status, "status"),
            "quit" | "exit" => (Command::Quit, "quit"),
            unknown => return Err(ParseError::Unknown(unknown.into())),
        };

        if args.next().is_some() {
            return Err(ParseError::TooManyArguments(name));
        }

        Ok(command)
    }
}
