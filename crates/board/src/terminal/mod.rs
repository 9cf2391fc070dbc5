// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Interactive text front end of the activity board
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::board::ActivityBoard;
use crate::status::StatusMessage;

mod command;
mod screen;

pub use command::{Command, ParseError, HELP};
pub use screen::{
    FormFields, Screen, TerminalForm, TerminalList, TerminalSelect, TerminalStatus, TerminalViews,
};

/// Drives an [`ActivityBoard`] from lines of user input
pub struct Terminal {
    board: Arc<ActivityBoard>,
    views: TerminalViews,
}

impl Terminal {
    /// `views` must be the views `board` renders into
    pub fn new(board: Arc<ActivityBoard>, views: TerminalViews) -> Self {
        Self { board, views }
    }

    fn println(&self, text: &str) {
        self.views.screen.println(text);
    }

    /// Load the activities and process commands until `quit` or the end of input
    pub async fn run<R>(&self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.board.load_activities().await;
        self.println("Type `help` for a list of commands.");

        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(ParseError::Empty) => continue,
                Err(e) => {
                    self.println(&e.to_string());
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            self.execute(command).await;
        }

        Ok(())
    }

    /// Execute a single command
    pub async fn execute(&self, command: Command) {
        tracing::debug!("executing {:?}", command);

        match command {
            Command::Help => self.println(HELP),
            Command::Refresh => self.board.load_activities().await,
            Command::Options => self.print_options(),
            Command::Select(option) => {
                self.select(option);
            }
            Command::Email(email) => self.views.form.set_email(email),
            Command::Submit => self.submit().await,
            Command::Signup { option, email } => {
                if self.select(option) {
                    self.views.form.set_email(email);
                    self.submit().await;
                }
            }
            Command::Unregister { card, participant } => {
                match self.views.list.participant(card, participant) {
                    Some((activity, email)) => self.board.unregister(&activity, &email).await,
                    None => self.println(&format!(
                        "There is no participant {} on card {}",
                        participant, card
                    )),
                }
            }
            Command::Status => match self.views.status.visible() {
                Some(message) => self.println(&screen::format_status(&message)),
                None => self.println("(no status)"),
            },
            Command::Quit => {}
        }
    }

    fn print_options(&self) {
        let options = self.views.select.options();

        if options.is_empty() {
            self.println("No activities to select.");
        }

        for (i, option) in options.iter().enumerate() {
            self.println(&format!("{}) {}", i + 1, option));
        }
    }

    /// Put the option into the form, returns false if there is no such option
    fn select(&self, option: usize) -> bool {
        match self.views.select.option(option) {
            Some(activity) => {
                self.views.form.set_activity(activity);
                true
            }
            None => {
                self.println(&format!("There is no option {}, try `options`", option));
                false
            }
        }
    }

    async fn submit(&self) {
        let FormFields { activity, email } = self.views.form.fields();

        match (activity, email) {
            (Some(activity), Some(email)) => self.board.sign_up(&activity, &email).await,
            _ => self.println("Select an activity and enter an email first"),
        }
    }

    /// The currently visible status message
    pub fn status(&self) -> Option<StatusMessage> {
        self.views.status.visible()
    }
}
