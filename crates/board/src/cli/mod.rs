// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug, Clone)]
#[structopt(name = "activity-board")]
pub struct Args {
    #[structopt(
        short,
        long,
        default_value = "config.toml",
        help = "Specify path to configuration file"
    )]
    pub config: PathBuf,

    #[structopt(subcommand)]
    pub cmd: Option<SubCommand>,
}

/// One-shot commands, the interactive board starts if none is given
#[derive(StructOpt, Debug, Clone, PartialEq, Eq)]
#[structopt(rename_all = "kebab_case")]
pub enum SubCommand {
    /// Print all activities
    List,
    /// Sign up a participant for an activity
    Signup {
        /// Name of the activity
        activity: String,
        /// Email of the participant
        email: String,
    },
    /// Remove a participant from an activity
    Unregister {
        /// Name of the activity
        activity: String,
        /// Email of the participant
        email: String,
    },
}

impl Args {
    /// Returns true if the interactive board should start after parsing
    pub fn interactive(&self) -> bool {
        self.cmd.is_none()
    }
}

/// Parses the CLI-Arguments into [`Args`]
pub fn parse_args() -> Args {
    Args::from_args()
}
