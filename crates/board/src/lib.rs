// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Core library of the *Activity Board*
//!
//! The [`ActivityBoard`] keeps a rendered list of activities in sync with the signup API and
//! turns user actions into requests. Rendering targets are injected as [`view`] traits, the
//! remote side as an [`ActivityApi`].
//!
//! # Example
//!
//! ```no_run
//! use activity_board_core::App;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() {
//!     activity_board_core::try_or_exit(run()).await;
//! }
//!
//! async fn run() -> Result<()> {
//!     App::create("Activity Board")?.run().await
//! }
//! ```
use std::sync::Arc;

use anyhow::{Context, Result};
use client::{ActivityClient, Config};
use tokio::io::BufReader;
use tokio::signal::ctrl_c;

mod api;
mod board;
pub mod cli;
pub mod settings;
pub mod status;
pub mod terminal;
mod trace;
pub mod view;

pub use api::ActivityApi;
pub use board::{
    ActivityBoard, LOAD_FAILURE_NOTICE, SIGNUP_FAILED, SIGNUP_REJECTED, UNREGISTER_FAILED,
};
pub use client;

use cli::{Args, SubCommand};
use settings::Settings;
use terminal::{Screen, Terminal, TerminalViews};

/// Wrapper of the main function. Correctly outputs the error to the logging utility or stderr.
pub async fn try_or_exit<T, F>(f: F) -> T
where
    F: std::future::Future<Output = Result<T>>,
{
    match f.await {
        Ok(ok) => ok,
        Err(err) => {
            if tracing::enabled!(tracing::Level::ERROR) {
                tracing::error!("Crashed with error: {:?}", err);
            } else {
                eprintln!("Crashed with error: {err:?}");
            }

            std::process::exit(-1);
        }
    }
}

/// The activity board wired to the terminal and the configured API
pub struct App {
    args: Args,
    terminal: Terminal,
    board: Arc<ActivityBoard>,
}

impl App {
    /// Parses the CLI arguments, loads the settings, sets up logging and builds the board
    pub fn create(program_name: &str) -> Result<Self> {
        let args = cli::parse_args();

        let settings = Settings::load(&args.config).context("Failed to load settings")?;

        trace::init(&settings.logging).context("Failed to initialize logging")?;

        tracing::info!("Starting {}", program_name);
        tracing::info!("Activity API: {}", settings.api.base_url);

        Self::init(settings, args)
    }

    fn init(settings: Settings, args: Args) -> Result<Self> {
        let client = ActivityClient::new(Config::new(
            settings.api.base_url.clone(),
            settings.api.timeout,
        ))
        .context("Failed to create HTTP client")?;

        let views = TerminalViews::new(Arc::new(Screen::stdout()));

        let board = Arc::new(ActivityBoard::new(
            Arc::new(client),
            views.views(),
            settings.status.hide_after,
        ));

        let terminal = Terminal::new(board.clone(), views);

        Ok(Self {
            args,
            terminal,
            board,
        })
    }

    /// Runs a one-shot command, or the interactive board until the user quits or hits Ctrl-C
    pub async fn run(self) -> Result<()> {
        match &self.args.cmd {
            Some(SubCommand::List) => self.board.load_activities().await,
            Some(SubCommand::Signup { activity, email }) => {
                self.board.sign_up(activity, email).await
            }
            Some(SubCommand::Unregister { activity, email }) => {
                self.board.unregister(activity, email).await
            }
            None => {
                let input = BufReader::new(tokio::io::stdin());

                tokio::select! {
                    res = self.terminal.run(input) => res?,
                    _ = ctrl_c() => tracing::info!("Got termination signal, exiting"),
                }
            }
        }

        Ok(())
    }
}
