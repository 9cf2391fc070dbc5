// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Text renditions of the board views
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::status::{StatusKind, StatusMessage};
use crate::view::{ActivityCard, ActivityList, ActivitySelect, SignupForm, StatusArea, Views};

/// Line oriented output shared by all terminal views
pub struct Screen {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Screen {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Print `text` followed by a newline
    ///
    /// Views cannot fail, write errors are only logged.
    pub fn println(&self, text: &str) {
        let mut out = self.out.lock();

        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

pub(crate) fn format_card(number: usize, card: &ActivityCard) -> String {
    let mut text = String::new();

    // writing into a String is infallible
    let _ = writeln!(text, "{}. {}", number, card.name);
    let _ = writeln!(text, "   Description: {}", card.description);
    let _ = writeln!(text, "   Schedule: {}", card.schedule);
    let _ = writeln!(
        text,
        "   Availability: {} ({} spots left)",
        card.availability(),
        card.spots_left
    );
    let _ = write!(text, "   Current Participants:");

    if card.participants.is_empty() {
        let _ = write!(text, "\n     (none)");
    }

    for (i, email) in card.participants.iter().enumerate() {
        let _ = write!(
            text,
            "\n     {}) {}  [unregister {} {}]",
            i + 1,
            email,
            number,
            i + 1
        );
    }

    text
}

/// The activity list, remembers the rendered cards to resolve participant numbers
pub struct TerminalList {
    screen: Arc<Screen>,
    cards: Mutex<Vec<ActivityCard>>,
}

impl TerminalList {
    pub fn new(screen: Arc<Screen>) -> Self {
        Self {
            screen,
            cards: Mutex::new(Vec::new()),
        }
    }

    /// Resolve the 1-based card and participant numbers to `(activity, email)`
    pub fn participant(&self, card: usize, participant: usize) -> Option<(String, String)> {
        let cards = self.cards.lock();

        let card = cards.get(card.checked_sub(1)?)?;
        let email = card.participants.get(participant.checked_sub(1)?)?;

        Some((card.name.clone(), email.clone()))
    }
}

impl ActivityList for TerminalList {
    fn render(&self, cards: &[ActivityCard]) {
        *self.cards.lock() = cards.to_vec();

        if cards.is_empty() {
            self.screen.println("No activities.");
        }

        for (i, card) in cards.iter().enumerate() {
            self.screen.println(&format_card(i + 1, card));
        }
    }

    fn show_failure(&self, notice: &str) {
        self.cards.lock().clear();
        self.screen.println(notice);
    }
}

/// The selection control, options are addressed by their 1-based position
#[derive(Default)]
pub struct TerminalSelect {
    options: Mutex<Vec<String>>,
}

impl TerminalSelect {
    pub fn option(&self, number: usize) -> Option<String> {
        self.options.lock().get(number.checked_sub(1)?).cloned()
    }

    pub fn options(&self) -> Vec<String> {
        self.options.lock().clone()
    }
}

impl ActivitySelect for TerminalSelect {
    fn clear(&self) {
        self.options.lock().clear();
    }

    fn add_option(&self, activity: &str) {
        self.options.lock().push(activity.into());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub activity: Option<String>,
    pub email: Option<String>,
}

/// The signup form, holds the inputs until they are submitted
#[derive(Default)]
pub struct TerminalForm {
    fields: Mutex<FormFields>,
}

impl TerminalForm {
    pub fn set_activity(&self, activity: String) {
        self.fields.lock().activity = Some(activity);
    }

    pub fn set_email(&self, email: String) {
        self.fields.lock().email = Some(email);
    }

    pub fn fields(&self) -> FormFields {
        self.fields.lock().clone()
    }
}

impl SignupForm for TerminalForm {
    fn reset(&self) {
        *self.fields.lock() = FormFields::default();
    }
}

/// The status area, prints messages when they appear
pub struct TerminalStatus {
    screen: Arc<Screen>,
    visible: Mutex<Option<StatusMessage>>,
}

impl TerminalStatus {
    pub fn new(screen: Arc<Screen>) -> Self {
        Self {
            screen,
            visible: Mutex::new(None),
        }
    }

    pub fn visible(&self) -> Option<StatusMessage> {
        self.visible.lock().clone()
    }
}

pub(crate) fn format_status(message: &StatusMessage) -> String {
    match message.kind {
        StatusKind::Success => format!("[ok] {}", message.text),
        StatusKind::Error => format!("[error] {}", message.text),
    }
}

impl StatusArea for TerminalStatus {
    fn show(&self, message: &StatusMessage) {
        *self.visible.lock() = Some(message.clone());
        self.screen.println(&format_status(message));
    }

    fn hide(&self) {
        if let Some(message) = self.visible.lock().take() {
            tracing::debug!("status message `{}` expired", message.text);
        }
    }
}

/// All terminal views, sharing one screen
pub struct TerminalViews {
    pub screen: Arc<Screen>,
    pub list: Arc<TerminalList>,
    pub select: Arc<TerminalSelect>,
    pub form: Arc<TerminalForm>,
    pub status: Arc<TerminalStatus>,
}

impl TerminalViews {
    pub fn new(screen: Arc<Screen>) -> Self {
        Self {
            list: Arc::new(TerminalList::new(screen.clone())),
            select: Arc::new(TerminalSelect::default()),
            form: Arc::new(TerminalForm::default()),
            status: Arc::new(TerminalStatus::new(screen.clone())),
            screen,
        }
    }

    /// The views as handed to the board
    pub fn views(&self) -> Views {
        Views {
            list: self.list.clone(),
            select: self.select.clone(),
            form: self.form.clone(),
            status: self.status.clone(),
        }
    }
}
