// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use activity_board_core::client::{
    Activities, Activity, Error, HttpError, MessageResponse, Result, StatusCode,
};
use activity_board_core::status::StatusMessage;
use activity_board_core::view::{
    ActivityCard, ActivityList, ActivitySelect, SignupForm, StatusArea, Views,
};
use activity_board_core::{ActivityApi, ActivityBoard};
use async_trait::async_trait;
use parking_lot::Mutex;

pub const HIDE_AFTER: Duration = Duration::from_millis(5000);

/// A request the fake server received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Activities,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// Everything that happened, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Request(Request),
    Render(Vec<String>),
    Failure(String),
    ClearOptions,
    AddOption(String),
    Reset,
    Show(StatusMessage),
    Hide,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn activity(name: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.into(),
        description: format!("{} description", name),
        schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn school_activities() -> Vec<Activity> {
    vec![
        activity(
            "Chess Club",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity("Programming Class", 20, &["emma@mergington.edu"]),
        activity("Gym Class", 30, &[]),
    ]
}

pub fn rejected(status: StatusCode, detail: Option<&str>) -> Error {
    Error::Rejected(HttpError {
        status,
        detail: detail.map(ToOwned::to_owned),
    })
}

/// An error for a response that never arrived in a usable shape
pub fn broken_response() -> Error {
    Error::MalformedBody(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
}

/// In-memory stand-in for the activity server
pub struct FakeApi {
    log: EventLog,
    activities: Mutex<Vec<Activity>>,
    /// Errors returned by the next `activities` calls
    pub load_errors: Mutex<Vec<Error>>,
    /// Result returned by the next `signup` call instead of the regular behaviour
    pub next_signup: Mutex<Option<Result<MessageResponse>>>,
    /// Result returned by the next `unregister` call instead of the regular behaviour
    pub next_unregister: Mutex<Option<Result<MessageResponse>>>,
}

impl FakeApi {
    pub fn new(log: EventLog, activities: Vec<Activity>) -> Self {
        Self {
            log,
            activities: Mutex::new(activities),
            load_errors: Mutex::new(Vec::new()),
            next_signup: Mutex::new(None),
            next_unregister: Mutex::new(None),
        }
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .lock()
            .iter()
            .find(|a| a.name == activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ActivityApi for FakeApi {
    async fn activities(&self) -> Result<Activities> {
        self.log.lock().push(Event::Request(Request::Activities));

        let mut errors = self.load_errors.lock();
        if !errors.is_empty() {
            return Err(errors.remove(0));
        }

        Ok(Activities(self.activities.lock().clone()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        self.log.lock().push(Event::Request(Request::Signup {
            activity: activity.into(),
            email: email.into(),
        }));

        if let Some(result) = self.next_signup.lock().take() {
            return result;
        }

        let mut activities = self.activities.lock();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(StatusCode::NOT_FOUND, Some("Activity not found")))?;

        if entry.participants.iter().any(|p| p == email) {
            return Err(rejected(
                StatusCode::BAD_REQUEST,
                Some("Student is already signed up"),
            ));
        }

        entry.participants.push(email.into());

        Ok(MessageResponse {
            message: format!("Signed up {} for {}", email, activity),
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        self.log.lock().push(Event::Request(Request::Unregister {
            activity: activity.into(),
            email: email.into(),
        }));

        if let Some(result) = self.next_unregister.lock().take() {
            return result;
        }

        let mut activities = self.activities.lock();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(|| rejected(StatusCode::NOT_FOUND, Some("Activity not found")))?;

        let before = entry.participants.len();
        entry.participants.retain(|p| p != email);

        if entry.participants.len() == before {
            return Err(rejected(
                StatusCode::NOT_FOUND,
                Some("Student not found in this activity"),
            ));
        }

        Ok(MessageResponse {
            message: format!("Unregistered {} from {}", email, activity),
        })
    }
}

/// Implements all views and records what the board did to them
#[derive(Default)]
pub struct Recorder {
    log: EventLog,
    pub cards: Mutex<Vec<ActivityCard>>,
    pub notice: Mutex<Option<String>>,
    pub options: Mutex<Vec<String>>,
    pub resets: Mutex<u32>,
    pub status: Mutex<Option<StatusMessage>>,
}

impl Recorder {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Default::default()
        }
    }

    fn record(&self, event: Event) {
        self.log.lock().push(event);
    }
}

impl ActivityList for Recorder {
    fn render(&self, cards: &[ActivityCard]) {
        self.record(Event::Render(cards.iter().map(|c| c.name.clone()).collect()));
        *self.cards.lock() = cards.to_vec();
        *self.notice.lock() = None;
    }

    fn show_failure(&self, notice: &str) {
        self.record(Event::Failure(notice.into()));
        self.cards.lock().clear();
        *self.notice.lock() = Some(notice.into());
    }
}

impl ActivitySelect for Recorder {
    fn clear(&self) {
        self.record(Event::ClearOptions);
        self.options.lock().clear();
    }

    fn add_option(&self, activity: &str) {
        self.record(Event::AddOption(activity.into()));
        self.options.lock().push(activity.into());
    }
}

impl SignupForm for Recorder {
    fn reset(&self) {
        self.record(Event::Reset);
        *self.resets.lock() += 1;
    }
}

impl StatusArea for Recorder {
    fn show(&self, message: &StatusMessage) {
        self.record(Event::Show(message.clone()));
        *self.status.lock() = Some(message.clone());
    }

    fn hide(&self) {
        self.record(Event::Hide);
        *self.status.lock() = None;
    }
}

/// A board wired to a [`FakeApi`] and a [`Recorder`]
pub struct Harness {
    pub log: EventLog,
    pub api: Arc<FakeApi>,
    pub views: Arc<Recorder>,
    pub board: ActivityBoard,
}

impl Harness {
    pub fn new(activities: Vec<Activity>) -> Self {
        let log = EventLog::default();
        let api = Arc::new(FakeApi::new(log.clone(), activities));
        let views = Arc::new(Recorder::new(log.clone()));

        let board = ActivityBoard::new(
            api.clone(),
            Views {
                list: views.clone(),
                select: views.clone(),
                form: views.clone(),
                status: views.clone(),
            },
            HIDE_AFTER,
        );

        Self {
            log,
            api,
            views,
            board,
        }
    }

    /// Take all events recorded so far
    pub fn events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.log.lock())
    }

    pub fn requests(&self) -> Vec<Request> {
        self.log
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Request(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.views.status.lock().clone()
    }
}

/// A writer whose output can be inspected
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
