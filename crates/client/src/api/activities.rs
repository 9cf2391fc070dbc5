// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::{encode_segment, parse_json_response, Result};
use crate::ActivityClient;

/// Details of a single activity as sent by the server
///
/// The activity name is not part of the details, it is the key of the surrounding map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// An activity with its enrolled participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique name, also used as identifier in URLs
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity
    ///
    /// Saturates at zero if the server reports more participants than the activity allows.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);

        self.max_participants.saturating_sub(taken)
    }
}

/// All activities in the order the server sent them
///
/// JSON Body of the response for *GET '/activities'*
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(pub Vec<Activity>);

impl Activities {
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an activity by its name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|activity| activity.name == name)
    }
}

impl IntoIterator for Activities {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity names to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or_default());

                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity {
                        name,
                        description: details.description,
                        schedule: details.schedule,
                        max_participants: details.max_participants,
                        participants: details.participants,
                    });
                }

                Ok(Activities(activities))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// The JSON Body expected when making a *POST* request on `/activities/{name}/signup`
#[derive(Debug, Serialize)]
pub struct Signup<'s> {
    pub email: &'s str,
}

/// JSON Body of a successful signup or unregister response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn activities_path() -> &'static str {
    "activities"
}

pub fn signup_path(activity: &str) -> String {
    format!("activities/{}/signup", encode_segment(activity))
}

pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "activities/{}/unregister/{}",
        encode_segment(activity),
        encode_segment(email)
    )
}

impl ActivityClient {
    /// Calls *GET '/activities'*
    pub async fn activities(&self) -> Result<Activities> {
        let response = self.get(activities_path()).await?;

        parse_json_response(response).await
    }

    /// Calls *POST '/activities/{activity}/signup'*
    pub async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        let response = self
            .post_json(&signup_path(activity), &Signup { email })
            .await?;

        parse_json_response(response).await
    }

    /// Calls *DELETE '/activities/{activity}/unregister/{email}'*
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        let response = self.delete(&unregister_path(activity, email)).await?;

        parse_json_response(response).await
    }
}
