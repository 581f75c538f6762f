// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Identifies a Cloud Pub/Sub topic.
///
/// Topics are identified by their project id and topic id. Most RPCs expect
/// the fully qualified name, `projects/{project-id}/topics/{topic-id}`, which
/// this type produces.
///
/// # Example
/// ```
/// use google_cloud_pubsub_admin::Topic;
/// let topic = Topic::new("my-project", "my-topic");
/// assert_eq!(
///     topic.fully_qualified_name(),
///     "projects/my-project/topics/my-topic"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic {
    project_id: String,
    topic_id: String,
}

impl Topic {
    /// Creates a topic identifier from a project id and topic id.
    ///
    /// Neither component is validated here; the service rejects ids that do
    /// not satisfy its naming rules.
    pub fn new<P, T>(project_id: P, topic_id: T) -> Self
    where
        P: Into<String>,
        T: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            topic_id: topic_id.into(),
        }
    }

    /// The project id.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The topic id, without the project prefix.
    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    /// The fully qualified topic name, as expected by the service.
    pub fn fully_qualified_name(&self) -> String {
        format!("projects/{}/topics/{}", self.project_id, self.topic_id)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "projects/{}/topics/{}", self.project_id, self.topic_id)
    }
}

impl std::str::FromStr for Topic {
    type Err = InvalidTopicName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split('/').collect::<Vec<_>>();
        match parts.as_slice() {
            ["projects", project_id, "topics", topic_id]
                if !project_id.is_empty() && !topic_id.is_empty() =>
            {
                Ok(Topic::new(*project_id, *topic_id))
            }
            _ => Err(InvalidTopicName {
                name: s.to_string(),
            }),
        }
    }
}

/// The error returned when parsing a malformed topic name.
#[derive(thiserror::Error, Debug)]
#[error("topic names must be in the projects/{{project-id}}/topics/{{topic-id}} format, got: {name}")]
#[non_exhaustive]
pub struct InvalidTopicName {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn accessors() {
        let topic = Topic::new("my-project", "my-topic");
        assert_eq!(topic.project_id(), "my-project");
        assert_eq!(topic.topic_id(), "my-topic");
        assert_eq!(
            topic.fully_qualified_name(),
            "projects/my-project/topics/my-topic"
        );
        assert_eq!(topic.to_string(), topic.fully_qualified_name());
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let topic = "projects/my-project/topics/my-topic".parse::<Topic>()?;
        assert_eq!(topic, Topic::new("my-project", "my-topic"));
        Ok(())
    }

    #[test]
    fn parse_round_trip() -> anyhow::Result<()> {
        let topic = Topic::new("my-project", "my-topic");
        let parsed = topic.fully_qualified_name().parse::<Topic>()?;
        assert_eq!(parsed, topic);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("my-topic"; "bare id")]
    #[test_case("projects/my-project"; "missing collection")]
    #[test_case("projects/my-project/topics/"; "empty topic id")]
    #[test_case("projects//topics/my-topic"; "empty project id")]
    #[test_case("projects/my-project/subscriptions/my-sub"; "wrong collection")]
    #[test_case("v1/projects/my-project/topics/my-topic"; "extra prefix")]
    fn parse_invalid(input: &str) {
        let err = input.parse::<Topic>().unwrap_err();
        assert!(err.to_string().contains(input), "{err}");
    }

    #[test]
    fn ordering() {
        let mut topics = vec![
            Topic::new("p2", "t1"),
            Topic::new("p1", "t2"),
            Topic::new("p1", "t1"),
        ];
        topics.sort();
        assert_eq!(
            topics,
            vec![
                Topic::new("p1", "t1"),
                Topic::new("p1", "t2"),
                Topic::new("p2", "t1"),
            ]
        );
    }
}
