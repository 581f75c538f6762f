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

//! The messages exchanged with the topic administration service.

use std::collections::HashMap;

/// A topic resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Topic {
    /// The name of the topic. It must have the format
    /// `projects/{project}/topics/{topic}`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// A set of key value pairs used to organize your topics.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Policy constraining the set of Google Cloud Platform regions where
    /// messages published to the topic may be stored. If not present, then no
    /// constraints are in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_storage_policy: Option<MessageStoragePolicy>,

    /// The resource name of the Cloud KMS CryptoKey to be used to protect
    /// access to messages published on this topic.
    ///
    /// The expected format is
    /// `projects/*/locations/*/keyRings/*/cryptoKeys/*`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kms_key_name: String,
}

impl Topic {
    /// Create a new instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [name][Self::name] field.
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Set the [labels][Self::labels] field.
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Set the [message_storage_policy][Self::message_storage_policy] field.
    pub fn set_message_storage_policy<T: Into<MessageStoragePolicy>>(mut self, v: T) -> Self {
        self.message_storage_policy = Some(v.into());
        self
    }

    /// Set the [kms_key_name][Self::kms_key_name] field.
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_name = v.into();
        self
    }
}

impl wkt::message::Message for Topic {
    fn typename() -> &'static str {
        "type.googleapis.com/google.pubsub.v1.Topic"
    }
}

/// A policy constraining the storage of messages published to the topic.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MessageStoragePolicy {
    /// A list of IDs of GCP regions where messages that are published to the
    /// topic may be persisted in storage. Messages published by publishers
    /// running in non-allowed GCP regions (or running outside of GCP
    /// altogether) will be routed for storage in one of the allowed regions.
    /// An empty list means that no regions are allowed, and is not a valid
    /// configuration.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_persistence_regions: Vec<String>,
}

impl MessageStoragePolicy {
    /// Create a new instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [allowed_persistence_regions][Self::allowed_persistence_regions] field.
    pub fn set_allowed_persistence_regions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allowed_persistence_regions = v.into_iter().map(|r| r.into()).collect();
        self
    }
}

impl wkt::message::Message for MessageStoragePolicy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.pubsub.v1.MessageStoragePolicy"
    }
}

/// Request for the UpdateTopic method.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateTopicRequest {
    /// The updated topic object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,

    /// Indicates which fields in the provided topic to update. Must be
    /// specified and non-empty. Note that if `update_mask` contains
    /// "message_storage_policy" but the `message_storage_policy` is not set
    /// in the `topic` provided above, then the updated value is determined by
    /// the policy configured at the project or organization level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateTopicRequest {
    /// Create a new instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [topic][Self::topic] field.
    pub fn set_topic<T: Into<Topic>>(mut self, v: T) -> Self {
        self.topic = Some(v.into());
        self
    }

    /// Set the [update_mask][Self::update_mask] field.
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

impl wkt::message::Message for UpdateTopicRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.pubsub.v1.UpdateTopicRequest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_serialize() -> anyhow::Result<()> {
        let topic = Topic::new()
            .set_name("projects/my-project/topics/my-topic")
            .set_labels([("env", "prod")])
            .set_message_storage_policy(
                MessageStoragePolicy::new().set_allowed_persistence_regions(["us-central1"]),
            )
            .set_kms_key_name("projects/my-project/locations/global/keyRings/r/cryptoKeys/k");
        let got = serde_json::to_value(&topic)?;
        let want = json!({
            "name": "projects/my-project/topics/my-topic",
            "labels": {"env": "prod"},
            "messageStoragePolicy": {"allowedPersistenceRegions": ["us-central1"]},
            "kmsKeyName": "projects/my-project/locations/global/keyRings/r/cryptoKeys/k",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn topic_serialize_skips_defaults() -> anyhow::Result<()> {
        let got = serde_json::to_value(Topic::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn topic_deserialize_defaults() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Topic>(json!({
            "name": "projects/my-project/topics/my-topic",
        }))?;
        assert_eq!(
            got,
            Topic::new().set_name("projects/my-project/topics/my-topic")
        );
        Ok(())
    }

    #[test]
    fn update_request_serialize() -> anyhow::Result<()> {
        let request = UpdateTopicRequest::new()
            .set_topic(Topic::new().set_name("projects/my-project/topics/my-topic"))
            .set_update_mask(
                wkt::FieldMask::default().set_paths(vec!["labels".to_string()]),
            );
        let got = serde_json::to_value(&request)?;
        // FieldMask uses the custom protobuf JSON encoding: a single
        // comma-separated string, not an object.
        let want = json!({
            "topic": {"name": "projects/my-project/topics/my-topic"},
            "updateMask": "labels",
        });
        assert_eq!(got, want);
        Ok(())
    }
}
