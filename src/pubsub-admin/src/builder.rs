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

use crate::model;
use crate::topic::Topic;
use std::collections::BTreeSet;

/// Composes a Cloud Pub/Sub topic configuration.
///
/// Accumulates changes to the configuration of a topic, then produces either
/// the full resource for a create request, or an update request whose field
/// mask names exactly the fields that were changed. Fields absent from the
/// mask are left untouched by the service, even though they appear with
/// default values in the request.
///
/// Mutators consume and return the builder, so changes can be chained. The
/// terminal operations ([build_create][Self::build_create] and
/// [build_update][Self::build_update]) also consume the builder; the type
/// system prevents any use after that.
///
/// # Example
/// ```
/// use google_cloud_pubsub_admin::{Topic, TopicMutationBuilder};
/// let request = TopicMutationBuilder::new(&Topic::new("my-project", "my-topic"))
///     .add_label("team", "platform")
///     .add_allowed_persistence_region("us-central1")
///     .build_update();
/// let mask = request.update_mask.expect("mask is always present");
/// assert_eq!(mask.paths, vec!["labels", "message_storage_policy"]);
/// ```
#[derive(Clone, Debug)]
pub struct TopicMutationBuilder {
    topic: model::Topic,
    paths: BTreeSet<&'static str>,
}

impl TopicMutationBuilder {
    /// Creates a builder for the given topic, with no fields changed yet.
    pub fn new(topic: &Topic) -> Self {
        Self {
            topic: model::Topic::new().set_name(topic.fully_qualified_name()),
            paths: BTreeSet::new(),
        }
    }

    /// Adds a label to the topic. The last value set for a given key wins.
    pub fn add_label<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.topic.labels.insert(key.into(), value.into());
        self.paths.insert("labels");
        self
    }

    /// Removes all labels from the topic.
    pub fn clear_labels(mut self) -> Self {
        self.topic.labels.clear();
        self.paths.insert("labels");
        self
    }

    /// Adds a region to the topic's message storage policy.
    ///
    /// Regions are kept in the order they were added, including duplicates.
    /// The value is not validated; the service rejects unknown region ids.
    pub fn add_allowed_persistence_region<T: Into<String>>(mut self, region: T) -> Self {
        self.storage_policy_mut()
            .allowed_persistence_regions
            .push(region.into());
        self.paths.insert("message_storage_policy");
        self
    }

    /// Removes all regions from the topic's message storage policy.
    pub fn clear_allowed_persistence_regions(mut self) -> Self {
        self.storage_policy_mut().allowed_persistence_regions.clear();
        self.paths.insert("message_storage_policy");
        self
    }

    /// Sets the Cloud KMS key used to protect access to messages published
    /// on this topic.
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.topic.kms_key_name = v.into();
        self.paths.insert("kms_key_name");
        self
    }

    /// Produces the full resource for a `CreateTopic` request.
    ///
    /// The result reflects every change made through the builder; which
    /// fields were touched is irrelevant for topic creation.
    pub fn build_create(self) -> model::Topic {
        self.topic
    }

    /// Produces an `UpdateTopic` request.
    ///
    /// The update mask contains each changed field exactly once, in
    /// lexicographic order.
    pub fn build_update(self) -> model::UpdateTopicRequest {
        let paths = self.paths.into_iter().map(str::to_string).collect::<Vec<_>>();
        model::UpdateTopicRequest::new()
            .set_topic(self.topic)
            .set_update_mask(wkt::FieldMask::default().set_paths(paths))
    }

    fn storage_policy_mut(&mut self) -> &mut model::MessageStoragePolicy {
        self.topic
            .message_storage_policy
            .get_or_insert_with(model::MessageStoragePolicy::new)
    }
}
