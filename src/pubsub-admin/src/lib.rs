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

//! Google Cloud Client Libraries for Rust - Pub/Sub Admin Helpers
//!
//! This crate contains types to compose topic administration requests for
//! [Pub/Sub].
//!
//! The main entry point is [TopicMutationBuilder]. It accumulates changes to
//! the configuration of a topic and then produces either the full resource
//! needed to create the topic, or an update request with a field mask naming
//! exactly the fields that changed.
//!
//! [pub/sub]: https://cloud.google.com/pubsub

pub mod model;

mod topic;
pub use crate::topic::{InvalidTopicName, Topic};

mod builder;
pub use crate::builder::TopicMutationBuilder;
