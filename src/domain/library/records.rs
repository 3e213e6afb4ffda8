//! Read-only reference records loaded from the record store.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// A string-keyed mapping that keeps the source document's key order.
///
/// Bias bars and radar categories are drawn in the order the data file
/// lists them, which `HashMap`/`BTreeMap` lose. The domain stays independent
/// of the file format, so this is not a `serde_yaml::Mapping`. A repeated
/// key keeps its first position and its last value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let capacity = access.size_hint().unwrap_or(0);
                let mut entries: Vec<(String, V)> = Vec::with_capacity(capacity);
                let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    match positions.get(&key) {
                        Some(&index) => entries[index].1 = value,
                        None => {
                            positions.insert(key.clone(), entries.len());
                            entries.push((key, value));
                        }
                    }
                }
                Ok(OrderedMap(entries))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(OrderedMap::default())
            }
        }

        deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
    }
}

/// An evaluation prompt in the question library.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Question {
    pub id: String,
    pub question_text: String,
    pub category: String,
    pub subcategory: String,
}

/// A synthetic user profile used as a mental model.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub title: String,
    pub gender: String,
    pub origin: String,
    pub experience: String,
    pub education: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub questions_associated: Vec<String>,
    #[serde(default)]
    pub bias_metrics: OrderedMap<f64>,
    #[serde(default)]
    pub control_comparison: String,
}

/// A model output for one question.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct LlmResponse {
    pub question_id: String,
    pub response_text: String,
    #[serde(default)]
    pub risk_flags: Vec<String>,
    /// In [0, 1].
    pub risk_score: f64,
    #[serde(default)]
    pub suggested_fix: Option<String>,
}

/// Scores for one question: category -> subcategory -> score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Evaluation {
    pub question_id: String,
    pub scores: OrderedMap<OrderedMap<f64>>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// A reviewer's comment on a question.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Insight {
    pub question_id: String,
    pub reviewer: String,
    pub comment_text: String,
}

/// Text of the question with `id`, if it exists.
pub fn question_text<'a>(questions: &'a [Question], id: &str) -> Option<&'a str> {
    questions
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.question_text.as_str())
}
