//! Bijective mapping between crop labels and dense class indices.
//!
//! Indices follow insertion order (first appearance in the training set), so
//! a model trained on the bundled profiles numbers classes in knowledge-base
//! table order. That order is also the tie-break order for equal
//! probabilities.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Build an encoder over the distinct labels, in first-seen order.
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut encoder = Self::default();
        for label in labels {
            if !encoder.index.contains_key(label) {
                encoder.index.insert(label.to_string(), encoder.classes.len());
                encoder.classes.push(label.to_string());
            }
        }
        encoder
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn decode(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let enc = LabelEncoder::fit(["rice", "maize", "rice", "wheat", "maize"]);
        assert_eq!(enc.classes(), &["rice", "maize", "wheat"]);
        assert_eq!(enc.encode("maize"), Some(1));
    }

    #[test]
    fn test_bijective_round_trip() {
        let enc = LabelEncoder::fit(["apple", "banana", "coffee"]);
        for (i, label) in enc.classes().iter().enumerate() {
            assert_eq!(enc.encode(label), Some(i));
            assert_eq!(enc.decode(i), Some(label.as_str()));
        }
    }

    #[test]
    fn test_unknown_label_and_index() {
        let enc = LabelEncoder::fit(["rice"]);
        assert_eq!(enc.encode("jute"), None);
        assert_eq!(enc.decode(5), None);
    }
}
