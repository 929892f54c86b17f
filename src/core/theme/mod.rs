//! Thematic classification of vocabulary sets.
//!
//! A record's vocabulary words are compared against a curated topic
//! map; the first topic (in map order) sharing a keyword wins. Map
//! order is therefore part of the contract: the same words always
//! produce the same label.

mod classifier;
mod topics;

pub use classifier::ThemeClassifier;
pub use topics::TOPIC_MAP;
