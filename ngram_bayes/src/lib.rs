#![cfg_attr(docsrs, feature(doc_cfg))]

//! # ngram_bayes
//!
//! ngram_bayes is a small Naive Bayes text classifier over word n-grams with
//! add-one smoothing.
//!
//! ## Examples
//!
//! ```
//! use ngram_bayes::Classifier;
//!
//! let mut classifier = Classifier::new(1).unwrap();
//! classifier.train_batch("bom", ["eu te amo", "eu amo bolo"]);
//! classifier.train_batch("ruim", ["eu te odeio", "peixe é ruim"]);
//!
//! let scores = classifier.classify("nao achei o filme ruim").unwrap();
//! assert!(scores["ruim"] > scores["bom"]);
//! ```
//!
//! Scores are the class prior multiplied by the smoothed n-gram
//! probabilities. They are not normalized and are only meaningful relative to
//! each other.

mod class_model;
mod classifier;
mod tokenizer;

pub mod errors;

pub use class_model::ClassModel;
pub use classifier::Classifier;
pub use tokenizer::split_words;
