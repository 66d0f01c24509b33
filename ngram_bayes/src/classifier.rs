use std::collections::BTreeMap;

use hashbrown::{HashMap, HashSet};

use crate::class_model::ClassModel;
use crate::errors::{NgramBayesError, Result};
use crate::tokenizer::split_words;

/// Naive Bayes classifier over word n-grams.
///
/// # Examples
///
/// ```
/// use ngram_bayes::Classifier;
///
/// let mut classifier = Classifier::new(1).unwrap();
/// classifier.train("bom", "eu amo bolo");
/// classifier.train("ruim", "eu odeio peixe");
///
/// let (label, _) = classifier.best_class("amo bolo").unwrap();
/// assert_eq!("bom", label);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    n_split: usize,
    n_documents: usize,
    classes: HashMap<String, ClassModel>,
    vocabulary: HashMap<String, usize>,
}

impl Classifier {
    /// Creates a new classifier.
    ///
    /// # Arguments
    ///
    /// * `n_split` - The n-gram length used for training and classification.
    ///
    /// # Errors
    ///
    /// [`NgramBayesError::InvalidArgument`] will be returned if `n_split` is zero.
    pub fn new(n_split: usize) -> Result<Self> {
        if n_split == 0 {
            return Err(NgramBayesError::invalid_argument(
                "n_split",
                "must be at least 1",
            ));
        }
        Ok(Self {
            n_split,
            n_documents: 0,
            classes: HashMap::new(),
            vocabulary: HashMap::new(),
        })
    }

    /// Adds a sentence to the given class.
    ///
    /// # Arguments
    ///
    /// * `label` - A class label. A new class is created if it is unknown.
    /// * `sentence` - A training sentence.
    pub fn train(&mut self, label: &str, sentence: &str) {
        self.n_documents += 1;
        let class = self
            .classes
            .entry_ref(label)
            .or_insert_with(ClassModel::new);
        class.n_documents += 1;

        let ngrams = split_words(self.n_split, sentence);
        let n_ngrams = ngrams.len();
        for ngram in ngrams {
            *self.vocabulary.entry_ref(ngram.as_str()).or_insert(0) += 1;
            class.push_word(ngram);
        }
        tracing::debug!(label, n_ngrams, "trained document");
    }

    /// Adds sentences to the given class in order.
    pub fn train_batch<I, S>(&mut self, label: &str, sentences: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sentence in sentences {
            self.train(label, sentence.as_ref());
        }
    }

    /// Gets the prior probability of a class.
    ///
    /// # Errors
    ///
    /// * [`NgramBayesError::EmptyModel`] if nothing has been trained.
    /// * [`NgramBayesError::UnknownClass`] if `label` has never been trained.
    pub fn prior(&self, label: &str) -> Result<f64> {
        if self.n_documents == 0 {
            return Err(NgramBayesError::empty_model());
        }
        let class = self
            .classes
            .get(label)
            .ok_or_else(|| NgramBayesError::unknown_class(label))?;
        Ok(Self::class_prior(class, self.n_documents))
    }

    fn class_prior(class: &ClassModel, n_documents: usize) -> f64 {
        class.n_documents as f64 / n_documents as f64
    }

    /// Scores a sentence against every known class.
    ///
    /// Each score is the class prior multiplied by the add-one smoothed
    /// probability of every distinct n-gram of the sentence. Scores are not
    /// normalized, so they are only comparable with each other.
    ///
    /// # Errors
    ///
    /// [`NgramBayesError::EmptyModel`] will be returned if nothing has been trained.
    pub fn classify(&self, sentence: &str) -> Result<BTreeMap<String, f64>> {
        if self.n_documents == 0 {
            return Err(NgramBayesError::empty_model());
        }
        let vocab_size = self.vocabulary.len() as f64;
        let tokens = split_words(self.n_split, sentence);

        // A repeated n-gram contributes its probability only once.
        let mut seen = HashSet::with_capacity(tokens.len());
        let ngrams: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|ngram| seen.insert(*ngram))
            .collect();

        let mut scores = BTreeMap::new();
        for (label, class) in &self.classes {
            let prior = Self::class_prior(class, self.n_documents);
            let denominator = class.words.len() as f64 + vocab_size;
            let score = ngrams.iter().fold(prior, |score, ngram| {
                score * ((class.frequency(ngram) as f64 + 1.0) / denominator)
            });
            tracing::trace!(label = label.as_str(), prior, score, "scored class");
            scores.insert(label.clone(), score);
        }
        Ok(scores)
    }

    /// Gets the class with the highest score.
    ///
    /// When scores tie, the label that sorts last wins.
    ///
    /// # Errors
    ///
    /// [`NgramBayesError::EmptyModel`] will be returned if nothing has been trained.
    pub fn best_class(&self, sentence: &str) -> Result<(String, f64)> {
        self.classify(sentence)?
            .into_iter()
            .reduce(|best, cur| if best.1 > cur.1 { best } else { cur })
            .ok_or_else(NgramBayesError::empty_model)
    }

    /// Gets the n-gram length.
    pub fn n_split(&self) -> usize {
        self.n_split
    }

    /// Gets the number of trained documents over all classes.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Gets the number of distinct n-grams over all classes.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Gets the number of occurrences of an n-gram over all classes.
    pub fn vocabulary_frequency(&self, ngram: &str) -> usize {
        self.vocabulary.get(ngram).copied().unwrap_or(0)
    }

    /// Gets the statistics of a class.
    pub fn class(&self, label: &str) -> Option<&ClassModel> {
        self.classes.get(label)
    }

    /// Gets the known class labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        let mut labels: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels.into_iter()
    }
}
