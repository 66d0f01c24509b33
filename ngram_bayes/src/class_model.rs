use hashbrown::HashMap;

/// Statistics of training documents of a class.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    pub(crate) n_documents: usize,
    // Contains duplicates. The length is the number of n-gram occurrences.
    pub(crate) words: Vec<String>,
    pub(crate) word_freq: HashMap<String, usize>,
}

impl ClassModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_word(&mut self, ngram: String) {
        *self.word_freq.entry_ref(ngram.as_str()).or_insert(0) += 1;
        self.words.push(ngram);
    }

    /// Gets the number of training documents of this class.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Gets every n-gram observed in this class in training order, including duplicates.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Gets the number of occurrences of an n-gram in this class.
    pub fn frequency(&self, ngram: &str) -> usize {
        self.word_freq.get(ngram).copied().unwrap_or(0)
    }

    /// Gets the number of distinct n-grams observed in this class.
    pub fn n_distinct_words(&self) -> usize {
        self.word_freq.len()
    }
}
