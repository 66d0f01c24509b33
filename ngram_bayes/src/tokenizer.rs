/// Splits a sentence into word n-grams.
///
/// Words are separated by a single space. Consecutive spaces are not
/// collapsed, so they produce empty words.
///
/// # Arguments
///
/// * `size` - The n-gram length. `0` is treated as `1`.
/// * `sentence` - An input sentence.
///
/// # Returns
///
/// The n-grams from left to right, each joined by a single space. If the
/// sentence has no more than `size` words, the whole sentence is returned as
/// the only n-gram.
///
/// # Examples
///
/// ```
/// use ngram_bayes::split_words;
///
/// assert_eq!(vec!["this", "outputs", "words"], split_words(1, "this outputs words"));
/// assert_eq!(vec!["this outputs", "outputs words"], split_words(2, "this outputs words"));
/// ```
pub fn split_words(size: usize, sentence: &str) -> Vec<String> {
    let size = size.max(1);
    let words: Vec<&str> = sentence.split(' ').collect();
    if words.len() <= size {
        return vec![words.join(" ")];
    }
    words.windows(size).map(|window| window.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unigram() {
        assert_eq!(
            vec!["this", "outputs", "words"],
            split_words(1, "this outputs words")
        );
    }

    #[test]
    fn test_split_bigram() {
        assert_eq!(
            vec!["this outputs", "outputs words"],
            split_words(2, "this outputs words")
        );
    }

    #[test]
    fn test_split_trigram_window_count() {
        let grams = split_words(3, "a b c d e");
        assert_eq!(vec!["a b c", "b c d", "c d e"], grams);
    }

    #[test]
    fn test_split_short_sentence() {
        assert_eq!(vec!["eu te amo"], split_words(3, "eu te amo"));
        assert_eq!(vec!["eu te amo"], split_words(5, "eu te amo"));
        assert_eq!(vec!["amo"], split_words(1, "amo"));
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(vec![""], split_words(1, ""));
        assert_eq!(vec![""], split_words(4, ""));
    }

    #[test]
    fn test_split_consecutive_spaces() {
        assert_eq!(vec!["a", "", "b"], split_words(1, "a  b"));
        assert_eq!(vec!["a ", " b"], split_words(2, "a  b"));
        assert_eq!(vec!["", "a", ""], split_words(1, " a "));
    }

    #[test]
    fn test_split_keeps_punctuation_and_case() {
        assert_eq!(vec!["Eu", "amo,", "bolo!"], split_words(1, "Eu amo, bolo!"));
    }

    #[test]
    fn test_split_zero_size() {
        assert_eq!(split_words(1, "x y z"), split_words(0, "x y z"));
    }
}
