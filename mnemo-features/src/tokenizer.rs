//! Lowercase alphanumeric tokenizer with stop-word removal and n-grams.

/// Split text into lowercase alphanumeric tokens of at least two characters.
/// Apostrophes and underscores are removed rather than treated as separators.
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '_' && c != '\u{2019}')
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|w| w.chars().count() >= 2)
        .filter(|w| !remove_stop_words || !is_stop_word(w))
        .collect()
}

/// Unigrams followed by every contiguous n-gram up to `ngram_max`, space-joined.
pub fn terms(text: &str, ngram_max: usize, remove_stop_words: bool) -> Vec<String> {
    let tokens = tokenize(text, remove_stop_words);
    let mut out = tokens.clone();
    for n in 2..=ngram_max.max(1) {
        if tokens.len() < n {
            break;
        }
        out.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    out
}

pub fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "about"
            | "above"
            | "after"
            | "again"
            | "against"
            | "all"
            | "also"
            | "am"
            | "an"
            | "and"
            | "any"
            | "are"
            | "as"
            | "at"
            | "be"
            | "because"
            | "been"
            | "before"
            | "being"
            | "below"
            | "between"
            | "both"
            | "but"
            | "by"
            | "can"
            | "could"
            | "did"
            | "do"
            | "does"
            | "doing"
            | "down"
            | "during"
            | "each"
            | "either"
            | "etc"
            | "few"
            | "for"
            | "from"
            | "further"
            | "had"
            | "has"
            | "have"
            | "having"
            | "he"
            | "her"
            | "here"
            | "hers"
            | "him"
            | "his"
            | "how"
            | "however"
            | "if"
            | "in"
            | "into"
            | "is"
            | "it"
            | "its"
            | "itself"
            | "just"
            | "may"
            | "me"
            | "might"
            | "more"
            | "most"
            | "must"
            | "my"
            | "no"
            | "nor"
            | "not"
            | "of"
            | "off"
            | "on"
            | "once"
            | "only"
            | "or"
            | "other"
            | "our"
            | "ours"
            | "out"
            | "over"
            | "own"
            | "same"
            | "she"
            | "should"
            | "so"
            | "some"
            | "such"
            | "than"
            | "that"
            | "the"
            | "their"
            | "theirs"
            | "them"
            | "then"
            | "there"
            | "these"
            | "they"
            | "this"
            | "those"
            | "through"
            | "thus"
            | "to"
            | "too"
            | "under"
            | "until"
            | "up"
            | "upon"
            | "very"
            | "via"
            | "was"
            | "we"
            | "were"
            | "what"
            | "when"
            | "where"
            | "whether"
            | "which"
            | "while"
            | "who"
            | "whom"
            | "why"
            | "will"
            | "with"
            | "within"
            | "without"
            | "would"
            | "yet"
            | "you"
            | "your"
    )
}
