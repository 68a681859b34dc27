//! Splitting input text into words.

/// Strips line breaks and splits on spaces.
///
/// Line breaks are removed rather than replaced, so `"foo\nbar"` is the
/// single word `"foobar"`. Empty words from repeated spaces are dropped.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Removes `\n` and `\r` from `text`.
pub fn strip_newlines(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Owned words of `text` after newline stripping.
pub fn tokenize(text: &str) -> Vec<String> {
    let joined = strip_newlines(text);
    split_words(&joined).into_iter().map(str::to_owned).collect()
}
