//! "Did you mean" helpers shared by validation rules.
//!
//! Every rule that offers suggestions goes through [`suggestion_list`] for
//! ranking and through [`perhaps_you_meant`] or [`did_you_mean`] for
//! formatting, so truncation and wording stay consistent across rules.

/// The most suggestions any one message will list.
pub const MAX_SUGGESTIONS: usize = 5;

/// Given an invalid `input` and a list of valid `options`, return the
/// options that are "close enough" to `input`, most similar first.
///
/// Options whose edit distance to `input` is within half the length of the
/// longer of the two (but at least 1) are kept. A case-only difference
/// counts as a single edit. Ties keep the order of `options`.
pub fn suggestion_list<'o, S: AsRef<str> + ?Sized + 'o>(
    input: &str,
    options: impl IntoIterator<Item = &'o S>,
) -> Vec<&'o str> {
    let input_lowercase = input.to_lowercase();
    let input_threshold = input.chars().count() / 2;

    let mut scored: Vec<(usize, &'o str)> = options
        .into_iter()
        .map(|option: &'o S| option.as_ref())
        .filter_map(|option| {
            let distance = lexical_distance(input, &input_lowercase, option);
            let threshold = input_threshold
                .max(option.chars().count() / 2)
                .max(1);
            (distance <= threshold).then_some((distance, option))
        })
        .collect();

    scored.sort_by_key(|(distance, _)| *distance);
    scored.into_iter().map(|(_, option)| option).collect()
}

fn lexical_distance(input: &str, input_lowercase: &str, option: &str) -> usize {
    if input == option {
        return 0;
    }

    let option_lowercase = option.to_lowercase();
    if *input_lowercase == option_lowercase {
        return 1;
    }

    strsim::osa_distance(input_lowercase, &option_lowercase)
}

/// `"A"`, `"A", "B"`, ... truncated to [`MAX_SUGGESTIONS`] entries.
pub fn quoted_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"A"`, `"A" or "B"`, `"A", "B", or "C"` ... truncated to
/// [`MAX_SUGGESTIONS`] entries.
pub fn quoted_or_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();

    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// The ` Perhaps you meant one of the following: ...` suffix, or an empty
/// string when there is nothing to suggest.
pub fn perhaps_you_meant<S: AsRef<str>>(suggestions: &[S]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    format!(
        " Perhaps you meant one of the following: {}.",
        quoted_list(suggestions),
    )
}

/// The ` Did you mean "A" or "B"?` suffix (optionally with a phrase such as
/// `to use an inline fragment on` after "mean"), or an empty string when
/// there is nothing to suggest.
pub fn did_you_mean<S: AsRef<str>>(
    sub_message: Option<&str>,
    suggestions: &[S],
) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    match sub_message {
        Some(sub_message) => format!(
            " Did you mean {sub_message} {}?",
            quoted_or_list(suggestions),
        ),
        None => format!(" Did you mean {}?", quoted_or_list(suggestions)),
    }
}
