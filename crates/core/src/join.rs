//! Readable list joining.

/// Joins a sequence of phrases into one readable clause.
///
/// Blank and whitespace-only entries are dropped first. The remaining items
/// are joined conjunctively: nothing for zero items, the item itself for
/// one, `"A and B"` for two, and `"A, B, and C"` (serial comma before the
/// final item) for three or more.
///
/// Total over any input; never fails.
pub fn readable_join<S: AsRef<str>>(items: &[S]) -> String {
    let kept: Vec<&str> = items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !item.trim().is_empty())
        .collect();

    match kept.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
