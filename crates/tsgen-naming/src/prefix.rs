//! Longest-common-prefix computation over a set of strings.

/// Identifies the longest prefix common to all inputs and returns it.
///
/// Seeds the candidate with the shortest input (the common prefix can never
/// be longer), then shrinks it from the end until every input starts with it.
/// The shrink steps over whole chars, so the returned slice is always cut at
/// a char boundary.
///
/// `inputs` must be non-empty; the scan is meaningless over zero strings.
pub(crate) fn longest_common_prefix<'a>(inputs: &[&'a str]) -> &'a str {
    debug_assert!(!inputs.is_empty(), "common prefix of zero strings");

    let mut prefix = inputs
        .iter()
        .copied()
        .min_by_key(|s| s.len())
        .unwrap_or_default();

    for input in inputs {
        while !input.starts_with(prefix) {
            let mut end = prefix.len() - 1;
            while !prefix.is_char_boundary(end) {
                end -= 1;
            }
            prefix = &prefix[..end];
        }
    }

    prefix
}
