/// Terms that mark a customer message as outside the assistant's remit.
///
/// Matching is by substring, so a term embedded in a longer legitimate
/// word is also rejected. Accepted tradeoff for a short fixed list.
const DENYLIST: [&str; 5] = ["hack", "crack", "virus", "malware", "exploit"];

/// Check whether a customer message is acceptable for the assistant.
///
/// Case-insensitive substring scan against the fixed denylist. Pure
/// function; returns `false` when any denylisted term occurs.
pub fn is_query_allowed(message: &str) -> bool {
    let lowered = message.to_lowercase();
    !DENYLIST.iter().any(|term| lowered.contains(term))
}
