/// Collapse every whitespace run (spaces, tabs, newlines) to a single space
/// and trim both ends. All other characters pass through untouched.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
