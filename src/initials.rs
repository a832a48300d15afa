/// Two-letter badge text for a participant.
///
/// Emails are reduced to their local part, which is split on runs of
/// whitespace, `.`, `_` and `-`. The first character of each of the first two
/// segments is uppercased. When no segment survives the split, the first two
/// characters of the local part are used instead.
pub fn get_initials(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let local = match text.split_once('@') {
        Some((local, _)) => local,
        None => text,
    };

    let initials: String = local
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '_' | '-'))
        .filter(|part| !part.is_empty())
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        local.chars().take(2).flat_map(char::to_uppercase).collect()
    } else {
        initials
    }
}
