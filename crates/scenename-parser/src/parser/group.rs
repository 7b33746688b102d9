//! Release group extraction.

use std::collections::VecDeque;

/// Split a trailing `-Group` signature off the last token.
///
/// Only a last token with exactly one hyphen carries a group. The part
/// before the hyphen stays in the list for the feature stages.
pub(crate) fn extract(tokens: &mut VecDeque<String>) -> Option<String> {
    let last = tokens.back_mut()?;

    let mut parts = last.split('-');
    let (Some(head), Some(group), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    let (head, group) = (head.to_owned(), group.to_owned());

    *last = head;
    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> VecDeque<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_group() {
        let mut list = tokens(&["BluRay", "x265-ReleaseGroup"]);
        assert_eq!(extract(&mut list), Some("ReleaseGroup".to_string()));
        assert_eq!(list, tokens(&["BluRay", "x265"]));
    }

    #[test]
    fn test_no_hyphen() {
        let mut list = tokens(&["BluRay", "x265"]);
        assert_eq!(extract(&mut list), None);
        assert_eq!(list, tokens(&["BluRay", "x265"]));
    }

    #[test]
    fn test_two_hyphens_is_not_a_group() {
        let mut list = tokens(&["WEB-DL-x264-GRP"]);
        assert_eq!(extract(&mut list), None);
        assert_eq!(list, tokens(&["WEB-DL-x264-GRP"]));
    }

    #[test]
    fn test_empty_parts() {
        let mut list = tokens(&["x264-"]);
        assert_eq!(extract(&mut list), Some(String::new()));
        assert_eq!(list, tokens(&["x264"]));
    }

    #[test]
    fn test_empty_list() {
        let mut list = VecDeque::new();
        assert_eq!(extract(&mut list), None);
    }
}
