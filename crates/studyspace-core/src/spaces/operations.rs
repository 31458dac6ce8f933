use super::types::Space;

/// Drop expired records and put the most recently received first.
///
/// The backend lists spaces oldest first, so the filtered sequence is
/// reversed before it is stored.
pub fn prepare_spaces(fetched: Vec<Space>) -> Vec<Space> {
    let mut spaces: Vec<Space> = fetched.into_iter().filter(|s| !s.is_expired).collect();
    spaces.reverse();
    spaces
}

/// Number of spaces the viewer has already joined.
pub fn joined_count(spaces: &[Space]) -> usize {
    spaces.iter().filter(|s| s.joined).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::types::test_space;

    fn ids(spaces: &[Space]) -> Vec<&str> {
        spaces.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_prepare_spaces_filters_expired_and_reverses() {
        let mut expired_b = test_space("b");
        expired_b.is_expired = true;
        let mut expired_d = test_space("d");
        expired_d.is_expired = true;

        let fetched = vec![
            test_space("a"),
            expired_b,
            test_space("c"),
            expired_d,
            test_space("e"),
        ];

        let prepared = prepare_spaces(fetched);
        assert_eq!(prepared.len(), 3);
        assert!(prepared.iter().all(|s| !s.is_expired));
        assert_eq!(ids(&prepared), vec!["e", "c", "a"]);
    }

    #[test]
    fn test_prepare_spaces_all_expired() {
        let mut only = test_space("a");
        only.is_expired = true;
        assert!(prepare_spaces(vec![only]).is_empty());
    }

    #[test]
    fn test_prepare_spaces_empty() {
        assert!(prepare_spaces(Vec::new()).is_empty());
    }

    #[test]
    fn test_joined_count() {
        let mut joined = test_space("a");
        joined.joined = true;
        let spaces = vec![joined, test_space("b"), test_space("c")];
        assert_eq!(joined_count(&spaces), 1);
        assert_eq!(joined_count(&[]), 0);
    }
}
