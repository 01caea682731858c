use std::path::PathBuf;

use proptest::prelude::*;

use watchpipe::watch::{Ignorer, UserIgnorer};

proptest! {
    #[test]
    fn descendants_of_an_ignored_dir_are_always_ignored(
        segments in prop::collection::vec("[a-z0-9]{1,8}", 1..5)
    ) {
        let ignorer = UserIgnorer::new(&["/srv/ignored".to_string()]).unwrap();
        let mut path = PathBuf::from("/srv/ignored");
        for segment in &segments {
            path.push(segment);
        }
        prop_assert!(ignorer.is_ignored(&path));
    }

    #[test]
    fn name_extensions_of_an_ignored_dir_are_not_ignored(
        suffix in "[a-z0-9]{1,8}"
    ) {
        let ignorer = UserIgnorer::new(&["/srv/ignored".to_string()]).unwrap();
        let sibling = PathBuf::from(format!("/srv/ignored{suffix}"));
        prop_assert!(!ignorer.is_ignored(&sibling));
        prop_assert!(!ignorer.is_ignored(&sibling.join("child.txt")));
    }
}
