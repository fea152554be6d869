//! Property tests for remote URL normalization.

use proptest::prelude::*;

use appvault::remote::{provider_name, repo_name, to_canonical_https_url};

fn host_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,9}(\\.[a-z]{2,6}){1,2}").unwrap()
}

fn owner_path_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
        1..4,
    )
    .prop_map(|segments| segments.join("/"))
}

proptest! {
    #[test]
    fn test_canonicalization_idempotent(host in host_strategy(), owner in owner_path_strategy()) {
        let ssh = format!("git@{host}:{owner}.git");
        let once = to_canonical_https_url(&ssh).unwrap();
        let twice = to_canonical_https_url(&once).unwrap();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn test_ssh_scheme_prefix_is_equivalent(host in host_strategy(), owner in owner_path_strategy()) {
        let plain = to_canonical_https_url(&format!("git@{host}:{owner}.git")).unwrap();
        let schemed = to_canonical_https_url(&format!("ssh://git@{host}:{owner}.git")).unwrap();
        prop_assert_eq!(plain, schemed);
    }

    #[test]
    fn test_triple_survives_both_forms(host in host_strategy(), owner in owner_path_strategy()) {
        let ssh = format!("git@{host}:{owner}.git");
        let https = to_canonical_https_url(&ssh).unwrap();

        prop_assert_eq!(repo_name(&ssh).unwrap(), repo_name(&https).unwrap());
        prop_assert_eq!(provider_name(&ssh).unwrap(), provider_name(&https).unwrap());
        prop_assert_eq!(https, format!("https://{host}/{owner}"));
    }

    #[test]
    fn test_canonical_has_no_git_suffix_or_trailing_slash(
        host in host_strategy(),
        owner in owner_path_strategy(),
    ) {
        let canonical = to_canonical_https_url(&format!("git@{host}:{owner}.git")).unwrap();
        prop_assert!(!canonical.ends_with(".git"));
        prop_assert!(!canonical.ends_with('/'));
    }
}
