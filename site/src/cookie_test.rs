use super::*;

#[test]
fn lookup_finds_value_among_pairs() {
    let cookies = "session=abc; codestyle=monokai; other=1";
    assert_eq!(lookup(cookies, "codestyle"), Some("monokai"));
    assert_eq!(lookup(cookies, "session"), Some("abc"));
}

#[test]
fn lookup_missing_key_is_none() {
    assert_eq!(lookup("a=1; b=2", "codestyle"), None);
    assert_eq!(lookup("", "codestyle"), None);
}

#[test]
fn lookup_first_match_wins() {
    assert_eq!(lookup("codestyle=github; codestyle=monokai", "codestyle"), Some("github"));
}

#[test]
fn lookup_does_not_match_name_prefixes() {
    assert_eq!(lookup("codestyle_old=github", "codestyle"), None);
}

#[test]
fn lookup_skips_malformed_pairs() {
    assert_eq!(lookup("garbage; codestyle=tomorrow", "codestyle"), Some("tomorrow"));
}

#[test]
fn lookup_keeps_empty_values() {
    assert_eq!(lookup("codestyle=", "codestyle"), Some(""));
}

#[test]
fn assignment_is_root_scoped() {
    assert_eq!(assignment("codestyle", "monokai"), "codestyle=monokai; path=/");
}
