use super::*;

const WINDOWS_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Safari/605.1.15";
const LINUX_FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

// =============================================================
// is_mobile
// =============================================================

#[test]
fn desktop_agents_are_not_mobile() {
    assert!(!is_mobile(WINDOWS_DESKTOP));
    assert!(!is_mobile(MAC_SAFARI));
    assert!(!is_mobile(LINUX_FIREFOX));
}

#[test]
fn empty_agent_is_not_mobile() {
    assert!(!is_mobile(""));
}

#[test]
fn android_is_mobile_without_mobile_token() {
    assert!(is_mobile("Mozilla/5.0 (Linux; Android 10)"));
}

#[test]
fn android_with_mobile_token_is_mobile() {
    assert!(is_mobile(
        "Mozilla/5.0 (Linux; Android 10) AppleWebKit/537.36 Mobile Safari/537.36"
    ));
    assert!(is_mobile("Mozilla/5.0 (Android 10; Mobile; rv:68.0) Gecko/68.0 Firefox/68.0"));
}

#[test]
fn iphone_is_mobile() {
    assert!(is_mobile("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0)"));
}

#[test]
fn primary_tokens_match_anywhere() {
    assert!(is_mobile("BlackBerry9700/5.0.0.351"));
    assert!(is_mobile("Mozilla/5.0 (Windows Phone 10.0)"));
    assert!(is_mobile("Mozilla/5.0 (Kindle Fire)"));
    assert!(is_mobile(
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; U; en) Presto/2.5.25"
    ));
}

#[test]
fn matching_ignores_case() {
    assert!(is_mobile("MOZILLA/5.0 (IPHONE)"));
    assert!(is_mobile("PALM"));
    assert!(is_mobile("nokia"));
}

#[test]
fn vendor_prefix_matches_first_four_characters() {
    assert!(is_mobile("SAMSUNG-SGH-E250/1.0"));
    assert!(is_mobile("MOT-V3/0E.40.3CR"));
    assert!(is_mobile("Nokia6300/2.0 (05.00)"));
}

#[test]
fn vendor_prefix_is_not_searched_past_the_prefix() {
    assert!(!is_mobile("xx nokia"));
    assert!(!is_mobile("Mozilla/5.0 (SAMSUNG desktop)"));
}

#[test]
fn short_agents_never_match_vendor_prefix() {
    assert!(!is_mobile("LG"));
    assert!(!is_mobile("mot"));
}

#[test]
fn tablets_without_listed_tokens_stay_desktop() {
    assert!(!is_mobile("Mozilla/5.0 (iPad; CPU OS 14_0 like Mac OS X)"));
}

#[test]
fn classification_is_deterministic() {
    let agent = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0)";
    assert_eq!(is_mobile(agent), is_mobile(agent));
}

// =============================================================
// Pattern tables
// =============================================================

#[test]
fn primary_pattern_compiles() {
    assert!(PRIMARY.is_match("iphone"));
}

#[test]
fn primary_pattern_is_lowercase() {
    assert_eq!(PRIMARY_PATTERN, PRIMARY_PATTERN.to_ascii_lowercase());
}

#[test]
fn case_folding_is_ascii_only() {
    assert!(is_mobile("Mozilla/5.0 (KINDLE Fire)"));
    assert!(is_mobile("SymbianOS/9.2"));
    assert!(!is_mobile("Mozilla/5.0 (\u{212A}indle Fire)"));
    assert!(!is_mobile("Mozilla/5.0 (\u{17F}ymbianOS)"));
}

#[test]
fn vendor_prefixes_are_sorted_lowercase_and_four_chars() {
    assert!(VENDOR_PREFIXES.windows(2).all(|pair| pair[0] < pair[1]));
    for code in VENDOR_PREFIXES {
        assert_eq!(code.len(), PREFIX_LEN, "{code}");
        assert_eq!(*code, code.to_ascii_lowercase(), "{code}");
    }
}

#[test]
fn vendor_prefix_table_keeps_every_code() {
    assert_eq!(VENDOR_PREFIXES.len(), 389);
    for code in ["1207", "501i", "506i", "a wa", "lg-w", "n100", "pg-c", "qc-7", "vk53", "zte-"] {
        assert!(VENDOR_PREFIXES.contains(&code), "{code}");
    }
}

// =============================================================
// user_agent_source
// =============================================================

#[test]
fn source_prefers_user_agent() {
    assert_eq!(user_agent_source(Some("ua"), Some("vendor"), Some("opera")), "ua");
}

#[test]
fn source_falls_back_to_vendor_then_opera() {
    assert_eq!(user_agent_source(None, Some("vendor"), Some("opera")), "vendor");
    assert_eq!(user_agent_source(Some(""), None, Some("opera")), "opera");
}

#[test]
fn source_is_empty_when_all_absent() {
    assert_eq!(user_agent_source(None, None, None), "");
    assert!(!is_mobile(user_agent_source(None, None, None)));
}
