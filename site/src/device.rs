//! Mobile device detection from a browser user-agent string.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery decides per click whether to play a video inline or hand the
//! visitor off to the video host. That decision hinges on this classifier,
//! which is a static blocklist: no learning, no lookups, no errors.
//!
//! TRADE-OFFS
//! ==========
//! Both token lists are kept exactly as they were hand-maintained, stale
//! feature-phone codes included. Every alternative of the vendor-prefix
//! pattern is four characters long, so it is stored expanded as a sorted
//! literal table and matched against the lower-cased four-character prefix.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

/// Whole-string pattern for mobile OS and browser tokens.
pub const PRIMARY_PATTERN: &str = r"(android|bb[0-9]+|meego).+mobile|avantgo|bada/|blackberry|blazer|compal|elaine|fennec|hiptop|iemobile|ip(hone|od)|iris|kindle|lge |maemo|midp|mmp|mobile.+firefox|netfront|opera m(ob|in)i|palm( os)?|phone|p(ixi|re)/|plucker|pocket|psp|series(4|6)0|symbian|treo|up\.(browser|link)|vodafone|wap|windows ce|xda|xiino";

/// Plain substrings that also count as a primary match.
///
/// `android` alone marks a device as mobile even when the agent does not
/// carry a trailing `mobile` token.
const PRIMARY_TOKENS: &[&str] = &["android"];

/// Number of leading characters checked against [`VENDOR_PREFIXES`].
pub const PREFIX_LEN: usize = 4;

/// Feature-phone and vendor codes matched against the agent prefix. Sorted.
pub const VENDOR_PREFIXES: &[&str] = &[
    "1207", "3gso", "4thp", "501i", "502i", "503i", "504i", "505i", "506i", "6310",
    "6590", "770s", "802s", "a wa", "abac", "acer", "acoo", "acs-", "aiko", "airn",
    "alav", "alca", "alco", "amoi", "anex", "anny", "anyw", "aptu", "arch", "argo",
    "aste", "asus", "attw", "au-m", "audi", "aur ", "aus ", "avan", "beck", "bell",
    "benq", "bilb", "bird", "blac", "blaz", "brew", "brvw", "bumb", "bw-n", "bw-u",
    "c55/", "capi", "ccwa", "cdm-", "cell", "chtm", "cldc", "cmd-", "comp", "cond",
    "craw", "dait", "dall", "dang", "dbte", "dc-s", "devi", "dica", "dmob", "doco",
    "dopo", "ds-d", "ds12", "el49", "elai", "eml2", "emul", "eric", "erk0", "esl8",
    "ez40", "ez50", "ez60", "ez70", "ezos", "ezwa", "ezze", "fetc", "fly-", "fly_",
    "g-mo", "g1 u", "g560", "gene", "gf-5", "go.w", "good", "grad", "grun", "haie",
    "hcit", "hd-m", "hd-p", "hd-t", "hei-", "hipt", "hita", "hp i", "hpip", "hs-c",
    "htc ", "htc-", "htc_", "htca", "htcg", "htcp", "htcs", "htct", "http", "huaw",
    "hutc", "i-20", "i-go", "i-ma", "i230", "iac ", "iac-", "iac/", "ibro", "idea",
    "ig01", "ikom", "im1k", "inno", "ipaq", "iris", "jata", "java", "jbro", "jemu",
    "jigs", "kddi", "keji", "kgt ", "kgt/", "klon", "kpt ", "kwc-", "kyoc", "kyok",
    "leno", "lexi", "lg g", "lg-a", "lg-b", "lg-c", "lg-d", "lg-e", "lg-f", "lg-g",
    "lg-h", "lg-i", "lg-j", "lg-k", "lg-l", "lg-m", "lg-n", "lg-o", "lg-p", "lg-q",
    "lg-r", "lg-s", "lg-t", "lg-u", "lg-v", "lg-w", "lg/k", "lg/l", "lg/u", "lg50",
    "lg54", "libw", "lynx", "m-cr", "m1-w", "m3ga", "m50/", "mate", "maui", "maxo",
    "mc01", "mc21", "mcca", "merc", "meri", "mio8", "mioa", "mits", "mmef", "mo01",
    "mo02", "mobi", "mode", "modo", "mot ", "mot-", "moto", "motv", "mozz", "mt50",
    "mtp1", "mtv ", "mwbp", "mywa", "n100", "n101", "n102", "n202", "n203", "n300",
    "n302", "n500", "n502", "n505", "n700", "n701", "n710", "nec-", "nem-", "neon",
    "netf", "newf", "newg", "newt", "nok6", "noki", "nzph", "o2im", "opti", "opwv",
    "oran", "owg1", "p800", "pana", "pand", "pant", "pdxg", "pg-1", "pg-2", "pg-3",
    "pg-4", "pg-5", "pg-6", "pg-7", "pg-8", "pg-c", "pg13", "phil", "pire", "play",
    "pluc", "pn-2", "pock", "port", "pose", "prox", "psio", "pt-g", "qa-a", "qc-2",
    "qc-3", "qc-4", "qc-5", "qc-6", "qc-7", "qc07", "qc12", "qc21", "qc32", "qc60",
    "qci-", "qtek", "r380", "r600", "raks", "rim9", "rove", "rozo", "s55/", "sage",
    "sama", "samm", "sams", "sany", "sava", "sc01", "sch-", "scoo", "scp-", "sdk/",
    "se47", "sec-", "sec0", "sec1", "semc", "send", "seri", "sgh-", "shar", "sie-",
    "siem", "sk-0", "sl45", "slid", "smal", "smar", "smb3", "smit", "smt5", "soft",
    "sony", "sp01", "sph-", "spv ", "spv-", "sy01", "symb", "t-mo", "t218", "t250",
    "t600", "t610", "t618", "tagt", "talk", "tcl-", "tdg-", "teli", "telm", "tim-",
    "topl", "tosh", "ts70", "tsm-", "tsm3", "tsm5", "tx-9", "up.b", "upg1", "upsi",
    "utst", "v400", "v750", "veri", "virg", "vite", "vk-v", "vk40", "vk50", "vk51",
    "vk52", "vk53", "vm40", "voda", "vulc", "vx52", "vx53", "vx60", "vx61", "vx70",
    "vx80", "vx81", "vx83", "vx85", "vx98", "w3c ", "w3c-", "webc", "whit", "wig ",
    "winc", "winw", "wmlb", "wonu", "x700", "yas-", "your", "zeto", "zte-",
];

/// Compiled [`PRIMARY_PATTERN`]. Matched against ASCII-lowercased input so
/// only ASCII letters fold; `\u{212A}` (Kelvin sign) is not a `k`.
static PRIMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRIMARY_PATTERN).expect("primary mobile pattern is valid"));

/// Pick the string to classify from the navigator fields.
///
/// Tries the user agent, then the vendor, then the legacy `window.opera`
/// value; the first non-empty one wins. Returns `""` when all are absent.
pub fn user_agent_source<'a>(
    user_agent: Option<&'a str>,
    vendor: Option<&'a str>,
    opera: Option<&'a str>,
) -> &'a str {
    [user_agent, vendor, opera]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Return `true` when `user_agent` looks like a mobile device.
///
/// Matching is ASCII case-insensitive. Empty input is never mobile.
pub fn is_mobile(user_agent: &str) -> bool {
    if user_agent.is_empty() {
        return false;
    }
    matches_primary(user_agent) || matches_vendor_prefix(user_agent)
}

fn matches_primary(user_agent: &str) -> bool {
    let lowered = user_agent.to_ascii_lowercase();
    PRIMARY.is_match(&lowered) || PRIMARY_TOKENS.iter().any(|token| lowered.contains(token))
}

fn matches_vendor_prefix(user_agent: &str) -> bool {
    let prefix: String = user_agent
        .chars()
        .take(PREFIX_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if prefix.chars().count() < PREFIX_LEN {
        return false;
    }
    VENDOR_PREFIXES.binary_search(&prefix.as_str()).is_ok()
}
