use super::*;

fn preference() -> ThemePreference<MemoryStore> {
    ThemePreference::new(MemoryStore::default())
}

#[test]
fn current_theme_defaults_to_solarizedlight() {
    assert_eq!(preference().current_theme(), "solarizedlight");
}

#[test]
fn select_then_current_returns_selection() {
    let mut pref = preference();
    pref.select_theme("monokai");
    assert_eq!(pref.current_theme(), "monokai");
}

#[test]
fn select_returns_stylesheet_path() {
    let mut pref = preference();
    assert_eq!(pref.select_theme("github"), "/css/github.css");
}

#[test]
fn select_persists_under_codestyle_key() {
    let mut pref = preference();
    pref.select_theme("tomorrow");
    assert_eq!(pref.store().get("codestyle").as_deref(), Some("tomorrow"));
}

#[test]
fn unknown_names_are_accepted() {
    let mut pref = preference();
    assert_eq!(pref.select_theme("no-such-theme"), "/css/no-such-theme.css");
    assert_eq!(pref.current_theme(), "no-such-theme");
}

#[test]
fn empty_stored_value_falls_back_to_default() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "");
    assert_eq!(ThemePreference::new(store).current_theme(), DEFAULT_THEME);
}

#[test]
fn restore_persists_default_when_unset() {
    let mut pref = preference();
    assert_eq!(pref.restore(), "/css/solarizedlight.css");
    assert_eq!(pref.store().get(THEME_KEY).as_deref(), Some("solarizedlight"));
}

#[test]
fn restore_reapplies_previous_choice() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "solarizeddark");
    let mut pref = ThemePreference::new(store);
    assert_eq!(pref.restore(), "/css/solarizeddark.css");
}

#[test]
fn known_themes_include_default() {
    assert!(KNOWN_THEMES.contains(&DEFAULT_THEME));
}
