use super::*;

fn entry() -> VideoEntry {
    VideoEntry {
        id: "xm_sw1KePHg".to_owned(),
        title: "2-beat weave".to_owned(),
        description: String::new(),
        image: "/poi/img/2beat.gif".to_owned(),
    }
}

#[test]
fn mobile_redirects_to_watch_page() {
    assert_eq!(
        Playback::choose(&entry(), true),
        Playback::Redirect("https://www.youtube.com/watch?v=xm_sw1KePHg".to_owned())
    );
}

#[test]
fn desktop_opens_panel_with_entry() {
    assert_eq!(Playback::choose(&entry(), false), Playback::Panel(entry()));
}

#[test]
fn embed_url_is_protocol_relative() {
    assert_eq!(embed_url("abc"), "//www.youtube.com/embed/abc");
}

#[test]
fn watch_url_carries_id_verbatim() {
    assert_eq!(watch_url("r4-8yrkHEbQ"), "https://www.youtube.com/watch?v=r4-8yrkHEbQ");
}
