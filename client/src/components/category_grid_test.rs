use super::*;

#[test]
fn weaves_row_centres_last_pair() {
    let classes = column_classes(11);
    assert_eq!(classes.len(), 11);
    assert!(classes[..9].iter().all(|c| *c == "col-md-4"));
    assert_eq!(classes[9], "col-md-offset-2 col-md-4");
    assert_eq!(classes[10], "col-md-4");
}

#[test]
fn single_video_is_centred() {
    assert_eq!(column_classes(1), vec!["col-md-offset-4 col-md-4"]);
}

#[test]
fn empty_category_has_no_cells() {
    assert!(column_classes(0).is_empty());
}

#[test]
fn classes_follow_core_placements() {
    for count in 0..8 {
        let expected: Vec<&str> = site::grid::placements(count)
            .iter()
            .map(|tag| tag.css_class())
            .collect();
        assert_eq!(column_classes(count), expected, "count {count}");
    }
}
