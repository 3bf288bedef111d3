use portal_social::{Platform, SocialLink, links};
use serde_json::json;
use std::str::FromStr;

#[test]
fn lists_the_four_networks_pointing_home() {
    let names: Vec<_> = links().iter().map(|link| link.aria_label).collect();
    assert_eq!(names, ["twitter", "instagram", "facebook", "youtube"]);
    assert!(links().iter().all(|link| link.href == "/"));
}

#[test]
fn platforms_parse_from_their_labels() {
    for link in links() {
        assert_eq!(Platform::from_str(link.aria_label), Ok(link.platform));
    }
    assert!(Platform::from_str("myspace").is_err());
}

#[test]
fn links_serialize_for_terminal_output() {
    let youtube: &SocialLink = &links()[3];
    assert_eq!(
        serde_json::to_value(youtube).expect("serializable"),
        json!({ "platform": "youtube", "href": "/", "ariaLabel": "youtube", "icon": "mdi:youtube" })
    );
}
