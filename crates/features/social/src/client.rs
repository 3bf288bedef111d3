use crate::links::links;
use dioxus::prelude::*;

/// Footer list of social links.
///
/// `class` styles the surrounding list, `color` fills the glyphs.
#[component]
pub fn Socials(
    #[props(into, default)] class: String,
    #[props(into, default = "currentColor".to_owned())] color: String,
) -> Element {
    rsx! {
        ul { class: "{class}",
            for link in links() {
                li { key: "{link.platform}", class: "hover:scale-110 duration-300",
                    a { href: link.href, aria_label: link.aria_label,
                        svg {
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "{color}",
                            "data-icon": link.icon,
                            path { d: link.platform.icon_path() }
                        }
                    }
                }
            }
        }
    }
}
