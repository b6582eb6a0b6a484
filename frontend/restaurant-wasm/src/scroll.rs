use crate::config::SiteConfig;

/// Vertical position of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarBackground {
    Solid,
    Translucent,
}

impl NavbarBackground {
    pub fn css<'a>(&self, config: &'a SiteConfig) -> &'a str {
        match self {
            NavbarBackground::Solid => &config.navbar_solid,
            NavbarBackground::Translucent => &config.navbar_translucent,
        }
    }
}

/// What the page should look like at a given scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub active_section: Option<String>,
    pub navbar: NavbarBackground,
}

impl ScrollFrame {
    pub fn is_active_link(&self, href: &str) -> bool {
        is_active_link(href, self.active_section.as_deref())
    }
}

/// Last section, in document order, whose top is at most `offset` pixels below `scroll_y`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<String> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .and_then(|section| section.id.clone())
}

/// Nav links point at `#<id>`; everything after the first character is compared.
/// With no active section nothing matches, not even a bare `#` link.
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    let mut chars = href.chars();
    chars.next();
    active.is_some_and(|id| chars.as_str() == id)
}

pub fn navbar_background(scroll_y: f64, threshold: f64) -> NavbarBackground {
    if scroll_y > threshold {
        NavbarBackground::Translucent
    } else {
        NavbarBackground::Solid
    }
}

/// Id referenced by an in-page anchor, `None` for anything that is not `#<id>`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn observe(sections: &[SectionBounds], scroll_y: f64, config: &SiteConfig) -> ScrollFrame {
    ScrollFrame {
        active_section: active_section(sections, scroll_y, config.nav_highlight_offset),
        navbar: navbar_background(scroll_y, config.navbar_threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0), ("menu", 800.0), ("about", 1600.0), ("contact", 2400.0)]
            .into_iter()
            .map(|(id, top)| SectionBounds {
                id: Some(id.to_string()),
                top,
            })
            .collect()
    }

    #[test]
    fn highlights_section_two_hundred_pixels_early() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 200.0).as_deref(), Some("home"));
        assert_eq!(active_section(&sections, 599.0, 200.0).as_deref(), Some("home"));
        assert_eq!(active_section(&sections, 600.0, 200.0).as_deref(), Some("menu"));
        assert_eq!(active_section(&sections, 5000.0, 200.0).as_deref(), Some("contact"));
    }

    #[test]
    fn no_section_before_first_threshold() {
        let sections = vec![SectionBounds {
            id: Some("hero".to_string()),
            top: 500.0,
        }];
        assert_eq!(active_section(&sections, 100.0, 200.0), None);
        assert_eq!(active_section(&[], 100.0, 200.0), None);
    }

    #[test]
    fn section_without_id_clears_highlight() {
        let mut sections = sections();
        sections.push(SectionBounds { id: None, top: 3000.0 });
        assert_eq!(active_section(&sections, 3000.0, 200.0), None);
    }

    #[test]
    fn link_matching() {
        assert!(is_active_link("#menu", Some("menu")));
        assert!(!is_active_link("#menu", Some("about")));
        assert!(!is_active_link("#menu", None));
        assert!(!is_active_link("/menu", Some("about")));
    }

    #[test]
    fn bare_hash_link_stays_inactive_above_first_section() {
        let sections = vec![SectionBounds {
            id: Some("hero".to_string()),
            top: 500.0,
        }];
        let frame = observe(&sections, 0.0, &SiteConfig::default());
        assert_eq!(frame.active_section, None);
        assert!(!frame.is_active_link("#"));
        assert!(!frame.is_active_link("#hero"));
    }

    #[test]
    fn navbar_turns_translucent_after_threshold() {
        let config = SiteConfig::default();
        assert_eq!(navbar_background(100.0, 100.0), NavbarBackground::Solid);
        assert_eq!(navbar_background(100.5, 100.0), NavbarBackground::Translucent);
        assert_eq!(NavbarBackground::Solid.css(&config), "var(--dark-brown)");
        assert_eq!(
            NavbarBackground::Translucent.css(&config),
            "rgba(62, 39, 35, 0.95)"
        );
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#menu"), Some("menu"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("menu.html"), None);
    }

    #[test]
    fn observe_combines_both_updates() {
        let frame = observe(&sections(), 900.0, &SiteConfig::default());
        assert_eq!(
            frame,
            ScrollFrame {
                active_section: Some("menu".to_string()),
                navbar: NavbarBackground::Translucent,
            }
        );
        assert!(frame.is_active_link("#menu"));
        assert!(!frame.is_active_link("#home"));
    }
}
