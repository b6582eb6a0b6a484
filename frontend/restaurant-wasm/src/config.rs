use crate::hourmin::HourMin;

/// Earliest and latest bookable time of day, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub opening: HourMin,
    pub closing: HourMin,
}

impl OpeningHours {
    pub fn contains(&self, time: HourMin) -> bool {
        time >= self.opening && time <= self.closing
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opening: HourMin::from_minutes(7 * 60),
            closing: HourMin::from_minutes(21 * 60),
        }
    }
}

/// Element ids and selectors of the booking form.
#[derive(Debug, Clone)]
pub struct FormIds {
    pub modal: String,
    pub trigger: String,
    pub close_selector: String,
    pub form: String,
    pub name: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl Default for FormIds {
    fn default() -> Self {
        Self {
            modal: "bookingModal".to_string(),
            trigger: "bookTableBtn".to_string(),
            close_selector: ".close".to_string(),
            form: "bookingForm".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            date: "date".to_string(),
            time: "time".to_string(),
            message: "message".to_string(),
        }
    }
}

/// Everything the controller needs to know about the page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub form: FormIds,
    pub anchor_selector: String,
    pub section_selector: String,
    pub nav_link_selector: String,
    pub navbar_selector: String,
    pub active_class: String,
    /// Sections become active this many pixels before their top edge.
    pub nav_highlight_offset: f64,
    /// Scroll offset after which the navbar turns translucent.
    pub navbar_threshold: f64,
    pub navbar_solid: String,
    pub navbar_translucent: String,
    pub hours: OpeningHours,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form: FormIds::default(),
            anchor_selector: r##"a[href^="#"]"##.to_string(),
            section_selector: "section".to_string(),
            nav_link_selector: ".nav-links a".to_string(),
            navbar_selector: ".navbar".to_string(),
            active_class: "active".to_string(),
            nav_highlight_offset: 200.0,
            navbar_threshold: 100.0,
            navbar_solid: "var(--dark-brown)".to_string(),
            navbar_translucent: "rgba(62, 39, 35, 0.95)".to_string(),
            hours: OpeningHours::default(),
        }
    }
}
