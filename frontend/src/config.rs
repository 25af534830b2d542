use crate::tracker::Section;

/// Page sections in scroll order. The first entry is active on load.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "services", label: "Services" },
    Section { id: "agents", label: "Agents" },
    Section { id: "about", label: "About" },
    Section { id: "contact", label: "Contact" },
];

/// Fraction of a section that must be visible before it becomes active.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.4;

/// Height of the fixed nav bar; scroll targets land this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;

pub const NAV_SCROLLED_AFTER: f64 = 40.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const NOTIFICATION_MS: u32 = 4_000;

/// Where the contact form posts to. Set `BRIGHTWIRE_CONTACT_ENDPOINT` at build
/// time to enable it; without it submissions are only acknowledged locally.
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("BRIGHTWIRE_CONTACT_ENDPOINT").filter(|url| !url.trim().is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
