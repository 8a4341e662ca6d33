//! Shared test utilities: small content builders and substring counting.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = minimal_content();
//! let html = crate::page::render(&content).unwrap();
//! assert_eq!(count(&html, r#"class="skill-card"#), 1);
//! ```

use crate::content::{About, PageMeta, Profile, Project, SiteContent, SkillGroup, SocialLink, TimelineEntry};

// =========================================================================
// Builders
// =========================================================================

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn skill(title: &str, progress: u32, tags: &[&str]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        progress,
        tags: strings(tags),
    }
}

/// A project with a `#` demo and source link.
pub fn project(title: &str, tags: &[&str]) -> Project {
    Project {
        thumb: "Thumb".to_string(),
        thumb_image: None,
        title: title.to_string(),
        description: "A project.".to_string(),
        tags: strings(tags),
        demo: Some("#".to_string()),
        code: "#".to_string(),
    }
}

pub fn entry(heading: &str, meta: &str, text: &str) -> TimelineEntry {
    TimelineEntry {
        heading: heading.to_string(),
        meta: meta.to_string(),
        text: text.to_string(),
    }
}

/// One of everything: skill "Tools" (80%, tag "Git"), project "Demo"
/// (tag "X"), one timeline entry and one GitHub link.
pub fn minimal_content() -> SiteContent {
    SiteContent {
        meta: PageMeta::default(),
        profile: Profile {
            name: "Ada".to_string(),
            title_kicker: "Engineer".to_string(),
            hero_phrases: strings(&["I build things."]),
            subtitle: "Builder of things.".to_string(),
            email: "ada@example.com".to_string(),
            location: "Remote".to_string(),
            socials: vec![SocialLink::new("GitHub", "https://github.com/ada")],
        },
        about: About {
            summary: "About Ada".to_string(),
            body: "Hello.".to_string(),
        },
        skills: vec![skill("Tools", 80, &["Git"])],
        projects: vec![project("Demo", &["X"])],
        timeline: vec![entry("Engineer — Acme", "2024 · Remote", "Built things.")],
    }
}

// =========================================================================
// Assertions
// =========================================================================

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
