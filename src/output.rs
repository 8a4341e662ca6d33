//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no clock.
//!
//! ## Build
//!
//! ```text
//! Wrote index.html at 2026-10-19T14:03:27
//! ```
//!
//! ## Check
//!
//! Content inventory, one header line per entity with indented details:
//!
//! ```text
//! Profile
//!     John Doe (Full‑Stack Developer)
//!     Email: john.doe@example.com
//!     Hero phrases: 3
//!
//! Skills
//! 001 Front‑end (90%)
//!     Tags: HTML5, CSS3, JavaScript (ES6+), Responsive UI
//!
//! Projects
//! 001 InsightBoard (3 tags)
//!     Demo: #
//!     Source: #
//!
//! Experience
//! 001 Software Engineering Intern — Acme Tech
//!     Summer 2024 · Remote
//!
//! Socials
//! 001 GitHub → https://github.com/
//! ```

use crate::content::SiteContent;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Current local time, ISO-8601 with second precision.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn format_build_output(path: &Path, timestamp: &str) -> Vec<String> {
    vec![format!("Wrote {} at {}", path.display(), timestamp)]
}

pub fn print_build_output(path: &Path) {
    for line in format_build_output(path, &timestamp()) {
        println!("{}", line);
    }
}

pub fn format_check_output(content: &SiteContent) -> Vec<String> {
    let mut lines = Vec::new();
    let profile = &content.profile;

    lines.push("Profile".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        profile.name,
        profile.title_kicker
    ));
    lines.push(format!("{}Email: {}", indent(1), profile.email));
    lines.push(format!(
        "{}Hero phrases: {}",
        indent(1),
        profile.hero_phrases.len()
    ));

    lines.push(String::new());
    lines.push("Skills".to_string());
    for (i, skill) in content.skills.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}%)",
            format_index(i + 1),
            skill.title,
            skill.progress
        ));
        if !skill.tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), skill.tags.join(", ")));
        }
    }

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in content.projects.iter().enumerate() {
        let tag_word = if project.tags.len() == 1 { "tag" } else { "tags" };
        lines.push(format!(
            "{} {} ({} {})",
            format_index(i + 1),
            project.title,
            project.tags.len(),
            tag_word
        ));
        if let Some(demo) = &project.demo {
            lines.push(format!("{}Demo: {}", indent(1), demo));
        }
        lines.push(format!("{}Source: {}", indent(1), project.code));
    }

    lines.push(String::new());
    lines.push("Experience".to_string());
    for (i, entry) in content.timeline.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), entry.heading));
        lines.push(format!("{}{}", indent(1), entry.meta));
    }

    lines.push(String::new());
    lines.push("Socials".to_string());
    for (i, link) in profile.socials.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            link.label,
            link.href
        ));
    }

    lines
}

pub fn print_check_output(content: &SiteContent) {
    for line in format_check_output(content) {
        println!("{}", line);
    }
}
