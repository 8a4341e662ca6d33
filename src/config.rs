//! Content configuration: loading, merging and validating `content.toml`.
//!
//! The page content is configuration. Stock content (see
//! [`SiteContent::default`]) is the base layer; a `content.toml` overrides any
//! part of it.
//!
//! ## Partial Configuration
//!
//! Files are sparse. Tables merge key by key, so this changes only the name
//! and email and keeps every other stock value:
//!
//! ```toml
//! [profile]
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//! ```
//!
//! Arrays replace wholesale. Declaring one `[[skills]]` entry yields a page
//! with exactly one skill card:
//!
//! ```toml
//! [[skills]]
//! title = "Tools"
//! progress = 80
//! tags = ["Git"]
//! ```
//!
//! Unknown keys are rejected to catch typos early. `folio gen-content` prints
//! a fully commented stock file to start from.

use crate::content::SiteContent;
use log::{debug, info};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Content validation error: {0}")]
    Validation(String),
}

const THEMES: [&str; 2] = ["dark", "light"];

impl SiteContent {
    /// Check values a hand-written file can get wrong.
    ///
    /// Only applied to loaded content. Content built in code is trusted and
    /// rendered as given.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Validation(
                "profile.name must not be empty".into(),
            ));
        }
        if !THEMES.contains(&self.meta.theme.as_str()) {
            return Err(ContentError::Validation(format!(
                "meta.theme must be one of {:?}, got {:?}",
                THEMES, self.meta.theme
            )));
        }
        for skill in &self.skills {
            if skill.progress > 100 {
                return Err(ContentError::Validation(format!(
                    "skills.progress must be 0-100, got {} for {:?}",
                    skill.progress, skill.title
                )));
            }
        }
        Ok(())
    }
}

/// Returns the stock content as a `toml::Value::Table`, the base layer for
/// merging user overrides.
pub fn stock_content_value() -> Result<toml::Value, ContentError> {
    Ok(toml::Value::try_from(SiteContent::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Content file used when none is named on the command line.
pub const DEFAULT_CONTENT_FILE: &str = "content.toml";

/// Read a content file as a raw TOML value. The file must exist.
pub fn read_raw_content(path: &Path) -> Result<toml::Value, ContentError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Read a content file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_content(path: &Path) -> Result<Option<toml::Value>, ContentError> {
    if !path.exists() {
        return Ok(None);
    }
    read_raw_content(path).map(Some)
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_content(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteContent, ContentError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let content: SiteContent = merged.try_into()?;
    content.validate()?;
    Ok(content)
}

/// Load content from `path`, layered over the stock content.
///
/// A missing file is an [`ContentError::Io`] error.
pub fn load_content(path: &Path) -> Result<SiteContent, ContentError> {
    info!("loading content from {}", path.display());
    finish_loading(Some(read_raw_content(path)?))
}

/// Like [`load_content`], but a missing file means the stock content.
///
/// Used for the implicit [`DEFAULT_CONTENT_FILE`], never for a path the
/// user named.
pub fn load_content_or_stock(path: &Path) -> Result<SiteContent, ContentError> {
    let overlay = load_raw_content(path)?;
    match &overlay {
        Some(_) => info!("loading content from {}", path.display()),
        None => info!("{} not found, using stock content", path.display()),
    }
    finish_loading(overlay)
}

fn finish_loading(overlay: Option<toml::Value>) -> Result<SiteContent, ContentError> {
    let content = resolve_content(stock_content_value()?, overlay)?;
    debug!(
        "content for {:?}: {} skills, {} projects, {} timeline entries, {} socials",
        content.profile.name,
        content.skills.len(),
        content.projects.len(),
        content.timeline.len(),
        content.profile.socials.len()
    );
    Ok(content)
}

/// Returns a fully-commented stock `content.toml`.
///
/// Used by the `gen-content` CLI command. Parses to [`SiteContent::default`].
pub fn stock_content_toml() -> &'static str {
    r##"# folio content
# =============
# Everything on the generated page comes from this file. All settings are
# optional: remove any you don't need and the stock value shown here is used.
#
# Tables ([profile], [about], [meta]) merge key by key with the stock values.
# Lists ([[skills]], [[projects]], [[timeline]], socials, tags) replace the
# stock list entirely.
# Unknown keys will cause an error.
#
# All text is HTML-escaped on output, so "<", "&" and quotes are safe.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[meta]
# <html lang="...">
lang = "en"
# <meta name="description">
description = "Portfolio of a full‑stack developer specializing in Python, Django, JavaScript, and Node.js."
# Initial color theme: "dark" or "light". Visitors can toggle it.
theme = "dark"

# ---------------------------------------------------------------------------
# Profile
# ---------------------------------------------------------------------------
[profile]
name = "John Doe"
# Shown above the hero heading and in the page <title>.
title_kicker = "Full‑Stack Developer"
# Cycled by the typing animation under the hero heading. May be empty.
hero_phrases = ["I design UX/UI.", "I architect APIs.", "I ship reliable software."]
subtitle = "I build fast, accessible web apps with Python/Django and JavaScript/Node.js. I love crafting delightful experiences with thoughtful UI and high‑quality code."
email = "john.doe@example.com"
location = "Anywhere, Remote‑friendly"
# Footer links, in display order.
socials = [
    { label = "GitHub", href = "https://github.com/" },
    { label = "LinkedIn", href = "https://linkedin.com/" },
    { label = "Resume", href = "#" },
]

# ---------------------------------------------------------------------------
# About
# ---------------------------------------------------------------------------
[about]
# One line under the section heading.
summary = "4th‑year CS student specializing in full‑stack development"
# Markdown. Inline HTML is displayed as text.
body = """
I'm passionate about building products end‑to‑end — from designing intuitive interfaces to deploying scalable backends. My toolkit includes Python, Django, JavaScript, and Node.js, with a strong focus on performance, accessibility, and clean code.

Beyond code, I enjoy mentoring peers, contributing to open‑source, and designing experiences that feel effortless. I'm currently seeking internship and freelance opportunities.
"""

# ---------------------------------------------------------------------------
# Skills: progress is a percentage (0-100)
# ---------------------------------------------------------------------------
[[skills]]
title = "Front‑end"
progress = 90
tags = ["HTML5", "CSS3", "JavaScript (ES6+)", "Responsive UI"]

[[skills]]
title = "Back‑end"
progress = 85
tags = ["Python", "Django", "Node.js", "REST APIs"]

[[skills]]
title = "Tools"
progress = 80
tags = ["Git", "Docker", "Figma", "CI/CD"]

# ---------------------------------------------------------------------------
# Projects
# ---------------------------------------------------------------------------
# thumb        label in the thumbnail area (alt text if thumb_image is set)
# thumb_image  optional image URL
# demo         optional live demo URL; omit to show only the source link
# code         source code URL
[[projects]]
thumb = "Analytics Dashboard"
title = "InsightBoard"
description = "A real‑time analytics dashboard with interactive charts and role‑based access."
tags = ["Django", "PostgreSQL", "Charts"]
demo = "#"
code = "#"

[[projects]]
thumb = "E‑commerce API"
title = "ShopServe"
description = "Scalable e‑commerce backend with payments, caching, and webhooks."
tags = ["Node.js", "Express", "Stripe"]
demo = "#"
code = "#"

[[projects]]
thumb = "Portfolio Generator"
title = "PortaGen"
description = "CLI tool that scaffolds beautiful portfolio sites from templates."
tags = ["Python", "Typer", "Jinja"]
demo = "#"
code = "#"

# ---------------------------------------------------------------------------
# Experience & education
# ---------------------------------------------------------------------------
[[timeline]]
heading = "Software Engineering Intern — Acme Tech"
meta = "Summer 2024 · Remote"
text = "Built features for an internal dashboard using Django and React; reduced API latency by 32% through query optimization and caching."

[[timeline]]
heading = "Teaching Assistant — Data Structures"
meta = "2023‑2024 · University"
text = "Led weekly labs and mentored 60+ students; authored clear visualizations and tests to reinforce concepts."

[[timeline]]
heading = "B.Sc. Computer Science — University"
meta = "Expected 2026"
text = "Specialization in full‑stack web development, with electives in distributed systems and HCI."
"##
}
