//! The content model: everything that ends up on the page.
//!
//! Content is plain data, constructed once at startup and handed to the
//! renderer by reference. Nothing in [`crate::render`] or [`crate::page`]
//! knows whether a [`SiteContent`] came from the built-in stock portfolio
//! or from a `content.toml` loaded by [`crate::config`].
//!
//! ## Ordering
//!
//! Every list (hero phrases, social links, skills, tags, projects, timeline)
//! is in presentation order. Renderers preserve it verbatim.
//!
//! ## Validation
//!
//! The model itself performs none: a [`SkillGroup`] with `progress = 150`
//! built in code renders as `data-progress="150"`. Range checks happen when
//! content is loaded from a file, see [`SiteContent::validate`].

use serde::{Deserialize, Serialize};

/// All content for one generated page.
///
/// `SiteContent::default()` is the stock sample portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteContent {
    /// Document-level settings (language, initial theme, meta description).
    pub meta: PageMeta,
    /// Who the page is about.
    pub profile: Profile,
    /// The About section.
    pub about: About,
    /// Skill cards, in display order.
    pub skills: Vec<SkillGroup>,
    /// Project cards, in display order.
    pub projects: Vec<Project>,
    /// Experience and education entries, most recent first by convention.
    pub timeline: Vec<TimelineEntry>,
}

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageMeta {
    /// Value of `<html lang>`.
    pub lang: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// Initial `data-theme`, either `"dark"` or `"light"`. Visitors can still
    /// toggle it at runtime.
    pub theme: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            description: "Portfolio of a full‑stack developer specializing in Python, Django, \
                          JavaScript, and Node.js."
                .to_string(),
            theme: "dark".to_string(),
        }
    }
}

/// A labelled outbound link shown in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    /// Short tagline above the hero heading, also used in `<title>`.
    pub title_kicker: String,
    /// Phrases cycled by the typing animation in the hero. May be empty.
    pub hero_phrases: Vec<String>,
    pub subtitle: String,
    pub email: String,
    /// Free-form location line in the contact section.
    pub location: String,
    pub socials: Vec<SocialLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            title_kicker: "Full‑Stack Developer".to_string(),
            hero_phrases: strings(&[
                "I design UX/UI.",
                "I architect APIs.",
                "I ship reliable software.",
            ]),
            subtitle: "I build fast, accessible web apps with Python/Django and JavaScript/Node.js. \
                       I love crafting delightful experiences with thoughtful UI and high‑quality code."
                .to_string(),
            email: "john.doe@example.com".to_string(),
            location: "Anywhere, Remote‑friendly".to_string(),
            socials: vec![
                SocialLink::new("GitHub", "https://github.com/"),
                SocialLink::new("LinkedIn", "https://linkedin.com/"),
                SocialLink::new("Resume", "#"),
            ],
        }
    }
}

/// The About section: a one-line summary and a Markdown body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct About {
    /// Subtitle line under the section heading.
    pub summary: String,
    /// Markdown. Raw HTML in the source is shown as text, not interpreted.
    pub body: String,
}

impl Default for About {
    fn default() -> Self {
        Self {
            summary: "4th‑year CS student specializing in full‑stack development".to_string(),
            body: "I'm passionate about building products end‑to‑end — from designing intuitive \
                   interfaces to deploying scalable backends. My toolkit includes Python, Django, \
                   JavaScript, and Node.js, with a strong focus on performance, accessibility, \
                   and clean code.\n\n\
                   Beyond code, I enjoy mentoring peers, contributing to open‑source, and \
                   designing experiences that feel effortless. I'm currently seeking internship \
                   and freelance opportunities.\n"
                .to_string(),
        }
    }
}

/// A skill card: title, proficiency bar and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub title: String,
    /// Percentage the bar fills to once scrolled into view (0-100).
    pub progress: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Label shown in the thumbnail area; alt text when `thumb_image` is set.
    pub thumb: String,
    /// Optional thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_image: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Live demo URL. Projects without one only get the source link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    /// Source code URL.
    pub code: String,
}

/// One entry on the experience/education timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub heading: String,
    /// Date and place line, e.g. `"Summer 2024 · Remote"`.
    pub meta: String,
    pub text: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            meta: PageMeta::default(),
            profile: Profile::default(),
            about: About::default(),
            skills: stock_skills(),
            projects: stock_projects(),
            timeline: stock_timeline(),
        }
    }
}

fn stock_skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            title: "Front‑end".to_string(),
            progress: 90,
            tags: strings(&["HTML5", "CSS3", "JavaScript (ES6+)", "Responsive UI"]),
        },
        SkillGroup {
            title: "Back‑end".to_string(),
            progress: 85,
            tags: strings(&["Python", "Django", "Node.js", "REST APIs"]),
        },
        SkillGroup {
            title: "Tools".to_string(),
            progress: 80,
            tags: strings(&["Git", "Docker", "Figma", "CI/CD"]),
        },
    ]
}

fn stock_projects() -> Vec<Project> {
    vec![
        Project {
            thumb: "Analytics Dashboard".to_string(),
            thumb_image: None,
            title: "InsightBoard".to_string(),
            description: "A real‑time analytics dashboard with interactive charts and role‑based access."
                .to_string(),
            tags: strings(&["Django", "PostgreSQL", "Charts"]),
            demo: Some("#".to_string()),
            code: "#".to_string(),
        },
        Project {
            thumb: "E‑commerce API".to_string(),
            thumb_image: None,
            title: "ShopServe".to_string(),
            description: "Scalable e‑commerce backend with payments, caching, and webhooks."
                .to_string(),
            tags: strings(&["Node.js", "Express", "Stripe"]),
            demo: Some("#".to_string()),
            code: "#".to_string(),
        },
        Project {
            thumb: "Portfolio Generator".to_string(),
            thumb_image: None,
            title: "PortaGen".to_string(),
            description: "CLI tool that scaffolds beautiful portfolio sites from templates."
                .to_string(),
            tags: strings(&["Python", "Typer", "Jinja"]),
            demo: Some("#".to_string()),
            code: "#".to_string(),
        },
    ]
}

fn stock_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            heading: "Software Engineering Intern — Acme Tech".to_string(),
            meta: "Summer 2024 · Remote".to_string(),
            text: "Built features for an internal dashboard using Django and React; reduced API \
                   latency by 32% through query optimization and caching."
                .to_string(),
        },
        TimelineEntry {
            heading: "Teaching Assistant — Data Structures".to_string(),
            meta: "2023‑2024 · University".to_string(),
            text: "Led weekly labs and mentored 60+ students; authored clear visualizations and \
                   tests to reinforce concepts."
                .to_string(),
        },
        TimelineEntry {
            heading: "B.Sc. Computer Science — University".to_string(),
            meta: "Expected 2026".to_string(),
            text: "Specialization in full‑stack web development, with electives in distributed \
                   systems and HCI."
                .to_string(),
        },
    ]
}
