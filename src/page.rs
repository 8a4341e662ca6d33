//! Page composition.
//!
//! Turns a [`SiteContent`] into the final `index.html` text in one pass:
//!
//! ```text
//! content ──> fragments (skills, projects, timeline, socials, about)
//!         ──> escaped scalars (name, tagline, subtitle, email, ...)
//!         ──> script.js template  ← hero phrases as a JS array literal
//!         ──> index.html template ← everything above + style.css
//! ```
//!
//! ## Embedded assets
//!
//! The stylesheet and script are compiled into the binary and inlined into
//! `<style>` and `<script>` blocks. The output is a single self-contained
//! file with no sibling assets to deploy or keep in sync.
//!
//! - `static/index.html`: document skeleton with `{{ name }}` placeholders
//! - `static/style.css`: opaque, inserted as-is
//! - `static/script.js`: page-runtime behaviour; one placeholder, `hero_phrases`
//!
//! The document body never contains a timestamp or anything random, so
//! rendering the same content twice is byte-identical. The footer year is
//! filled in by the script in the visitor's browser.

use crate::content::SiteContent;
use crate::render;
use crate::template::{Fields, Template, TemplateError};
use log::debug;
use thiserror::Error;

const INDEX_TEMPLATE: &str = include_str!("../static/index.html");
const STYLES: &str = include_str!("../static/style.css");
const SCRIPT_TEMPLATE: &str = include_str!("../static/script.js");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize strings as a JavaScript array literal.
///
/// Each element is quoted and escaped individually (JSON string syntax is
/// valid JS). `<`, `>` and `&` are written as `\u003c`, `\u003e` and
/// `\u0026`, so no element can close the surrounding `<script>` element.
///
/// ```
/// let phrases = vec!["I design UX/UI.".to_string(), "Say \"hi\"".to_string()];
/// assert_eq!(
///     folio::page::js_string_array(&phrases).unwrap(),
///     r#"["I design UX/UI.","Say \"hi\""]"#
/// );
/// assert_eq!(folio::page::js_string_array(&[]).unwrap(), "[]");
/// ```
pub fn js_string_array(items: &[String]) -> Result<String, RenderError> {
    let json = serde_json::to_string(items)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Build the complete field set for the document template.
///
/// Scalar values are HTML-escaped here; fragment values come from
/// [`crate::render`] and are already escaped.
pub fn page_fields(content: &SiteContent) -> Result<Fields<'static>, RenderError> {
    let profile = &content.profile;

    let mut script_fields = Fields::new();
    script_fields.set("hero_phrases", js_string_array(&profile.hero_phrases)?);
    let scripts = Template::parse(SCRIPT_TEMPLATE)?.fill(&script_fields)?;

    let mut fields = Fields::new();
    fields
        .set("lang", render::escape(&content.meta.lang))
        .set("theme", render::escape(&content.meta.theme))
        .set("description", render::escape(&content.meta.description))
        .set("name", render::escape(&profile.name))
        .set("title_kicker", render::escape(&profile.title_kicker))
        .set("subtitle", render::escape(&profile.subtitle))
        .set("email", render::escape(&profile.email))
        .set("location", render::escape(&profile.location))
        .set("about_summary", render::escape(&content.about.summary))
        .set("about_html", render::render_about(&content.about).into_string())
        .set(
            "skills_summary",
            render::escape(&render::skills_summary(&content.skills)),
        )
        .set("skills_html", render::render_skills(&content.skills).into_string())
        .set(
            "projects_html",
            render::render_projects(&content.projects).into_string(),
        )
        .set(
            "timeline_html",
            render::render_timeline(&content.timeline).into_string(),
        )
        .set(
            "socials_html",
            render::render_social_links(&profile.socials).into_string(),
        )
        .set("styles", STYLES)
        .set("scripts", scripts);
    Ok(fields)
}

/// Render the whole page.
pub fn render(content: &SiteContent) -> Result<String, RenderError> {
    let fields = page_fields(content)?;
    let html = Template::parse(INDEX_TEMPLATE)?.fill(&fields)?;
    debug!(
        "rendered page: {} skills, {} projects, {} timeline entries, {} bytes",
        content.skills.len(),
        content.projects.len(),
        content.timeline.len(),
        html.len()
    );
    Ok(html)
}

// ============================================================================
// Tests
// ============================================================================
