//! # Folio
//!
//! A single-page portfolio generator. One TOML file describes a developer's
//! profile, skills, projects and work history; `folio` turns it into one
//! self-contained `index.html` with the stylesheet and script inlined.
//!
//! # Pipeline
//!
//! ```text
//! content.toml ──load──> SiteContent ──render──> String ──write──> index.html
//!   (optional)        (stock defaults +       (fragments +      (temp file +
//!                      user overlay)           template fill)    atomic rename)
//! ```
//!
//! Everything between loading and writing is pure: the same content always
//! renders to the same bytes, and nothing touches the filesystem until the
//! whole page exists in memory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The content model: profile, skills, projects, timeline, page metadata, stock defaults |
//! | [`config`] | `content.toml` loading, merging over stock defaults, validation, documented stock file |
//! | [`template`] | `{{ name }}` placeholder parsing and single-pass, fail-fast filling |
//! | [`render`] | Maud fragments for each entity (skill cards, project cards, timeline, socials, About) |
//! | [`page`] | Page composition: fragments + scalars + embedded assets → full document |
//! | [`generate`] | Render and atomically replace the output file |
//! | [`output`] | CLI output formatting: build summary and content inventory |
//!
//! # Design Decisions
//!
//! ## Everything Escaped
//!
//! Every value from the content file is HTML-escaped before it reaches the
//! page. Fragments are built with Maud, which escapes all interpolation;
//! scalar fields go through the same escaper. The About body is Markdown, but
//! raw HTML inside it is rendered as text. Hero phrases end up inside a
//! `<script>` block and are serialized as a JSON array with `<`, `>` and `&`
//! written as unicode escapes.
//!
//! Escaping keeps values from changing the markup; it does not make a URL
//! harmless. Every link and image target, from the content fields or the
//! About Markdown, passes through [`render::safe_url`], which replaces
//! `javascript:`, `vbscript:` and `data:` targets with `#`.
//!
//! ## Fixed Template, Loud Failures
//!
//! The page skeleton lives in `static/index.html` and is compiled into the
//! binary. Filling it is all-or-nothing: a placeholder without a value is an
//! error, never a literal `{{ email }}` on the published page. Substituted
//! values are not rescanned, so braces in the inlined CSS and JS are inert.
//!
//! ## Sparse Content Files
//!
//! The stock content is a complete, renderable portfolio. A `content.toml`
//! only states what differs: tables merge key by key, lists replace the stock
//! list wholesale. Unknown keys are rejected so typos surface immediately.
//! Run `folio gen-content` for a fully commented starting point.

pub mod config;
pub mod content;
pub mod generate;
pub mod output;
pub mod page;
pub mod render;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
