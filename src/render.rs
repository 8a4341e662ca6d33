//! HTML fragments, one renderer per content entity.
//!
//! Every function here is pure: same input, same markup. Lists render in
//! input order and are concatenated with no separator, so the page template
//! controls all spacing.
//!
//! Fragments are built with [maud](https://maud.lambda.xyz/), which escapes
//! every interpolated value. Content containing `<`, `&` or quotes shows up
//! as text instead of corrupting the surrounding markup.

use crate::content::{About, Project, SkillGroup, SocialLink, TimelineEntry};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, Tag, html as md_html};

/// URL schemes that run code when followed. Links using them are replaced
/// with `#`.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Inline tag pills, one `<span class="tag">` per tag.
pub fn render_tag_list(tags: &[String]) -> Markup {
    html! {
        @for tag in tags {
            span.tag { (tag) }
        }
    }
}

/// A skill card. The bar's inner span starts at zero width; the page script
/// grows it to `data-progress` percent when the card scrolls into view.
pub fn render_skill_card(skill: &SkillGroup) -> Markup {
    html! {
        div.skill-card.reveal {
            div.skill-title { (skill.title) }
            div.bar data-progress=(skill.progress) { span {} }
            div.tags { (render_tag_list(&skill.tags)) }
        }
    }
}

/// A project card with a hover/focus overlay holding the demo and source links.
pub fn render_project_card(project: &Project) -> Markup {
    html! {
        article.project-card.reveal tabindex="0" {
            div.project-thumb {
                @if let Some(src) = &project.thumb_image {
                    img src=(safe_url(src)) alt=(project.thumb) loading="lazy";
                } @else {
                    (project.thumb)
                }
            }
            div.project-body {
                h3.project-title { (project.title) }
                p.project-desc { (project.description) }
                div.project-tags { (render_tag_list(&project.tags)) }
            }
            div.project-overlay aria-hidden="true" {
                @if let Some(demo) = &project.demo {
                    a.link-pill href=(safe_url(demo)) target="_blank" rel="noopener" { "Live Demo" }
                }
                a.link-pill href=(safe_url(&project.code)) target="_blank" rel="noopener" { "GitHub" }
            }
        }
    }
}

pub fn render_timeline_entry(entry: &TimelineEntry) -> Markup {
    html! {
        div.entry.reveal {
            h4 { (entry.heading) }
            div.meta { (entry.meta) }
            p { (entry.text) }
        }
    }
}

/// Footer links, one anchor per entry.
pub fn render_social_links(links: &[SocialLink]) -> Markup {
    html! {
        @for link in links {
            a href=(safe_url(&link.href)) target="_blank" rel="noopener" aria-label=(link.label) {
                (link.label)
            }
        }
    }
}

pub fn render_skills(skills: &[SkillGroup]) -> Markup {
    html! {
        @for skill in skills {
            (render_skill_card(skill))
        }
    }
}

pub fn render_projects(projects: &[Project]) -> Markup {
    html! {
        @for project in projects {
            (render_project_card(project))
        }
    }
}

pub fn render_timeline(entries: &[TimelineEntry]) -> Markup {
    html! {
        @for entry in entries {
            (render_timeline_entry(entry))
        }
    }
}

/// The About body, converted from Markdown.
///
/// Raw HTML blocks and inline HTML in the source are demoted to text so they
/// get escaped like everything else. Link and image targets go through
/// [`safe_url`].
pub fn render_about(about: &About) -> Markup {
    let parser = Parser::new(&about.body).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_blocked_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: "#".into(),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if is_blocked_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: "#".into(),
            title,
            id,
        }),
        other => other,
    });
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

/// Join skill titles for the Skills section subtitle:
/// `["A"]` → `A`, `["A", "B"]` → `A and B`, `["A", "B", "C"]` → `A, B, and C`.
pub fn skills_summary(skills: &[SkillGroup]) -> String {
    let titles: Vec<&str> = skills.iter().map(|s| s.title.as_str()).collect();
    match titles.as_slice() {
        [] => String::new(),
        [one] => one.to_string(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// `url`, or `#` if it uses a blocked scheme such as `javascript:`.
///
/// Browsers ignore ASCII whitespace and control characters inside a scheme
/// and compare it case-insensitively, so the check does too.
pub fn safe_url(url: &str) -> &str {
    if is_blocked_url(url) { "#" } else { url }
}

fn is_blocked_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// HTML-escape a scalar value for direct insertion into the page template.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn tag_list_one_span_per_tag_in_order() {
        let html = render_tag_list(&strings(&["Rust", "Go", "Zig"])).into_string();
        assert_eq!(
            html,
            r#"<span class="tag">Rust</span><span class="tag">Go</span><span class="tag">Zig</span>"#
        );
    }

    #[test]
    fn tag_list_empty() {
        assert_eq!(render_tag_list(&[]).into_string(), "");
    }

    #[test]
    fn skill_card_structure() {
        let html = render_skill_card(&skill("Tools", 80, &["Git"])).into_string();
        assert!(html.contains(r#"<div class="skill-title">Tools</div>"#));
        assert!(html.contains(r#"<div class="bar" data-progress="80"><span></span></div>"#));
        assert!(html.contains(r#"<span class="tag">Git</span>"#));
        assert!(html.starts_with(r#"<div class="skill-card reveal">"#));
    }

    #[test]
    fn skill_card_out_of_range_progress_passes_through() {
        let html = render_skill_card(&skill("Overconfident", 150, &[])).into_string();
        assert!(html.contains(r#"data-progress="150""#));
    }

    #[test]
    fn project_card_tag_count_matches() {
        let p = project("Demo", &["A", "B", "C", "D"]);
        let html = render_project_card(&p).into_string();
        assert_eq!(count(&html, r#"class="tag""#), 4);
    }

    #[test]
    fn project_card_links() {
        let mut p = project("Demo", &["X"]);
        p.demo = Some("https://demo.example.com".to_string());
        p.code = "https://git.example.com/demo".to_string();
        let html = render_project_card(&p).into_string();
        assert!(html.contains(r#"href="https://demo.example.com""#));
        assert!(html.contains(r#"href="https://git.example.com/demo""#));
        assert!(html.contains("Live Demo"));
        assert_eq!(count(&html, r#"class="link-pill""#), 2);
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn project_card_without_demo_has_only_source_link() {
        let mut p = project("Demo", &[]);
        p.demo = None;
        let html = render_project_card(&p).into_string();
        assert!(!html.contains("Live Demo"));
        assert_eq!(count(&html, r#"class="link-pill""#), 1);
    }

    #[test]
    fn project_card_thumb_label_or_image() {
        let mut p = project("Demo", &[]);
        p.thumb = "Dashboard".to_string();
        let html = render_project_card(&p).into_string();
        assert!(html.contains(r#"<div class="project-thumb">Dashboard</div>"#));

        p.thumb_image = Some("/media/dash.jpg".to_string());
        let html = render_project_card(&p).into_string();
        assert!(html.contains(r#"src="/media/dash.jpg""#));
        assert!(html.contains(r#"alt="Dashboard""#));
    }

    #[test]
    fn timeline_entry_structure() {
        let html = render_timeline_entry(&entry("Intern — Acme", "2024 · Remote", "Built things."))
            .into_string();
        assert_eq!(
            html,
            r#"<div class="entry reveal"><h4>Intern — Acme</h4><div class="meta">2024 · Remote</div><p>Built things.</p></div>"#
        );
    }

    #[test]
    fn social_links_one_anchor_each_no_separator() {
        let links = vec![
            SocialLink::new("GitHub", "https://github.com/ada"),
            SocialLink::new("Resume", "/cv.pdf"),
        ];
        let html = render_social_links(&links).into_string();
        assert_eq!(count(&html, "<a "), 2);
        assert!(html.contains("</a><a "));
        assert!(html.find("GitHub").unwrap() < html.find("Resume").unwrap());
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn skills_preserve_order() {
        let skills = vec![
            skill("Alpha", 10, &[]),
            skill("Bravo", 20, &[]),
            skill("Charlie", 30, &[]),
        ];
        let html = render_skills(&skills).into_string();
        let a = html.find("Alpha").unwrap();
        let b = html.find("Bravo").unwrap();
        let c = html.find("Charlie").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn collections_concatenate_without_separator() {
        let entries = vec![entry("One", "m", "t"), entry("Two", "m", "t")];
        let html = render_timeline(&entries).into_string();
        assert!(html.contains("</div><div class=\"entry reveal\">"));

        let projects = vec![project("P1", &[]), project("P2", &[])];
        let html = render_projects(&projects).into_string();
        assert!(html.contains("</article><article "));
    }

    #[test]
    fn renderers_are_deterministic() {
        let p = project("Demo", &["X", "Y"]);
        assert_eq!(
            render_project_card(&p).into_string(),
            render_project_card(&p).into_string()
        );
    }

    #[test]
    fn content_is_escaped() {
        let s = skill("<script>alert('x')</script>", 50, &["a&b", "\"quoted\""]);
        let html = render_skill_card(&s).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let links = vec![SocialLink::new("x", "\" onclick=\"evil()")];
        let html = render_social_links(&links).into_string();
        assert!(!html.contains("\" onclick=\""));
        assert!(html.contains("&quot; onclick=&quot;evil()"));
    }

    #[test]
    fn about_markdown_is_converted() {
        let about = About {
            summary: String::new(),
            body: "First **bold** paragraph.\n\nSecond *one*.".to_string(),
        };
        let html = render_about(&about).into_string();
        assert!(html.contains("<p>First <strong>bold</strong> paragraph.</p>"));
        assert!(html.contains("<p>Second <em>one</em>.</p>"));
    }

    #[test]
    fn about_raw_html_is_escaped() {
        let about = About {
            summary: String::new(),
            body: "Hello <img src=x onerror=alert(1)> there".to_string(),
        };
        let html = render_about(&about).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn about_script_links_are_neutralized() {
        let about = About {
            summary: String::new(),
            body: "[cv](javascript:alert(1)) and ![x](JavaScript:alert(2)) and [ok](https://ada.dev)"
                .to_string(),
        };
        let html = render_about(&about).into_string();
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains(r##"<a href="#">cv</a>"##));
        assert!(html.contains(r#"<a href="https://ada.dev">ok</a>"#));
    }

    #[test]
    fn safe_url_blocks_script_schemes() {
        assert_eq!(safe_url("https://github.com/ada"), "https://github.com/ada");
        assert_eq!(safe_url("mailto:ada@example.com"), "mailto:ada@example.com");
        assert_eq!(safe_url("#"), "#");
        assert_eq!(safe_url("/cv.pdf"), "/cv.pdf");
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(" JaVa\tScript:alert(1)"), "#");
        assert_eq!(safe_url("vbscript:msgbox"), "#");
        assert_eq!(safe_url("data:text/html,<b>x</b>"), "#");
        // A relative path that merely starts with the word is fine
        assert_eq!(safe_url("javascript-tips.html"), "javascript-tips.html");
    }

    #[test]
    fn card_and_social_links_use_safe_urls() {
        let mut p = project("Demo", &[]);
        p.code = "javascript:alert(1)".to_string();
        let html = render_project_card(&p).into_string();
        assert!(!html.contains("javascript:"));

        let links = vec![SocialLink::new("x", "javascript:alert(1)")];
        let html = render_social_links(&links).into_string();
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn skills_summary_joins_titles() {
        assert_eq!(skills_summary(&[]), "");
        assert_eq!(skills_summary(&[skill("A", 1, &[])]), "A");
        assert_eq!(
            skills_summary(&[skill("A", 1, &[]), skill("B", 1, &[])]),
            "A and B"
        );
        assert_eq!(
            skills_summary(&[skill("A", 1, &[]), skill("B", 1, &[]), skill("C", 1, &[])]),
            "A, B, and C"
        );
    }

    #[test]
    fn escape_scalar() {
        assert_eq!(escape("Tom & Jerry <3"), "Tom &amp; Jerry &lt;3");
        assert_eq!(escape("plain"), "plain");
    }
}
