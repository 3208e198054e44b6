// File: src/render.rs
// Purpose: Maud projection of an assembled page

use folio_router::{Route, HOME_PATH};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::assemble::{AssembledPage, CaseStudyHeader, Fallback, PageTree};
use crate::config::SiteConfig;
use crate::content::Hero;
use crate::section::{ComposedSection, SectionBody};

const DEFAULT_IMAGE_HINT: &str = "Add a chart, mock, flow, or screenshot";

/// Id of the element the client-side app renders into
pub const APP_ROOT_ID: &str = "app";

/// Id of the contact form the client-side app intercepts
pub const CONTACT_FORM_ID: &str = "contact-form";

/// Wide-screen bar; Resume sits between Projects and Contact
const DESKTOP_LINKS: [(&str, &str); 2] = [("Home", "/home"), ("Projects", "/home#projects")];

/// Collapsible menu for narrow screens
const MENU_LINKS: [(&str, &str); 6] = [
    ("Home", "/home"),
    ("Projects", "/home#projects"),
    ("Project A", "/projects/project-a"),
    ("Project B", "/projects/project-b"),
    ("Project C", "/projects/project-c"),
    ("Contact", "/home#cta"),
];

/// `href` for an in-app route: `/home#cta` → `#/home#cta`
pub fn route_href(route: &str) -> String {
    Route::parse(route).to_fragment()
}

/// CSS classes carrying a section's derived treatment
///
/// ```
/// use folio::{compose, render::section_classes, SectionDefinition};
///
/// let sections = vec![
///     SectionDefinition::new("A", "a", "x"),
///     SectionDefinition::new("B", "b", "x").with_image().full_bleed(),
///     SectionDefinition::new("C", "c", "x").with_image(),
/// ];
/// let composed = compose(&sections);
/// assert_eq!(section_classes(&composed[0]), "section tone-neutral stacked");
/// assert_eq!(section_classes(&composed[1]), "section tone-tint-A stacked divider full-bleed");
/// assert_eq!(section_classes(&composed[2]), "section tone-tint-B split divider");
/// ```
pub fn section_classes(composed: &ComposedSection<'_>) -> String {
    let mut classes = vec![
        "section".to_string(),
        format!("tone-{}", composed.resolved_tone.as_str()),
    ];
    classes.push(if composed.use_split_layout { "split" } else { "stacked" }.to_string());
    if composed.has_top_divider {
        classes.push("divider".to_string());
    }
    if composed.full_bleed() {
        classes.push("full-bleed".to_string());
    }
    classes.join(" ")
}

pub fn page_title(site: &SiteConfig, page: &AssembledPage<'_>) -> String {
    match &page.tree {
        PageTree::Home { .. } => site.name.clone(),
        PageTree::CaseStudy { header, .. } => format!("{} · {}", header.title, site.name),
        PageTree::NotFound(fallback) => format!("{} · {}", fallback.title, site.name),
    }
}

/// Everything inside the app root: navigation, page, footer
pub fn app(site: &SiteConfig, page: &AssembledPage<'_>) -> Markup {
    html! {
        (nav_bar(site, &page.route))
        main data-page=(page.variant.to_string()) {
            (page_tree(site, &page.tree))
        }
        (footer(site))
    }
}

/// Complete HTML document for one route
pub fn document(site: &SiteConfig, page: &AssembledPage<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title(site, page)) }
            }
            body {
                div id=(APP_ROOT_ID) {
                    (app(site, page))
                }
            }
        }
    }
}

/// Empty page that boots the client-side app from the wasm bundle
pub fn shell(site: &SiteConfig, pkg_path: &str) -> Markup {
    let options = serde_json::to_string(&serde_json::json!({ "site": site }))
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");
    let boot = format!(
        "import init, {{ mount }} from '{}/folio_wasm.js';\nawait init();\nmount('{}', {});",
        pkg_path.trim_end_matches('/'),
        APP_ROOT_ID,
        options
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.name) }
            }
            body {
                div id=(APP_ROOT_ID) {
                    noscript { "This site needs JavaScript enabled." }
                }
                script type="module" { (PreEscaped(boot)) }
            }
        }
    }
}

pub fn page_tree(site: &SiteConfig, tree: &PageTree<'_>) -> Markup {
    match tree {
        PageTree::Home { hero, sections } => home(site, hero, sections),
        PageTree::CaseStudy { header, sections } => case_study(site, header, sections),
        PageTree::NotFound(fallback) => not_found(fallback),
    }
}

pub fn render_section(site: &SiteConfig, composed: &ComposedSection<'_>) -> Markup {
    let section = composed.section;
    let hint = section.image_hint.as_deref().unwrap_or(DEFAULT_IMAGE_HINT);

    html! {
        section id=(section.anchor)
            class=(section_classes(composed))
            data-index=(composed.index)
            data-tone=(composed.resolved_tone.as_str()) {
            div.container {
                div.section-content {
                    div.section-text {
                        h2 { (section.title) }
                        (section_body(site, &section.body))
                    }
                    @if section.with_image {
                        div.section-image { (image_placeholder(hint)) }
                    }
                }
            }
        }
    }
}

fn section_body(site: &SiteConfig, body: &SectionBody) -> Markup {
    match body {
        SectionBody::Text(text) => html! { p.body { (text) } },
        SectionBody::Projects(cards) => html! {
            div.projects {
                @for card in cards {
                    article.card.project-card.accent-alt[card.accent] {
                        header {
                            h3 { (card.title) }
                            span.pill { "Case" }
                        }
                        p { (card.blurb) }
                        ul.tags {
                            @for tag in &card.tags {
                                li { (tag) }
                            }
                        }
                        a.button.primary href=(route_href(&card.route)) { "View" }
                    }
                }
            }
        },
        SectionBody::Contact => contact_form(site),
    }
}

fn contact_form(site: &SiteConfig) -> Markup {
    html! {
        form.card.contact-form id=(CONTACT_FORM_ID) data-mailto=(site.email) {
            label {
                "Your name"
                input type="text" name="name" placeholder="Name" required;
            }
            label {
                "Your message"
                textarea name="message" rows="5" placeholder="Write your message…" required {}
            }
            button.button.primary type="submit" { "Send message" }
            p.note { "This opens your email client with the message pre-filled." }
        }
    }
}

fn image_placeholder(hint: &str) -> Markup {
    html! {
        div.image-placeholder {
            strong { "Image placeholder" }
            small { (hint) }
        }
    }
}

fn home(site: &SiteConfig, hero: &Hero, sections: &[ComposedSection<'_>]) -> Markup {
    html! {
        div.hero {
            div.container {
                h1 {
                    (hero.headline)
                    br;
                    span.tagline { (hero.tagline) }
                }
                p.summary { (hero.summary) }
                div.actions {
                    button.button.primary type="button" data-scroll-to=(hero.primary_action_anchor) {
                        "View Projects"
                    }
                    a.button.secondary href=(site.resume_url) target="_blank" rel="noreferrer" {
                        "Resume (PDF)"
                    }
                }
            }
        }
        @for composed in sections {
            (render_section(site, composed))
        }
    }
}

fn case_study(
    site: &SiteConfig,
    header: &CaseStudyHeader<'_>,
    sections: &[ComposedSection<'_>],
) -> Markup {
    // Full-bleed sections go outside the column but keep their natural index
    let (bleed, regular): (Vec<_>, Vec<_>) = sections.iter().partition(|s| s.full_bleed());

    html! {
        div.case-study {
            div.container {
                header.case-header {
                    div.pills {
                        span.pill { "Case Study" }
                        span.pill.accent-alt { "PM Narrative" }
                    }
                    h1 { (header.title) }
                    p.subtitle { (header.subtitle) }
                    ul.meta {
                        @for item in header.meta {
                            li { (item) }
                        }
                    }
                    div.hero-image { (image_placeholder(header.hero_image_hint)) }
                }
                div.case-grid {
                    div.case-sections {
                        @for composed in &regular {
                            (render_section(site, composed))
                        }
                    }
                    aside.case-aside {
                        h4 { "At a glance" }
                        dl.glance {
                            @for item in header.at_a_glance {
                                dt { (item.label) }
                                dd { (item.value) }
                            }
                        }
                        h4 { "Jump to" }
                        nav.jump-to {
                            @for composed in sections {
                                button type="button" data-scroll-to=(composed.anchor()) {
                                    (composed.section.title)
                                }
                            }
                        }
                        a.button.secondary href=(route_href(HOME_PATH)) { "Back to home" }
                    }
                }
            }
            @for composed in &bleed {
                (render_section(site, composed))
            }
        }
    }
}

fn not_found(fallback: &Fallback) -> Markup {
    html! {
        div.container.not-found {
            div.card {
                h1 { (fallback.title) }
                p { (fallback.message) }
                a.button.primary href=(route_href(&fallback.action.route)) {
                    (fallback.action.label)
                }
            }
        }
    }
}

fn nav_bar(site: &SiteConfig, current: &Route) -> Markup {
    html! {
        nav.navbar {
            div.container {
                a.brand href=(route_href(HOME_PATH)) {
                    span.logo {}
                    span.brand-text {
                        strong { (site.name) }
                        small { (site.tagline) }
                    }
                }
                div.nav-links {
                    @for (label, route) in DESKTOP_LINKS {
                        a.active[is_active(route, current)] href=(route_href(route)) { (label) }
                    }
                    a href=(site.resume_url) target="_blank" rel="noreferrer" { "Resume" }
                    a.contact-link href=(route_href("/home#cta")) { "Contact" }
                }
                button.menu-toggle type="button" aria-label="Toggle menu" aria-expanded="false" data-menu-toggle {
                    "Menu"
                }
            }
            div.container.mobile-menu hidden {
                @for (label, route) in MENU_LINKS {
                    a.active[is_active(route, current)] href=(route_href(route)) { (label) }
                }
            }
        }
    }
}

fn is_active(route: &str, current: &Route) -> bool {
    let target = Route::parse(route);
    // Anchored links are exact; plain links match while no anchor is active
    match target.anchor() {
        Some(_) => target == *current,
        None => target.path() == current.path() && current.anchor().is_none(),
    }
}

fn footer(site: &SiteConfig) -> Markup {
    let mailto = format!("mailto:{}", site.email);
    html! {
        footer.footer {
            div.container {
                span { "Get in touch" }
                a href=(mailto) { (site.email) }
                a.pill href=(mailto) { "Email" }
                a.pill href=(site.linkedin_url) target="_blank" rel="noreferrer" { "LinkedIn" }
            }
        }
    }
}
