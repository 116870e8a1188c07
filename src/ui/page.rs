//! Full landing page.

use std::fmt::Write as _;

use super::components::{ButtonSize, ButtonVariant, icons, link_button};
use super::content::{
    FAQS, FEATURES, FOOTER_COLUMNS, NAV_LINKS, OCR_HIGHLIGHTS, STATS, STEPS, TESTIMONIALS,
};
use super::escape;
use super::widget::{WidgetSettings, upload_panel};

/// Values the page shell needs from configuration.
#[derive(Debug, Clone)]
pub struct PageSettings {
    /// Script URL for HTMX.
    pub htmx_src: String,
    pub widget: WidgetSettings,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            htmx_src: "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js".to_string(),
            widget: WidgetSettings::default(),
        }
    }
}

/// Generate the HTML shell for the application.
#[must_use]
pub fn html_shell(title: &str, htmx_src: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Extract text from PDFs in seconds">
    <title>{title} - PDFExtract</title>

    <script src="{htmx_src}"></script>
    <script defer src="/static/dropzone.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
{content}
</body>
</html>"#,
        title = escape(title),
        htmx_src = super::escape_attr(htmx_src),
    )
}

/// The landing page with the widget in its idle state.
#[must_use]
pub fn landing_page(settings: &PageSettings) -> String {
    let body = [
        header(),
        hero(settings.widget),
        stats(),
        features(),
        how_it_works(),
        testimonials(),
        faq(),
        footer(),
    ]
    .concat();

    html_shell("Extract Text from PDFs", &settings.htmx_src, &body)
}

fn header() -> String {
    let nav = NAV_LINKS.iter().fold(String::new(), |mut out, (label, href)| {
        let _ = write!(out, r#"<a href="{href}" class="nav-link">{label}</a>"#);
        out
    });

    format!(
        r##"<header class="site-header">
    <div class="container header-inner">
        <a href="#" class="brand">{pdf_icon}<span>PDFExtract</span></a>
        <nav class="site-nav">{nav}</nav>
        <div class="header-actions">{sign_in}{get_started}</div>
    </div>
</header>"##,
        pdf_icon = icons::FILE_PDF,
        sign_in = link_button(ButtonVariant::Ghost, ButtonSize::Sm, "#", "Sign In"),
        get_started = link_button(ButtonVariant::Primary, ButtonSize::Sm, "#upload", "Get Started"),
    )
}

fn hero(widget: WidgetSettings) -> String {
    let avatars = ["JD", "MK", "TS", "+"]
        .iter()
        .fold(String::new(), |mut out, initials| {
            let _ = write!(out, r#"<span class="avatar">{initials}</span>"#);
            out
        });

    format!(
        r##"<section class="hero">
    <div class="container hero-grid">
        <div class="hero-copy">
            <h1>Extract Text from PDFs <span class="accent">in Seconds</span></h1>
            <p class="lead">Our powerful OCR technology makes it easy to extract text from any PDF document. Simply drag and drop your file to get started.</p>
            <div class="hero-actions">{try_free}{watch_demo}</div>
            <div class="trust">
                <div class="avatars">{avatars}</div>
                <span class="muted">Trusted by 10,000+ users worldwide</span>
            </div>
        </div>
        <div id="upload" class="card hero-card">
            {panel}
        </div>
    </div>
</section>"##,
        try_free = link_button(
            ButtonVariant::Primary,
            ButtonSize::Lg,
            "#upload",
            &format!("{}Try It Free", icons::UPLOAD),
        ),
        watch_demo = link_button(
            ButtonVariant::Outline,
            ButtonSize::Lg,
            "#how-it-works",
            &format!("{}Watch Demo", icons::PLAY),
        ),
        panel = upload_panel(None, widget),
    )
}

fn stats() -> String {
    let items = STATS.iter().fold(String::new(), |mut out, stat| {
        let _ = write!(
            out,
            r#"<div class="stat"><p class="stat-value">{}</p><p class="stat-label">{}</p></div>"#,
            stat.value, stat.label
        );
        out
    });

    format!(r#"<section class="stats"><div class="container stats-grid">{items}</div></section>"#)
}

fn features() -> String {
    let cards = FEATURES.iter().fold(String::new(), |mut out, feature| {
        let _ = write!(
            out,
            r#"<div class="card feature-card"><div class="feature-icon">{}</div><h3>{}</h3><p class="muted">{}</p></div>"#,
            feature.icon,
            feature.title,
            escape(feature.description)
        );
        out
    });

    let highlights = OCR_HIGHLIGHTS.iter().fold(String::new(), |mut out, item| {
        let _ = write!(out, r#"<li>{}<span>{}</span></li>"#, icons::CHECK, item);
        out
    });

    format!(
        r##"<section id="features" class="section">
    <div class="container">
        <h2 class="section-title">Powerful Features</h2>
        <p class="section-lead">Our advanced OCR technology makes extracting text from PDFs simple, accurate, and fast.</p>
        <div class="card-grid">{cards}</div>
        <div class="spotlight">
            <div>
                <h3>Advanced OCR Technology</h3>
                <p class="muted">Our proprietary OCR engine can extract text from scanned PDFs, images, and even handwritten documents with remarkable accuracy.</p>
                <ul class="checklist">{highlights}</ul>
                {learn_more}
            </div>
        </div>
    </div>
</section>"##,
        learn_more = link_button(ButtonVariant::Primary, ButtonSize::Md, "#how-it-works", "Learn More"),
    )
}

fn how_it_works() -> String {
    let steps = STEPS
        .iter()
        .enumerate()
        .fold(String::new(), |mut out, (index, step)| {
            let _ = write!(
                out,
                r#"<div class="step"><div class="step-icon">{}<span class="step-number">{}</span></div><h3>{}</h3><p class="muted">{}</p></div>"#,
                step.icon,
                index + 1,
                escape(step.title),
                escape(step.description)
            );
            out
        });

    format!(
        r##"<section id="how-it-works" class="section section-alt">
    <div class="container">
        <h2 class="section-title">How It Works</h2>
        <p class="section-lead">Extract text from your PDFs in three simple steps</p>
        <div class="steps">{steps}</div>
        <div class="center">{try_now}</div>
    </div>
</section>"##,
        try_now = link_button(
            ButtonVariant::Primary,
            ButtonSize::Lg,
            "#upload",
            &format!("{}Try It Now", icons::UPLOAD),
        ),
    )
}

fn testimonials() -> String {
    let stars = icons::STAR.repeat(5);
    let cards = TESTIMONIALS.iter().fold(String::new(), |mut out, t| {
        let _ = write!(
            out,
            r#"<div class="card testimonial"><div class="stars">{stars}</div><p class="quote">&quot;{}&quot;</p><div class="author"><span class="avatar">{}</span><div><h4>{}</h4><p class="muted">{}</p></div></div></div>"#,
            escape(t.content),
            t.initial(),
            t.name,
            t.role
        );
        out
    });

    format!(
        r##"<section id="testimonials" class="section">
    <div class="container">
        <h2 class="section-title">What Our Users Say</h2>
        <p class="section-lead">Thousands of professionals trust our OCR technology for their document needs</p>
        <div class="card-grid">{cards}</div>
        <div class="cta card">
            <h3>Ready to extract text from your PDFs?</h3>
            <p class="muted">Join thousands of satisfied users who save time with our powerful OCR technology.</p>
            <div class="hero-actions">{get_started}{schedule}</div>
        </div>
    </div>
</section>"##,
        get_started = link_button(ButtonVariant::Primary, ButtonSize::Lg, "#upload", "Get Started Free"),
        schedule = link_button(
            ButtonVariant::Outline,
            ButtonSize::Lg,
            "#",
            &format!("{}Schedule Demo", icons::CALENDAR),
        ),
    )
}

fn faq() -> String {
    let entries = FAQS.iter().fold(String::new(), |mut out, faq| {
        let _ = write!(
            out,
            r#"<div class="faq-item"><h3>{}{}</h3><p class="muted">{}</p></div>"#,
            icons::QUESTION,
            escape(faq.question),
            escape(faq.answer)
        );
        out
    });

    format!(
        r##"<section id="faq" class="section section-alt">
    <div class="container narrow">
        <h2 class="section-title">Frequently Asked Questions</h2>
        <p class="section-lead">Find answers to common questions about our PDF text extraction service</p>
        <div class="faq-list">{entries}</div>
        <p class="center muted">Still have questions? <a href="#" class="link">Contact our support team</a></p>
    </div>
</section>"##
    )
}

fn footer() -> String {
    let columns = FOOTER_COLUMNS.iter().fold(String::new(), |mut out, column| {
        let links = column.links.iter().fold(String::new(), |mut items, link| {
            let _ = write!(items, r##"<li><a href="#" class="footer-link">{link}</a></li>"##);
            items
        });
        let _ = write!(
            out,
            r#"<div class="footer-column"><h4>{}</h4><ul>{links}</ul></div>"#,
            column.title
        );
        out
    });

    format!(
        r##"<footer class="site-footer">
    <div class="container">
        <div class="footer-grid">
            <div class="footer-brand">
                <a href="#" class="brand">{pdf_icon}<span>PDFExtract</span></a>
                <p class="muted">Advanced OCR technology for extracting text from any PDF document.</p>
            </div>
            {columns}
        </div>
        <p class="footer-bottom muted small">&copy; 2025 PDFExtract. All rights reserved.</p>
    </div>
</footer>"##,
        pdf_icon = icons::FILE_PDF,
    )
}
