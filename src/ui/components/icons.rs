//! Inline SVG icons.

macro_rules! icon {
    ($name:ident, $doc:literal, $body:literal) => {
        #[doc = $doc]
        pub const $name: &str = concat!(
            r#"<svg class="icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#,
            $body,
            "</svg>"
        );
    };
}

icon!(
    FILE_PDF,
    "PDF document.",
    r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><path d="M9 15h6"/>"#
);

icon!(
    UPLOAD,
    "Cloud upload arrow.",
    r#"<path d="M4 14.9A7 7 0 1 1 15.7 8h1.8a4.5 4.5 0 0 1 2.5 8.2"/><path d="M12 12v9"/><path d="m16 16-4-4-4 4"/>"#
);

icon!(
    ALERT,
    "Warning circle.",
    r#"<circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/>"#
);

icon!(
    DOWNLOAD,
    "Download arrow.",
    r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>"#
);

icon!(
    REFRESH,
    "Circular arrow.",
    r#"<path d="M21 12a9 9 0 1 1-3-6.7L21 8"/><path d="M21 3v5h-5"/>"#
);

icon!(
    CHECK,
    "Check mark.",
    r#"<polyline points="20 6 9 17 4 12"/>"#
);

icon!(
    STAR,
    "Star.",
    r#"<polygon points="12 2 15.1 8.3 22 9.3 17 14.1 18.2 21 12 17.8 5.8 21 7 14.1 2 9.3 8.9 8.3 12 2"/>"#
);

icon!(
    QUESTION,
    "Question mark in a circle.",
    r#"<circle cx="12" cy="12" r="10"/><path d="M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3"/><line x1="12" y1="17" x2="12.01" y2="17"/>"#
);

icon!(
    LANGUAGE,
    "Globe.",
    r#"<circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 0 20a15.3 15.3 0 0 1 0-20z"/>"#
);

icon!(
    EXPORT,
    "Box with outgoing arrow.",
    r#"<path d="M14 3h7v7"/><path d="M10 14 21 3"/><path d="M21 14v5a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5"/>"#
);

icon!(
    COG,
    "Gear.",
    r#"<circle cx="12" cy="12" r="3"/><path d="M12 2v3M12 19v3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M2 12h3M19 12h3M4.9 19.1 7 17M17 7l2.1-2.1"/>"#
);

icon!(
    FILE_TEXT,
    "Document with lines.",
    r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><polyline points="14 2 14 8 20 8"/><line x1="8" y1="13" x2="16" y2="13"/><line x1="8" y1="17" x2="16" y2="17"/>"#
);

icon!(
    PLAY,
    "Play triangle.",
    r#"<polygon points="6 3 20 12 6 21 6 3"/>"#
);

icon!(
    CALENDAR,
    "Calendar.",
    r#"<rect x="3" y="4" width="18" height="18" rx="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/>"#
);
