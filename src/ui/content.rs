//! Static marketing copy.

use super::components::icons;

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
}

impl Testimonial {
    /// First letter of the name, used as the avatar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

/// Anchor links shown in the header.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Features", "#features"),
    ("How It Works", "#how-it-works"),
    ("Testimonials", "#testimonials"),
];

pub const STATS: &[Stat] = &[
    Stat { value: "10M+", label: "PDFs Processed" },
    Stat { value: "99.8%", label: "Accuracy Rate" },
    Stat { value: "100+", label: "Languages Supported" },
    Stat { value: "50K+", label: "Happy Users" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: icons::FILE_PDF,
        title: "Advanced OCR",
        description: "Extract text from scanned PDFs with high accuracy using our state-of-the-art OCR technology.",
    },
    Feature {
        icon: icons::LANGUAGE,
        title: "Multi-language Support",
        description: "Support for over 100 languages including English, Spanish, French, German, Chinese, and more.",
    },
    Feature {
        icon: icons::EXPORT,
        title: "Easy Export",
        description: "Export extracted text in various formats including TXT, DOCX, and searchable PDF.",
    },
];

pub const OCR_HIGHLIGHTS: &[&str] = &[
    "99.8% accuracy on printed text",
    "Support for tables and complex layouts",
    "Preserves document formatting",
    "Handles low-quality scans",
];

pub const STEPS: &[Step] = &[
    Step {
        icon: icons::UPLOAD,
        title: "Upload PDF",
        description: "Drag & drop or select your PDF file",
    },
    Step {
        icon: icons::COG,
        title: "Processing",
        description: "Our AI analyzes and extracts text",
    },
    Step {
        icon: icons::FILE_TEXT,
        title: "Extract Text",
        description: "View and download the extracted content",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Manager",
        content: "This tool has saved our team countless hours of manual data entry. The accuracy is impressive!",
    },
    Testimonial {
        name: "David Chen",
        role: "Research Analyst",
        content: "I use this daily to extract data from research papers. The multi-language support is a game-changer.",
    },
    Testimonial {
        name: "Emma Rodriguez",
        role: "Legal Assistant",
        content: "Perfect for extracting text from legal documents. Fast, accurate, and incredibly easy to use.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What file types are supported?",
        answer: "We currently support PDF files. Our OCR technology can extract text from scanned PDFs, image-based PDFs, and native PDFs.",
    },
    Faq {
        question: "How accurate is the text extraction?",
        answer: "Our OCR technology achieves 99.8% accuracy on clear, printed text. Accuracy may vary for handwritten text or low-quality scans.",
    },
    Faq {
        question: "Is there a file size limit?",
        answer: "Yes, the free version supports files up to 10MB. Premium plans support larger files up to 100MB.",
    },
    Faq {
        question: "What languages are supported?",
        answer: "We support over 100 languages including English, Spanish, French, German, Chinese, Japanese, Arabic, and many more.",
    },
    Faq {
        question: "Is my data secure?",
        answer: "Yes, we take data security seriously. Files are encrypted during transit and processing, and are deleted from our servers after processing is complete.",
    },
    Faq {
        question: "Can I extract text from password-protected PDFs?",
        answer: "Yes, but you'll need to provide the password during the upload process to allow our system to access the content.",
    },
];

/// Link columns in the footer. None of the links lead anywhere yet.
pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Product",
        links: &["Features", "Pricing", "API", "Integrations", "Documentation"],
    },
    FooterColumn {
        title: "Company",
        links: &["About Us", "Blog", "Careers", "Press", "Contact"],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            "Privacy Policy",
            "Terms of Service",
            "Cookie Policy",
            "GDPR Compliance",
            "Security",
        ],
    },
];
