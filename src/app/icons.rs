use leptos::prelude::*;

use crate::content::Network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Github,
    Linkedin,
    Mail,
    Download,
    Sun,
    Moon,
}

impl IconKind {
    // lucide outline paths, 24x24 grid
    fn paths(self) -> &'static str {
        match self {
            IconKind::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            IconKind::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            IconKind::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            IconKind::Download => concat!(
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>"#,
                r#"<polyline points="7 10 12 15 17 10"/>"#,
                r#"<line x1="12" x2="12" y1="15" y2="3"/>"#,
            ),
            IconKind::Sun => concat!(
                r#"<circle cx="12" cy="12" r="4"/>"#,
                r#"<path d="M12 2v2"/><path d="M12 20v2"/>"#,
                r#"<path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/>"#,
                r#"<path d="M2 12h2"/><path d="M20 12h2"/>"#,
                r#"<path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            ),
            IconKind::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        }
    }
}

impl From<Network> for IconKind {
    fn from(network: Network) -> Self {
        match network {
            Network::GitHub => IconKind::Github,
            Network::LinkedIn => IconKind::Linkedin,
            Network::Email => IconKind::Mail,
        }
    }
}

fn svg_markup(kind: IconKind, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
        kind.paths()
    )
}

#[component]
pub fn Icon(kind: IconKind, #[prop(default = 24)] size: u32) -> impl IntoView {
    view! { <span class="inline-flex" aria-hidden="true" inner_html=svg_markup(kind, size)></span> }
}
