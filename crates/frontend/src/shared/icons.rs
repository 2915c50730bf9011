use leptos::prelude::*;

fn svg(paths: &'static str) -> AnyView {
    view! {
        <svg
            width="18"
            height="18"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=paths
        ></svg>
    }
    .into_any()
}

/// Inline icon by name; unknown names render nothing
pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => svg(r#"<rect x="3" y="3" width="7" height="9" rx="1"/><rect x="14" y="3" width="7" height="5" rx="1"/><rect x="14" y="12" width="7" height="9" rx="1"/><rect x="3" y="16" width="7" height="5" rx="1"/>"#),
        "quality" => svg(r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><path d="M22 4 12 14.01l-3-3"/>"#),
        "cleaning" => svg(r#"<path d="m3 21 9-9"/><path d="M12.22 6.78 17 2l5 5-4.78 4.78"/><path d="m9 13 2 2"/><path d="M14 6l4 4"/>"#),
        "orders" => svg(r#"<path d="M21 15V5a2 2 0 0 0-2-2H7l-4 4v8a2 2 0 0 0 2 2h6"/><path d="M3 7h4V3"/><path d="M16 21l2-2 4 4"/>"#),
        "manage" => svg(r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>"#),
        "powerbi" => svg(r#"<path d="M18 20V10"/><path d="M12 20V4"/><path d="M6 20v-6"/>"#),
        "export" => svg(r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><path d="M7 10l5 5 5-5"/><path d="M12 15V3"/>"#),
        "refresh" => svg(r#"<path d="M23 4v6h-6"/><path d="M1 20v-6h6"/><path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>"#),
        "x" => svg(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
        "copy" => svg(r#"<rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>"#),
        "search" => svg(r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.35-4.35"/>"#),
        "trash" => svg(r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#),
        "save" => svg(r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><path d="M17 21v-8H7v8"/><path d="M7 3v5h8"/>"#),
        "plus" => svg(r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#),
        "menu" => svg(r#"<path d="M3 12h18"/><path d="M3 6h18"/><path d="M3 18h18"/>"#),
        _ => ().into_any(),
    }
}
