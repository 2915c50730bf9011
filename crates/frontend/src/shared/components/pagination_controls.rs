use leptos::prelude::*;

/// Максимальное число кнопок страниц в окне
pub const PAGE_WINDOW: u32 = 5;

/// Pagination links for one rendered page (1-indexed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub current: u32,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Page numbers of the window, ascending
    pub pages: Vec<u32>,
}

impl PageLinks {
    /// Window of up to five pages centered on `current`, clamped to `[1, total_pages]`.
    ///
    /// With zero pages there is nothing to navigate to, so both Previous and
    /// Next are disabled.
    pub fn build(current: u32, total_pages: u32) -> Self {
        let current = current.max(1);
        let half = PAGE_WINDOW / 2;
        let start = current.saturating_sub(half).max(1);
        let end = (current + half).min(total_pages);

        Self {
            current,
            prev_disabled: current <= 1,
            next_disabled: current >= total_pages,
            pages: (start..=end).collect(),
        }
    }
}

/// PaginationControls component - Bootstrap pagination list
///
/// Previous / page window / Next. Disabled links do not emit page changes.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages reported by the last response
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let links = Memo::new(move |_| PageLinks::build(current_page.get(), total_pages.get()));

    view! {
        <nav aria-label="Orders pagination">
            <ul class="pagination justify-content-center">
                <li class="page-item" class:disabled=move || links.get().prev_disabled>
                    <a
                        class="page-link"
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            let l = links.get_untracked();
                            if !l.prev_disabled {
                                on_page_change.run(l.current - 1);
                            }
                        }
                    >
                        "Previous"
                    </a>
                </li>
                <For
                    each=move || links.get().pages
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <li class="page-item" class:active=move || links.get().current == page>
                                <a
                                    class="page-link"
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_page_change.run(page);
                                    }
                                >
                                    {page.to_string()}
                                </a>
                            </li>
                        }
                    }
                />
                <li class="page-item" class:disabled=move || links.get().next_disabled>
                    <a
                        class="page-link"
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            let l = links.get_untracked();
                            if !l.next_disabled {
                                on_page_change.run(l.current + 1);
                            }
                        }
                    >
                        "Next"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
