use crate::layout::global_context::use_global_context;
use crate::layout::sections::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="main-nav-bar">
            <ul class="nav flex-column">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        let key = section.key();
                        view! {
                            <li class="nav-item">
                                <a
                                    class="nav-link"
                                    class:active=move || ctx.active.get() == section
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        let _ = ctx.show_section(key);
                                    }
                                >
                                    {icon(section.icon())}
                                    <span>{section.nav_label()}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
