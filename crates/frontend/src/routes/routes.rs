use crate::layout::center::SectionViews;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Navbar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();

    // раздел из ?section= восстанавливается один раз при создании
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <SectionViews /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
