//! Sidebar navigation

use super::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active: RwSignal<Page>) -> impl IntoView {
    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__brand">"CRM Dashboard"</div>
            <nav class="app-sidebar__nav">
                {Page::all()
                    .iter()
                    .copied()
                    .map(|page| {
                        view! {
                            <button
                                class="app-sidebar__item"
                                class=("app-sidebar__item--active", move || active.get() == page)
                                on:click=move |_| active.set(page)
                            >
                                {icon(page.icon())}
                                <span>{page.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
