//! Search, filter and sort toolbar for list pages.
//!
//! The widget is controlled: it renders the given [`ListCriteria`] and reports
//! every change through `on_change`. Filtering the rows is left to the page
//! (see `contracts::shared::list_query::apply_filters`).

use crate::shared::icons::icon;
use contracts::shared::list_query::{FilterGroup, ListCriteria, SortOption};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn DataTableFilters(
    /// Current criteria
    #[prop(into)]
    criteria: Signal<ListCriteria>,
    /// Receives the updated criteria
    on_change: Callback<ListCriteria>,
    #[prop(into)]
    filter_groups: Signal<Vec<FilterGroup>>,
    sort_options: Vec<SortOption>,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Pause after the last keystroke before the search is reported
    #[prop(optional)]
    debounce_ms: Option<u32>,
) -> impl IntoView {
    let placeholder = if search_placeholder.is_empty() {
        "Search...".to_string()
    } else {
        search_placeholder
    };
    let debounce_ms = debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS);

    // Local state for the input (before debounce)
    let input_value = RwSignal::new(criteria.get_untracked().search);
    // Dropping the pending timer cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    let (menu_open, set_menu_open) = signal(false);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let timer = Timeout::new(debounce_ms, move || {
            on_change.run(criteria.get_untracked().with_search(new_value));
        });
        pending.set_value(Some(timer));
    };

    let clear_search = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(criteria.get_untracked().with_search(""));
    };

    let active_count = move || criteria.with(|c| c.active_filters_count());
    let has_sort = move || criteria.with(|c| c.sort.is_some());
    let has_search = move || criteria.with(|c| c.has_search());
    let can_clear = move || criteria.with(|c| c.has_refinements());

    let sort_select_options = sort_options
        .into_iter()
        .map(|option| {
            let value = option.value.clone();
            let is_selected = move || criteria.with(|c| c.sort_field() == Some(value.as_str()));
            view! { <option value=option.value selected=is_selected>{option.label}</option> }
        })
        .collect_view();

    let on_sort_change = move |ev| {
        let field = event_target_value(&ev);
        let current = criteria.get_untracked();
        let next = if field.is_empty() {
            current.without_sort()
        } else {
            let direction = current.sort_direction();
            current.with_sort(field, direction)
        };
        on_change.run(next);
    };

    let toggle_direction = move |_| {
        let current = criteria.get_untracked();
        if let Some(field) = current.sort_field().map(str::to_string) {
            let direction = current.sort_direction().toggled();
            on_change.run(current.with_sort(field, direction));
        }
    };

    let clear_filters = move |_| {
        set_menu_open.set(false);
        on_change.run(criteria.get_untracked().cleared());
    };

    let render_groups = move || {
        filter_groups
            .get()
            .into_iter()
            .map(|group| {
                let options = group
                    .options
                    .into_iter()
                    .map(|option| {
                        let key = group.key.clone();
                        let value = option.value.clone();
                        let is_checked = {
                            let key = key.clone();
                            let value = value.clone();
                            move || criteria.with(|c| c.is_selected(&key, &value))
                        };
                        view! {
                            <label class="filter-menu__option">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change=move |_| {
                                        on_change.run(criteria.get_untracked().toggle_value(&key, &value))
                                    }
                                />
                                <span>{option.label}</span>
                                {option.count.map(|n| view! { <span class="filter-menu__count">{n}</span> })}
                            </label>
                        }
                    })
                    .collect_view();

                view! {
                    <div class="filter-menu__group">
                        <div class="filter-menu__label">{group.label}</div>
                        {options}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="data-table-filters">
            <div
                class="data-table-filters__search"
                class=("data-table-filters__search--active", has_search)
            >
                {icon("search")}
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input_value.get()
                    on:input=move |ev| handle_input_change(event_target_value(&ev))
                />
                {move || {
                    (!input_value.get().is_empty())
                        .then(|| {
                            view! {
                                <button class="button button--icon" title="Clear search" on:click=clear_search>
                                    {icon("x")}
                                </button>
                            }
                        })
                }}
            </div>

            <div class="data-table-filters__menu">
                <button class="button button--secondary" on:click=move |_| set_menu_open.update(|v| *v = !*v)>
                    {icon("filter")}
                    "Filters"
                    {move || {
                        let count = active_count();
                        (count > 0).then(|| view! { <span class="badge">{count}</span> })
                    }}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="filter-menu">{render_groups}</div>
                </Show>
            </div>

            <div class="data-table-filters__sort">
                <select on:change=on_sort_change>
                    <option value="" selected=move || !has_sort()>"Sort by..."</option>
                    {sort_select_options}
                </select>
                <button
                    class="button button--icon"
                    title="Toggle sort direction"
                    disabled=move || !has_sort()
                    on:click=toggle_direction
                >
                    {move || criteria.with(|c| c.sort_direction().indicator())}
                </button>
            </div>

            <Show when=can_clear>
                <button class="button button--ghost" on:click=clear_filters>
                    {icon("x")}
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
