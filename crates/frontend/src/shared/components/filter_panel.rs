use crate::shared::icons::icon;
use crate::shared::list_view::FilterValue;
use leptos::prelude::*;

/// Collapsible filter panel: search box, active-filter badge and reset button
/// above the dimension controls passed as children
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    search: Signal<String>,

    on_search: Callback<String>,

    on_reset: Callback<()>,

    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="badge badge--primary">{count}</span>
                        })
                    }}
                </div>
                <input
                    type="search"
                    class="form__input filter-panel__search"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| on_search.run(event_target_value(&ev))
                />
                <button
                    class="button button--secondary"
                    disabled=move || active_filters_count.get() == 0 && search.with(|s| s.trim().is_empty())
                    on:click=move |_| on_reset.run(())
                >
                    "Reset"
                </button>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}

/// One checkbox per option of a categorical dimension
#[component]
pub fn FilterOptions(
    #[prop(into)]
    title: String,

    /// (value, label) pairs
    options: Vec<(FilterValue, String)>,

    /// Whether an option is currently selected
    is_selected: Callback<FilterValue, bool>,

    on_toggle: Callback<FilterValue>,
) -> impl IntoView {
    view! {
        <fieldset class="filter-options">
            <legend class="filter-options__title">{title}</legend>
            {options
                .into_iter()
                .map(|(value, label)| {
                    let value_for_checked = value.clone();
                    view! {
                        <label class="form__checkbox-wrapper">
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || is_selected.run(value_for_checked.clone())
                                on:change=move |_| on_toggle.run(value.clone())
                            />
                            <span class="form__checkbox-label">{label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// Inclusive numeric range inputs. Unparseable input is ignored.
#[component]
pub fn RangeFilter(
    #[prop(into)]
    title: String,

    /// Slider bounds
    bounds: (f64, f64),

    #[prop(into)]
    range: Signal<(f64, f64)>,

    on_change: Callback<(f64, f64)>,
) -> impl IntoView {
    let (lower, upper) = bounds;
    view! {
        <fieldset class="filter-range">
            <legend class="filter-range__title">{title}</legend>
            <input
                type="number"
                class="form__input"
                min=lower.to_string()
                max=upper.to_string()
                prop:value=move || range.get().0.to_string()
                on:change=move |ev| {
                    if let Ok(min) = event_target_value(&ev).parse::<f64>() {
                        on_change.run((min, range.get_untracked().1));
                    }
                }
            />
            <span class="filter-range__separator">"-"</span>
            <input
                type="number"
                class="form__input"
                min=lower.to_string()
                max=upper.to_string()
                prop:value=move || range.get().1.to_string()
                on:change=move |ev| {
                    if let Ok(max) = event_target_value(&ev).parse::<f64>() {
                        on_change.run((range.get_untracked().0, max));
                    }
                }
            />
        </fieldset>
    }
}
