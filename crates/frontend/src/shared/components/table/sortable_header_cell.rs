//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     align="right"
//!     sort=Signal::derive(move || state.with(|s| s.sort().clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use crate::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort indicator (▲ ▼ ⇅) for its field and
/// reports clicks through `on_sort`
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field name passed to `on_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    sort: Signal<SortSpec>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| s.indicator_class(&sort_field_for_class))>
                    {move || sort.with(|s| s.indicator(&sort_field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
