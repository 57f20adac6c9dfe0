//! Row selection checkbox cell
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
//!     on_toggle=Callback::new(move |id: String| state.update(|s| s.toggle_selected(&id)))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell for a single row. Clicks do not propagate to the row.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    item_id: String,

    #[prop(into)]
    checked: Signal<bool>,

    /// Receives `item_id` on every change
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
