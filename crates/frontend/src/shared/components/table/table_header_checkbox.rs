//! Select-all checkbox for the current page
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || state.with(|s| s.header_state()))
//!     on_toggle=Callback::new(move |_| state.update(|s| s.toggle_all_on_page()))
//! />
//! ```

use crate::shared::list_view::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Tri-state header checkbox: unchecked, checked or indeterminate
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` has no HTML attribute, set it on the element
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let current = state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(current == HeaderCheckState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
