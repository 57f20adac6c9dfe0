use crate::shared::icons::icon;
use crate::shared::list_view::{page_window, PageMarker};
use leptos::prelude::*;

/// Page bar: previous/next buttons around the numbered window with ellipses.
///
/// Pages are 1-based. Buttons for pages outside `1..=total_pages` are disabled.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows after filtering, shown next to the bar
    #[prop(into)]
    total_count: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let markers = move || page_window(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                markers()
                    .into_iter()
                    .map(|marker| match marker {
                        PageMarker::Page(page) => view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageMarker::Ellipsis => view! {
                            <span class="pagination-ellipsis">"..."</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("{} items", total_count.get())}
            </span>
        </div>
    }
}
