use contracts::shared::pagination::Pager;
use leptos::prelude::*;

/// Numbered pagination: Previous, one button per page, Next.
///
/// Pages are 1-based. Nothing is rendered while there are no pages.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback with the page to load
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let controls = move || Pager::with_pages(current_page.get(), total_pages.get()).controls();

    view! {
        <Show when=move || { total_pages.get() > 0 }>
            <nav class="pagination-controls" aria-label="Pagination">
                {move || controls().into_iter().map(|control| {
                    let target = control.target();
                    view! {
                        <button
                            class="pagination-btn"
                            class:pagination-btn--active=control.is_active()
                            disabled=control.is_disabled()
                            on:click=move |_| {
                                if let Some(page) = target {
                                    on_page_change.run(page);
                                }
                            }
                        >
                            {control.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}
