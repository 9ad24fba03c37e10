//! Pagination control for paged lists

use leptos::*;
use usercenter_common::pagination::{PageItem, PageState, DEFAULT_WINDOW_SIZE};

/// "Showing 1–20 of 200 users"
pub fn summary_text(state: &PageState, noun: &str) -> String {
    format!("Showing {} {}", state.range_label(), noun)
}

/// Disabled state of the previous/next buttons, taken from the caller's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl NavButtons {
    pub fn new(has_previous_page: bool, has_next_page: bool) -> Self {
        Self {
            previous_disabled: !has_previous_page,
            next_disabled: !has_next_page,
        }
    }
}

/// Range summary, previous/next buttons, page strip and position indicator.
///
/// Whether previous/next are enabled is decided by the caller. Nothing is
/// rendered while there is at most one page.
#[component]
pub fn PaginationControl(
    #[prop(into)] current_page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    /// Total number of items across all pages
    #[prop(into)]
    total_items: MaybeSignal<usize>,
    #[prop(into)] per_page: MaybeSignal<usize>,
    #[prop(into)] has_previous_page: MaybeSignal<bool>,
    #[prop(into)] has_next_page: MaybeSignal<bool>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(into)] on_previous_page: Callback<()>,
    #[prop(into)] on_next_page: Callback<()>,
    /// Page buttons shown at once
    #[prop(optional)]
    window_size: Option<usize>,
    /// What the items are called in the summary
    #[prop(default = "users")]
    noun: &'static str,
) -> impl IntoView {
    let window_size = window_size.unwrap_or(DEFAULT_WINDOW_SIZE);

    move || {
        let state = PageState {
            current_page: current_page.get(),
            total_pages: total_pages.get(),
            total_items: total_items.get(),
            per_page: per_page.get(),
        };

        if !state.is_paginated() {
            return ().into_view();
        }

        let nav = NavButtons::new(has_previous_page.get(), has_next_page.get());

        let strip = state
            .window(window_size)
            .items()
            .into_iter()
            .map(|item| match item {
                PageItem::Page { number, current } => view! {
                    <button
                        type="button"
                        class="page-button"
                        class:active=current
                        aria-current=current.then_some("page")
                        on:click=move |_| on_page_change.call(number)
                    >
                        {number}
                    </button>
                }
                .into_view(),
                PageItem::Ellipsis => view! {
                    <span class="page-ellipsis">"..."</span>
                }
                .into_view(),
            })
            .collect_view();

        view! {
            <div class="pagination">
                <div class="pagination-info">{summary_text(&state, noun)}</div>

                <div class="pagination-controls">
                    <button
                        type="button"
                        class="nav-button prev"
                        class:disabled=nav.previous_disabled
                        disabled=nav.previous_disabled
                        on:click=move |_| on_previous_page.call(())
                    >
                        "← Previous"
                    </button>

                    {strip}

                    <button
                        type="button"
                        class="nav-button next"
                        class:disabled=nav.next_disabled
                        disabled=nav.next_disabled
                        on:click=move |_| on_next_page.call(())
                    >
                        "Next →"
                    </button>
                </div>

                <div class="pagination-position">{state.position_label()}</div>
            </div>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usercenter_common::pagination::PageCursor;

    #[test]
    fn test_summary_text() {
        let state = PageState {
            current_page: 1,
            total_pages: 10,
            total_items: 200,
            per_page: 20,
        };
        assert_eq!(summary_text(&state, "users"), "Showing 1–20 of 200 users");
    }

    #[test]
    fn test_summary_text_large_counts() {
        let state = PageState {
            current_page: 51,
            total_pages: 60,
            total_items: 1_195,
            per_page: 20,
        };
        assert_eq!(summary_text(&state, "users"), "Showing 1,001–1,020 of 1,195 users");
    }

    #[test]
    fn test_control_hidden_without_second_page() {
        for (total_pages, shown) in [(0, false), (1, false), (2, true)] {
            let state = PageState {
                current_page: 1,
                total_pages,
                total_items: total_pages * 20,
                per_page: 20,
            };
            assert_eq!(state.is_paginated(), shown, "total_pages={total_pages}");
        }
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let mut cursor = PageCursor::new(10);
        cursor.go_to(10);

        let nav = NavButtons::new(cursor.has_previous_page(), cursor.has_next_page());
        assert!(nav.next_disabled);
        assert!(!nav.previous_disabled);

        cursor.go_to(1);
        let nav = NavButtons::new(cursor.has_previous_page(), cursor.has_next_page());
        assert!(!nav.next_disabled);
        assert!(nav.previous_disabled);
    }

    #[test]
    fn test_buttons_follow_caller_flags_only() {
        // the caller may disable next even when more pages exist
        assert_eq!(
            NavButtons::new(true, false),
            NavButtons {
                previous_disabled: false,
                next_disabled: true
            }
        );
    }
}
