use dioxus::prelude::*;

use crate::ui::style::button_style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationItem {
    Page(usize),
    Ellipsis,
}

/// Up to five pages are all listed. Beyond that: the first two, the last
/// two and the neighbours of `current`, with an ellipsis standing in for
/// each skipped run.
pub fn pagination_items(current: usize, total_pages: usize) -> Vec<PaginationItem> {
    let mut items = Vec::new();
    for i in 0..total_pages {
        let page = i + 1;
        let near_edge = i < 2 || i + 3 > total_pages;
        if total_pages <= 5 || near_edge || page.abs_diff(current) <= 1 {
            items.push(PaginationItem::Page(page));
        } else if i == 2 && current > 3 {
            items.push(PaginationItem::Ellipsis);
        } else if i == total_pages - 3 && current + 2 < total_pages {
            items.push(PaginationItem::Ellipsis);
        }
    }
    items
}

#[component]
pub fn Pagination(current: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let items = pagination_items(current, total_pages);
    let at_start = current <= 1;
    let at_end = current >= total_pages;

    rsx! {
        nav {
            style: "display: flex; gap: 6px; justify-content: center; align-items: center; margin-top: 32px;",
            button {
                style: button_style(at_start),
                disabled: at_start,
                onclick: move |_| on_change.call(current.saturating_sub(1)),
                "‹ Previous"
            }
            {items.into_iter().enumerate().map(|(idx, item)| match item {
                PaginationItem::Page(page) => {
                    let background = if page == current { "#e0f2fe" } else { "#fff" };
                    rsx!(
                        button {
                            key: "page-{page}",
                            style: "border: 1px solid #bbb; background: {background}; padding: 6px 12px; border-radius: 6px; cursor: pointer;",
                            onclick: move |_| on_change.call(page),
                            "{page}"
                        }
                    )
                }
                PaginationItem::Ellipsis => rsx!(
                    span { key: "ellipsis-{idx}", style: "padding: 0 6px;", "…" }
                ),
            })}
            button {
                style: button_style(at_end),
                disabled: at_end,
                onclick: move |_| on_change.call(current + 1),
                "Next ›"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PaginationItem::{Ellipsis, Page};

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(pagination_items(1, 1), vec![Page(1)]);
        assert_eq!(
            pagination_items(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(pagination_items(1, 0).is_empty());
    }

    #[test]
    fn middle_page_gets_ellipses_on_both_sides() {
        assert_eq!(
            pagination_items(5, 10),
            vec![
                Page(1),
                Page(2),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn first_page_only_trails_with_ellipsis() {
        assert_eq!(
            pagination_items(1, 8),
            vec![Page(1), Page(2), Ellipsis, Page(7), Page(8)]
        );
    }

    #[test]
    fn last_page_only_leads_with_ellipsis() {
        assert_eq!(
            pagination_items(8, 8),
            vec![Page(1), Page(2), Ellipsis, Page(7), Page(8)]
        );
    }
}
