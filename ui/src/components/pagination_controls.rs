use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::state::{AVAILABLE_PAGE_SIZES, HotelPagination};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub pagination: HotelPagination,
    /// Callback with the requested 1-based page number.
    pub on_page_change: Callback<u32>,
    pub on_page_size_change: Callback<u32>,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let pagination = props.pagination.clone();

    // Nothing to page through
    if pagination.total_items == 0 {
        return html! {};
    }

    let current = pagination.current_page;
    let total_pages = pagination.total_pages();
    let is_first_page = current == 1;
    let is_last_page = current >= total_pages;

    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(page))
    };

    let on_size_change = {
        let on_page_size_change = props.on_page_size_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse() {
                on_page_size_change.emit(size);
            }
        })
    };

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex flex-wrap items-center justify-between gap-4 mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <div class="flex items-center space-x-2">
                <button
                    onclick={go_to(1)}
                    disabled={is_first_page}
                    class={button_class(is_first_page)}
                >
                    {"First"}
                </button>
                <button
                    onclick={go_to(current.saturating_sub(1))}
                    disabled={is_first_page}
                    class={button_class(is_first_page)}
                >
                    {"Previous"}
                </button>
            </div>

            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {} of {}", current, total_pages)}
            </span>

            <div class="flex items-center space-x-2">
                <label class="text-sm text-neutral-600 dark:text-neutral-400" for="page-size">
                    {"Per page"}
                </label>
                <select
                    id="page-size"
                    onchange={on_size_change}
                    class="px-2 py-2 border border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 text-neutral-900 \
                           dark:text-neutral-100 text-sm"
                >
                    {AVAILABLE_PAGE_SIZES.iter().map(|size| html! {
                        <option
                            key={*size}
                            value={size.to_string()}
                            selected={*size == pagination.page_size}
                        >
                            {size.to_string()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </div>

            <div class="flex items-center space-x-2">
                <button
                    onclick={go_to(current + 1)}
                    disabled={is_last_page}
                    class={button_class(is_last_page)}
                >
                    {"Next"}
                </button>
                <button
                    onclick={go_to(total_pages)}
                    disabled={is_last_page}
                    class={button_class(is_last_page)}
                >
                    {"Last"}
                </button>
            </div>
        </div>
    }
}
