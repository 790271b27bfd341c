use yew::prelude::*;

use crate::components::{
    HotelCard, HotelFiltersPanel, HotelSortSelect, PaginationControls,
};
use crate::hooks::{use_hotel_search, use_title};

#[function_component]
pub fn HotelListPage() -> Html {
    use_title("Hotels");
    let (state, search) = use_hotel_search();

    {
        let search = search.clone();
        use_effect_with((), move |_| {
            search.initialize_data();
        });
    }

    let on_name_change = {
        let search = search.clone();
        Callback::from(move |name: String| search.update_name_filter(&name))
    };
    let on_stars_change = {
        let search = search.clone();
        Callback::from(move |stars| search.update_stars_filter(stars))
    };
    let on_min_rate_change = {
        let search = search.clone();
        Callback::from(move |rate| search.update_min_rate_filter(rate))
    };
    let on_max_price_change = {
        let search = search.clone();
        Callback::from(move |price| search.update_max_price_filter(price))
    };
    let on_reset = {
        let search = search.clone();
        Callback::from(move |_| search.reset_filters())
    };
    let on_sort_change = {
        let search = search.clone();
        Callback::from(move |(sort_by, direction)| {
            search.update_sort(sort_by, direction)
        })
    };
    let on_page_change = {
        let search = search.clone();
        Callback::from(move |page| search.go_to_page(page))
    };
    let on_page_size_change = {
        let search = search.clone();
        Callback::from(move |size| search.update_page_size(size))
    };

    let hotels = &state.hotels;
    let total = hotels.pagination.total_items;

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <aside class="lg:col-span-1">
                <HotelFiltersPanel
                    filters={hotels.filters.clone()}
                    {on_name_change}
                    {on_stars_change}
                    {on_min_rate_change}
                    {on_max_price_change}
                    {on_reset}
                />
            </aside>

            <section class="lg:col-span-3 space-y-6">
                <div class="flex flex-wrap justify-between items-center gap-4">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} hotel{} found",
                            total,
                            if total == 1 { "" } else { "s" }
                        )}
                    </p>
                    <HotelSortSelect
                        sort={hotels.sort}
                        on_change={on_sort_change}
                    />
                </div>

                if hotels.data.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"No hotels match your filters."}
                        </p>
                    </div>
                } else {
                    <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                        {hotels.data.iter().map(|hotel| html! {
                            <HotelCard
                                key={hotel.id.to_string()}
                                hotel={hotel.clone()}
                            />
                        }).collect::<Html>()}
                    </div>
                }

                <PaginationControls
                    pagination={hotels.pagination.clone()}
                    {on_page_change}
                    {on_page_size_change}
                />
            </section>
        </div>
    }
}
