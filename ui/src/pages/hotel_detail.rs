use payloads::HotelId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::StarRating;
use crate::hooks::{use_hotel, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: HotelId,
}

#[function_component]
pub fn HotelDetailPage(props: &Props) -> Html {
    let hotel_hook = use_hotel(props.id);

    let title = hotel_hook
        .data
        .as_ref()
        .map(|h| h.name.clone())
        .unwrap_or_else(|| "Hotel details".to_string());
    use_title(&title);

    let back_link = html! {
        <Link<Route>
            to={Route::HotelList}
            classes="text-sm text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-neutral-100"
        >
            {"← Back to all hotels"}
        </Link<Route>>
    };

    let Some(hotel) = hotel_hook.data.as_ref() else {
        if hotel_hook.is_loading {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Loading hotel..."}
                    </p>
                </div>
            };
        }
        // Lookups that fail, including true 404s, all read as "not yet
        // available" rather than an error page.
        return html! {
            <div class="space-y-6">
                {back_link}
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"This hotel isn't available yet. Please check back later."}
                    </p>
                </div>
            </div>
        };
    };

    html! {
        <div class="space-y-6">
            {back_link}

            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-hidden">
                <img
                    src={hotel.image.clone()}
                    alt={hotel.name.clone()}
                    class="w-full h-72 object-cover"
                />
                <div class="p-6 space-y-4">
                    <div class="flex flex-wrap justify-between items-start gap-4">
                        <div>
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&hotel.name}
                            </h1>
                            <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                                {&hotel.address}
                            </p>
                        </div>
                        <span class="bg-neutral-900 dark:bg-neutral-100 text-white dark:text-neutral-900 text-lg font-medium px-3 py-1 rounded">
                            {format!("{:.1} / 5", hotel.rate)}
                        </span>
                    </div>

                    <div class="flex items-center space-x-4">
                        <StarRating stars={hotel.stars} />
                        <span class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                            {format!("${:.2}", hotel.price)}
                            <span class="text-base font-normal text-neutral-600 dark:text-neutral-400">
                                {" / night"}
                            </span>
                        </span>
                    </div>

                    <div class="space-y-3 text-neutral-700 dark:text-neutral-300">
                        {hotel.description.split("\n\n").map(|paragraph| html! {
                            <p>{paragraph}</p>
                        }).collect::<Html>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
