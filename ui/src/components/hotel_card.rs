use payloads::Hotel;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::StarRating;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub hotel: Hotel,
}

#[function_component]
pub fn HotelCard(props: &Props) -> Html {
    let hotel = &props.hotel;

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 overflow-hidden">
            <img
                src={hotel.image.clone()}
                alt={hotel.name.clone()}
                class="w-full h-48 object-cover"
            />
            <div class="p-4 space-y-2">
                <div class="flex justify-between items-start">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&hotel.name}
                    </h3>
                    <span class="bg-neutral-900 dark:bg-neutral-100 text-white dark:text-neutral-900 text-sm font-medium px-2 py-1 rounded">
                        {format!("{:.1}", hotel.rate)}
                    </span>
                </div>
                <StarRating stars={hotel.stars} />
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&hotel.address}
                </p>
                <div class="flex justify-between items-center pt-2">
                    <span class="text-lg font-bold text-neutral-900 dark:text-neutral-100">
                        {format!("${:.2}", hotel.price)}
                        <span class="text-sm font-normal text-neutral-600 dark:text-neutral-400">
                            {" / night"}
                        </span>
                    </span>
                    <Link<Route>
                        to={Route::HotelDetail { id: hotel.id }}
                        classes="bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors"
                    >
                        {"View Details"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
