use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::HotelList}>
                            <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                                {"Hotel Catalog"}
                            </h1>
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </header>
    }
}
