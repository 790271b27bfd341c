use payloads::requests::{HotelFilters, MAX_PRICE_CEILING};
use rust_decimal::Decimal;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: HotelFilters,
    pub on_name_change: Callback<String>,
    pub on_stars_change: Callback<Vec<u8>>,
    pub on_min_rate_change: Callback<f64>,
    pub on_max_price_change: Callback<Decimal>,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn HotelFiltersPanel(props: &Props) -> Html {
    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let star_checkboxes = (1..=5u8)
        .map(|star| {
            let selected = props.filters.selected_stars.clone();
            let checked = selected.contains(&star);
            let on_stars_change = props.on_stars_change.clone();
            let ontoggle = Callback::from(move |_: Event| {
                let mut stars = selected.clone();
                if let Some(pos) = stars.iter().position(|s| *s == star) {
                    stars.remove(pos);
                } else {
                    stars.push(star);
                }
                on_stars_change.emit(stars);
            });
            html! {
                <label key={star} class="flex items-center space-x-2 text-sm text-neutral-700 dark:text-neutral-300">
                    <input
                        type="checkbox"
                        checked={checked}
                        onchange={ontoggle}
                        class="rounded border-neutral-300 dark:border-neutral-600"
                    />
                    <span>{format!("{} star{}", star, if star == 1 { "" } else { "s" })}</span>
                </label>
            }
        })
        .collect::<Html>();

    let on_min_rate_input = {
        let on_min_rate_change = props.on_min_rate_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // An empty or unparseable value means "no restriction".
            let rate = input.value().parse().unwrap_or(0.0);
            on_min_rate_change.emit(rate);
        })
    };

    let on_max_price_input = {
        let on_max_price_change = props.on_max_price_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let price = input.value().parse().unwrap_or(MAX_PRICE_CEILING);
            on_max_price_change.emit(price);
        })
    };

    let on_reset_click = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let label_class =
        "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1";
    let input_class = "w-full px-3 py-2 border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100 text-sm";

    html! {
        <div class="bg-white dark:bg-neutral-800 p-4 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700 space-y-4">
            <div>
                <label class={label_class} for="filter-name">{"Hotel name"}</label>
                <input
                    id="filter-name"
                    type="text"
                    placeholder="Search by name"
                    value={props.filters.name.clone()}
                    oninput={on_name_input}
                    class={input_class}
                />
            </div>

            <div>
                <span class={label_class}>{"Stars"}</span>
                <div class="space-y-1">
                    {star_checkboxes}
                </div>
            </div>

            <div>
                <label class={label_class} for="filter-min-rate">{"Minimum rating"}</label>
                <input
                    id="filter-min-rate"
                    type="number"
                    min="0"
                    max="5"
                    step="0.5"
                    value={props.filters.min_rate.to_string()}
                    oninput={on_min_rate_input}
                    class={input_class}
                />
            </div>

            <div>
                <label class={label_class} for="filter-max-price">{"Maximum price"}</label>
                <input
                    id="filter-max-price"
                    type="number"
                    min="0"
                    max={MAX_PRICE_CEILING.to_string()}
                    step="10"
                    value={props.filters.max_price.to_string()}
                    oninput={on_max_price_input}
                    class={input_class}
                />
            </div>

            <button
                onclick={on_reset_click}
                class="w-full bg-neutral-100 hover:bg-neutral-200 dark:bg-neutral-700 dark:hover:bg-neutral-600 text-neutral-900 dark:text-neutral-100 px-4 py-2 rounded-md text-sm font-medium transition-colors"
            >
                {"Reset filters"}
            </button>
        </div>
    }
}
