use payloads::requests::{HotelSort, SortBy, SortDirection};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub sort: HotelSort,
    pub on_change: Callback<(Option<SortBy>, SortDirection)>,
}

#[function_component]
pub fn HotelSortSelect(props: &Props) -> Html {
    let sort = props.sort;

    let on_field_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // The empty option means catalog order.
            let sort_by = SortBy::from_field(&select.value());
            on_change.emit((sort_by, sort.direction));
        })
    };

    let on_direction_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let direction = SortDirection::from_param(&select.value())
                .unwrap_or_default();
            on_change.emit((sort.sort_by, direction));
        })
    };

    let select_class = "px-3 py-2 border border-neutral-300 \
                        dark:border-neutral-600 rounded-md bg-white \
                        dark:bg-neutral-700 text-neutral-900 \
                        dark:text-neutral-100 text-sm";
    let field_value =
        sort.sort_by.map(|s| s.as_field()).unwrap_or("").to_string();

    html! {
        <div class="flex items-center space-x-2">
            <label class="text-sm text-neutral-600 dark:text-neutral-400" for="sort-field">
                {"Sort by"}
            </label>
            <select
                id="sort-field"
                value={field_value}
                onchange={on_field_change}
                class={select_class}
            >
                <option value="" selected={sort.sort_by.is_none()}>{"Default"}</option>
                <option value="price" selected={sort.sort_by == Some(SortBy::Price)}>{"Price"}</option>
                <option value="rate" selected={sort.sort_by == Some(SortBy::Rate)}>{"Rating"}</option>
                <option value="stars" selected={sort.sort_by == Some(SortBy::Stars)}>{"Stars"}</option>
                <option value="name" selected={sort.sort_by == Some(SortBy::Name)}>{"Name"}</option>
            </select>
            <select
                id="sort-direction"
                onchange={on_direction_change}
                class={select_class}
                disabled={sort.sort_by.is_none()}
            >
                <option value="asc" selected={sort.direction == SortDirection::Asc}>{"Ascending"}</option>
                <option value="desc" selected={sort.direction == SortDirection::Desc}>{"Descending"}</option>
            </select>
        </div>
    }
}
