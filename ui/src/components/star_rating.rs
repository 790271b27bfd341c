use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub stars: u8,
}

#[function_component]
pub fn StarRating(props: &Props) -> Html {
    html! {
        <span aria-label={format!("{} star hotel", props.stars)}>
            {(1..=5u8).map(|star| {
                let class = if star <= props.stars {
                    "text-amber-400"
                } else {
                    "text-neutral-300 dark:text-neutral-600"
                };
                html! { <span key={star} class={class}>{"★"}</span> }
            }).collect::<Html>()}
        </span>
    }
}
