use yew::prelude::*;

use crate::contexts::use_loading;

/// Full-screen overlay shown while any request is in flight. Visibility is
/// driven entirely by the loading context.
#[function_component]
pub fn LoadingSpinner() -> Html {
    let loading = use_loading();

    if !loading.is_visible() {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-white/70 dark:bg-neutral-900/70">
            <div
                class="h-12 w-12 animate-spin rounded-full border-4 border-neutral-300 border-t-neutral-900 dark:border-neutral-600 dark:border-t-neutral-100"
                role="status"
                aria-label="Loading"
            />
        </div>
    }
}
