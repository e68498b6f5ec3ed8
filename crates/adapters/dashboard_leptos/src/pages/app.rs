use leptos::prelude::*;

#[component]
pub fn AppPage() -> impl IntoView {
    view! {
        <section class="app">
            <h1>"App"</h1>
            <p>
                <a href="/">"Back to the dashboard"</a>
            </p>
        </section>
    }
}
