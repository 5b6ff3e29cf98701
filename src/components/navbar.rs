use leptos::prelude::*;

#[component]
pub fn Navbar(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <span class="navbar-icon">"\u{1F6E1}"</span>
                <span class="navbar-title">"Mental Health Check-in"</span>
            </div>
            <button class="btn btn-ghost" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </nav>
    }
}
