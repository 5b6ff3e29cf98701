use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::app::SessionContext;
use crate::routes::{redirect_for, Guard, LOGIN_PATH};

/// Render `children` only when the session flag satisfies `guard`;
/// otherwise redirect.
#[component]
pub fn ProtectedRoute(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let target = move || redirect_for(guard, session.logged_in.get());

    view! {
        <Show
            when=move || target().is_none()
            fallback=move || {
                let path = target().unwrap_or(LOGIN_PATH);
                log::debug!("Route guard redirecting to {}", path);
                view! { <Redirect path=path /> }
            }
        >
            {children()}
        </Show>
    }
}
