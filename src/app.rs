use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::protected_route::ProtectedRoute;
use crate::pages::check_in::CheckInPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignUpPage;
use crate::routes::{Guard, LOGIN_PATH};
use crate::session::Session;
use crate::storage::BrowserStorage;

/// The session flag as a signal, mirrored into localStorage on every change.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub logged_in: ReadSignal<bool>,
    pub set_logged_in: WriteSignal<bool>,
}

impl SessionContext {
    pub fn login(&self, token: &str) {
        Session::new(BrowserStorage).record_login(token);
        self.set_logged_in.set(true);
    }

    pub fn logout(&self) {
        Session::new(BrowserStorage).logout();
        self.set_logged_in.set(false);
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Read once at startup; afterwards the signal is the source of truth.
    let (logged_in, set_logged_in) = signal(Session::new(BrowserStorage).is_logged_in());
    provide_context(SessionContext {
        logged_in,
        set_logged_in,
    });

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route
                        path=path!("/signup")
                        view=|| view! {
                            <ProtectedRoute guard=Guard::GuestOnly>
                                <SignUpPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/check-form")
                        view=|| view! {
                            <ProtectedRoute guard=Guard::Protected>
                                <CheckInPage />
                            </ProtectedRoute>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=LOGIN_PATH class="link">"Back to sign in"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::redirect_for;

    #[test]
    fn test_context_login_and_logout_mirror_storage() {
        let owner = Owner::new();
        owner.set();

        let (logged_in, set_logged_in) = signal(Session::new(BrowserStorage).is_logged_in());
        let ctx = SessionContext {
            logged_in,
            set_logged_in,
        };
        assert!(!logged_in.get_untracked());
        assert_eq!(redirect_for(Guard::Protected, logged_in.get_untracked()), Some(LOGIN_PATH));

        ctx.login("tok");
        assert!(logged_in.get_untracked());
        assert!(Session::new(BrowserStorage).is_logged_in());
        assert_eq!(Session::new(BrowserStorage).token().as_deref(), Some("tok"));
        assert_eq!(redirect_for(Guard::Protected, logged_in.get_untracked()), None);

        ctx.logout();
        assert!(!logged_in.get_untracked());
        assert!(!Session::new(BrowserStorage).is_logged_in());
        assert!(Session::new(BrowserStorage).token().is_none());
        assert_eq!(redirect_for(Guard::Protected, logged_in.get_untracked()), Some(LOGIN_PATH));
    }
}
