//! Main application component

use leptos::*;
use leptos_router::*;

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Landing/>
                </Routes>
            </main>
        </Router>
    }
}
