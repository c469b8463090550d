// web_app/app.rs - Root application component
//
// Meta tags, stylesheet and the admin routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{EditStandardAnswerPage, NewStandardAnswerPage, StandardAnswersPage};
use crate::web_app::routes::LIST_ROUTE;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Standard Answers" />
        <Meta name="description" content="Manage keyword-triggered standard answers" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/standard_answers.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=StandardAnswersPage />
                    <Route path=path!("/admin/standard-answer") view=StandardAnswersPage />
                    // Static segment wins over the :id parameter
                    <Route path=path!("/admin/standard-answer/new") view=NewStandardAnswerPage />
                    <Route path=path!("/admin/standard-answer/:id") view=EditStandardAnswerPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=LIST_ROUTE
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Standard Answers"
                </a>
            </div>
        </div>
    }
}
