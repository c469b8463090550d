// web_app/pages/standard_answers.rs - Standard answers list page
//
// Owns the fetch of the answer list, the table's search/page state and the
// page's popup slot. Every delete goes to the server and is followed by a
// full refetch; nothing is patched locally.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::listing::DEFAULT_PAGE_SIZE;
use crate::web_app::model::StandardAnswer;
use crate::web_app::popup::{delete_popup, load_error_message};
use crate::web_app::routes::NEW_ROUTE;
use crate::web_app::server_fns::{delete_standard_answer, list_standard_answers, server_error_text};

/// Raise the delete toast and refetch the list, whatever the outcome.
///
/// Returns the popup generation so the caller can schedule its expiry.
pub fn finish_delete(
    popup: PopupHandle,
    refresh: Callback<()>,
    id: i32,
    outcome: Result<(), String>,
) -> u64 {
    let generation = popup.replace(delete_popup(id, outcome));
    refresh.run(());
    generation
}

/// Standard answers admin page
#[component]
pub fn StandardAnswersPage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8">
            <AdminPageTitle title="Standard Answers">
                <ClipboardIcon />
            </AdminPageTitle>
            <StandardAnswersMain />
        </div>
    }
}

#[component]
fn StandardAnswersMain() -> impl IntoView {
    let popup = PopupHandle::new();

    // Bumping the trigger refetches the list
    let refresh_trigger = RwSignal::new(0_u32);
    let standard_answers = Resource::new(
        move || refresh_trigger.get(),
        |_| async move { list_standard_answers().await },
    );
    let refresh = Callback::new(move |()| refresh_trigger.update(|t| *t += 1));

    // Table state lives here so it survives refetches
    let query = RwSignal::new(String::new());
    let current_page = RwSignal::new(1_usize);

    let answers = Signal::derive(move || {
        standard_answers
            .get()
            .and_then(|r: Result<Vec<StandardAnswer>, ServerFnError>| r.ok())
            .unwrap_or_default()
    });

    let on_delete = Callback::new(move |id: i32| {
        spawn_local(async move {
            let outcome = delete_standard_answer(id)
                .await
                .map_err(|e| server_error_text(&e));
            let generation = finish_delete(popup, refresh, id, outcome);
            popup.expire_later(generation);
        });
    });

    view! {
        <div class="mb-8">
            <PopupHost popup=popup />

            <Transition fallback=move || view! { <Loading /> }>
                {move || match standard_answers.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(Err(e)) => view! {
                        <ErrorCallout
                            title="Error loading standard answers"
                            message=load_error_message(&server_error_text(&e))
                        />
                    }.into_any(),
                    Some(Ok(list)) => {
                        let is_empty = list.is_empty();
                        view! {
                            <p class="mb-2 text-gray-700">
                                "Here you can manage the standard answers that are used to answer \
                                 questions based on keywords or phrases."
                            </p>
                            {is_empty.then(|| view! {
                                <p class="mb-2 text-gray-700">"Add your first standard answer below!"</p>
                            })}
                            <div class="mb-2"></div>

                            <a class="flex mb-3" href=NEW_ROUTE>
                                <Button class="my-auto bg-green-600 hover:bg-green-700">
                                    "New Standard Answer"
                                </Button>
                            </a>

                            <StandardAnswersTable
                                answers=answers
                                query=query
                                current_page=current_page
                                page_size=DEFAULT_PAGE_SIZE
                                on_delete=on_delete
                            />
                        }.into_any()
                    }
                }}
            </Transition>
        </div>
    }
}
