// web_app/pages/editor.rs - Create / edit a standard answer
//
// `/admin/standard-answer/new` starts from an empty form,
// `/admin/standard-answer/:id` loads the answer first. Saving returns to the
// list; a failed save raises an error toast and keeps the form as typed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::web_app::components::*;
use crate::web_app::markdown::render_markdown;
use crate::web_app::model::{StandardAnswer, StandardAnswerCategory, StandardAnswerRequest};
use crate::web_app::popup::{load_error_message, save_failed_popup};
use crate::web_app::routes::LIST_ROUTE;
use crate::web_app::server_fns::{
    create_standard_answer, get_standard_answer, list_standard_answer_categories,
    server_error_text, update_standard_answer,
};

/// Add or remove a category id from the selection
pub fn toggle_category(selected: &mut Vec<i32>, category_id: i32) {
    if selected.contains(&category_id) {
        selected.retain(|id| *id != category_id);
    } else {
        selected.push(category_id);
    }
}

/// Claim the save slot. Returns false while an earlier save is still in flight.
pub fn begin_save(saving: RwSignal<bool>) -> bool {
    if saving.get_untracked() {
        return false;
    }
    saving.set(true);
    true
}

#[component]
pub fn NewStandardAnswerPage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-8">
            <AdminPageTitle title="New Standard Answer">
                <ClipboardIcon />
            </AdminPageTitle>
            <StandardAnswerEditor existing=None />
        </div>
    }
}

#[component]
pub fn EditStandardAnswerPage() -> impl IntoView {
    let params = use_params_map();
    let answer_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i32>().ok())
    });

    let standard_answer = Resource::new(
        move || answer_id.get(),
        |id| async move {
            match id {
                Some(id) => get_standard_answer(id).await,
                None => Err(ServerFnError::new("Invalid standard answer id")),
            }
        },
    );

    view! {
        <div class="container mx-auto px-4 py-8">
            <AdminPageTitle title="Edit Standard Answer">
                <ClipboardIcon />
            </AdminPageTitle>
            <Suspense fallback=move || view! { <Loading /> }>
                {move || match standard_answer.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(Err(e)) => view! {
                        <ErrorCallout
                            title="Error loading standard answer"
                            message=load_error_message(&server_error_text(&e))
                        />
                    }.into_any(),
                    Some(Ok(answer)) => view! {
                        <StandardAnswerEditor existing=Some(answer) />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Form shared by create and edit
#[component]
pub fn StandardAnswerEditor(existing: Option<StandardAnswer>) -> impl IntoView {
    let popup = PopupHandle::new();
    let navigate = use_navigate();

    let editing_id = existing.as_ref().map(|a| a.id);
    let keyword = RwSignal::new(existing.as_ref().map(|a| a.keyword.clone()).unwrap_or_default());
    let answer = RwSignal::new(existing.as_ref().map(|a| a.answer.clone()).unwrap_or_default());
    let selected = RwSignal::new(
        existing
            .as_ref()
            .map(|a| a.categories.iter().map(|c| c.id).collect::<Vec<_>>())
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    let categories = Resource::new(|| (), |_| async move { list_standard_answer_categories().await });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !begin_save(saving) {
            return;
        }
        let request = StandardAnswerRequest {
            keyword: keyword.get_untracked(),
            answer: answer.get_untracked(),
            categories: selected.get_untracked(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => update_standard_answer(id, request).await,
                None => create_standard_answer(request).await,
            };
            saving.set(false);
            match result {
                Ok(_) => navigate(LIST_ROUTE, Default::default()),
                Err(e) => popup.show(save_failed_popup(&server_error_text(&e))),
            }
        });
    };

    view! {
        <PopupHost popup=popup />
        <form on:submit=on_submit class="flex flex-col gap-4 max-w-3xl">
            <label class="flex flex-col gap-1">
                <span class="text-sm font-semibold text-gray-700">"Keyword or Phrase"</span>
                <input
                    type="text"
                    class="px-3 py-2 border border-gray-300 rounded-md focus:ring-2 focus:ring-blue-500 outline-none"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
            </label>

            <label class="flex flex-col gap-1">
                <span class="text-sm font-semibold text-gray-700">"Answer"</span>
                <textarea
                    rows="8"
                    class="px-3 py-2 border border-gray-300 rounded-md font-mono text-sm focus:ring-2 focus:ring-blue-500 outline-none"
                    prop:value=move || answer.get()
                    on:input=move |ev| answer.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div>
                <span class="text-sm font-semibold text-gray-700">"Preview"</span>
                <div
                    class="prose max-w-none border border-dashed border-gray-300 rounded-md p-3 mt-1"
                    inner_html=move || render_markdown(&answer.get())
                ></div>
            </div>

            <Suspense fallback=move || view! { <Loading message="Loading categories..." /> }>
                {move || {
                    categories.get().map(|result| match result {
                        Ok(list) => view! {
                            <CategoryChecklist categories=list selected=selected />
                        }.into_any(),
                        Err(e) => view! {
                            <ErrorCallout
                                title="Error loading categories"
                                message=server_error_text(&e)
                            />
                        }.into_any(),
                    })
                }}
            </Suspense>

            <div>
                <Button button_type="submit" disabled=saving class="bg-blue-600 hover:bg-blue-700">
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
fn CategoryChecklist(
    categories: Vec<StandardAnswerCategory>,
    selected: RwSignal<Vec<i32>>,
) -> impl IntoView {
    if categories.is_empty() {
        return view! {
            <p class="text-sm text-gray-500">"No categories defined yet."</p>
        }
        .into_any();
    }

    view! {
        <fieldset class="flex flex-col gap-2">
            <legend class="text-sm font-semibold text-gray-700 mb-1">"Categories"</legend>
            {categories
                .into_iter()
                .map(|category| {
                    let id = category.id;
                    view! {
                        <label class="flex items-center gap-3 cursor-pointer">
                            <input
                                type="checkbox"
                                class="rounded border-gray-300 text-blue-600 h-4 w-4"
                                prop:checked=move || selected.with(|ids| ids.contains(&id))
                                on:change=move |_| selected.update(|ids| toggle_category(ids, id))
                            />
                            <span class="text-gray-700">{category.name}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut selected = vec![1, 3];
        toggle_category(&mut selected, 2);
        assert_eq!(selected, vec![1, 3, 2]);
        toggle_category(&mut selected, 3);
        assert_eq!(selected, vec![1, 2]);
    }

    #[test]
    fn test_second_submit_while_saving_is_ignored() {
        let _owner = Owner::new();
        _owner.set();
        let saving = RwSignal::new(false);

        assert!(begin_save(saving));
        assert!(saving.get_untracked());
        assert!(!begin_save(saving));

        // Save finished, the form can submit again
        saving.set(false);
        assert!(begin_save(saving));
    }
}
