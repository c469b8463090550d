// web_app/components/table.rs - Standard answers table
//
// - SearchInput: live keyword filter
// - AnswerRow: one record with edit link, markdown answer and delete control
// - Pagination: previous/next pager
// - StandardAnswersTable: composes the above over the fetched list

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::components::common::{EditIcon, SearchIcon, TrashIcon};
use crate::web_app::listing::{filter_standard_answers, page_slice, Pager};
use crate::web_app::markdown::render_markdown;
use crate::web_app::model::StandardAnswer;
use crate::web_app::routes::edit_route;

const COLUMNS: [&str; 4] = ["", "Keyword/Phrase", "Answer", ""];

/// Free-text filter. Every keystroke updates the query and returns to page 1.
#[component]
pub fn SearchInput(
    query: RwSignal<String>,
    current_page: RwSignal<usize>,
) -> impl IntoView {
    // Filtering is live, so Enter has nothing to submit
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
        }
    };

    view! {
        <div class="flex items-center w-full border-2 border-gray-200 rounded-lg px-4 py-2 focus-within:border-blue-500">
            <SearchIcon />
            <textarea
                autofocus=true
                class="flex-grow ml-2 h-6 bg-transparent outline-none placeholder-gray-400 overflow-hidden whitespace-normal resize-none"
                role="textarea"
                aria-multiline="true"
                placeholder="Find standard answers by keyword/phrase..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    current_page.set(1);
                }
                on:keydown=on_keydown
            ></textarea>
        </div>
    }
}

#[component]
pub fn AnswerRow(
    answer: StandardAnswer,
    on_delete: Callback<i32>,
) -> impl IntoView {
    let id = answer.id;
    let answer_html = render_markdown(&answer.answer);

    view! {
        <tr class="border-b border-gray-100 align-top">
            <td class="px-3 py-3 w-8">
                <a href=edit_route(id) class="text-gray-500 hover:text-blue-600" title="Edit">
                    <EditIcon />
                </a>
            </td>
            <td class="px-3 py-3 w-2/12 font-medium text-gray-900">{answer.keyword}</td>
            <td class="px-3 py-3 w-9/12 overflow-auto">
                <div class="prose max-w-none" inner_html=answer_html></div>
            </td>
            <td class="px-3 py-3 w-8">
                <div
                    class="cursor-pointer text-gray-500 hover:text-red-600"
                    title="Delete"
                    on:click=move |_| on_delete.run(id)
                >
                    <TrashIcon />
                </div>
            </td>
        </tr>
    }
}

/// Pager over a 1-indexed page signal
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    current_page: RwSignal<usize>,
    /// Number of items after filtering
    total_items: Signal<usize>,
    page_size: usize,
) -> impl IntoView {
    let pager = move || Pager::new(total_items.get(), page_size);

    let can_go_prev = move || pager().can_go_prev(current_page.get());
    let can_go_next = move || pager().can_go_next(current_page.get());

    let go_prev = move |_| {
        if can_go_prev() {
            current_page.update(|p| *p = p.saturating_sub(1).max(1));
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            current_page.update(|p| *p += 1);
        }
    };

    view! {
        <div class="mt-4 flex justify-center">
            <button
                type="button"
                class="px-3 py-2 border border-gray-300 rounded-l-md focus:outline-none \
                       focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || !can_go_prev()
                on:click=go_prev
            >
                "Previous"
            </button>

            <div class="px-3 py-2 border-t border-b border-gray-300">
                "Page " {move || current_page.get()} " of " {move || pager().total_pages()}
            </div>

            <button
                type="button"
                class="px-3 py-2 border border-gray-300 rounded-r-md focus:outline-none \
                       focus:ring-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed"
                disabled=move || !can_go_next()
                on:click=go_next
            >
                "Next"
            </button>
        </div>
    }
}

/// Filtered, paginated table of standard answers
#[component]
pub fn StandardAnswersTable(
    /// Last successfully fetched list
    answers: Signal<Vec<StandardAnswer>>,
    query: RwSignal<String>,
    current_page: RwSignal<usize>,
    page_size: usize,
    on_delete: Callback<i32>,
) -> impl IntoView {
    let filtered = Memo::new(move |_| {
        answers.with(|all| {
            query.with(|q| {
                filter_standard_answers(all, q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let visible = Memo::new(move |_| {
        filtered.with(|rows| page_slice(rows, current_page.get(), page_size).to_vec())
    });

    let total_items = Signal::derive(move || filtered.with(Vec::len));

    view! {
        <div class="justify-center py-2">
            <SearchInput query=query current_page=current_page />

            <div class="mx-auto">
                <table class="w-full mt-4 text-left text-sm">
                    <thead class="border-b border-gray-200">
                        <tr>
                            {COLUMNS
                                .into_iter()
                                .map(|name| view! {
                                    <th class="px-3 py-2 font-semibold text-gray-600">{name}</th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|answer| (answer.id, answer.keyword.clone(), answer.answer.clone())
                            children=move |answer| view! {
                                <AnswerRow answer=answer on_delete=on_delete />
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || Pager::new(total_items.get(), page_size).has_rows(current_page.get())>
                    <Pagination
                        current_page=current_page
                        total_items=total_items
                        page_size=page_size
                    />
                </Show>
            </div>
        </div>
    }
}
