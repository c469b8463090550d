// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the list page and the editor.

use leptos::prelude::*;

/// Loading indicator
#[component]
pub fn Loading(
    /// Optional message to display below the dots
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="flex gap-2">
                <span class="h-3 w-3 rounded-full bg-gray-400 animate-bounce"></span>
                <span class="h-3 w-3 rounded-full bg-gray-400 animate-bounce [animation-delay:150ms]"></span>
                <span class="h-3 w-3 rounded-full bg-gray-400 animate-bounce [animation-delay:300ms]"></span>
            </div>
            <span class="mt-4 text-gray-500 font-medium">{message}</span>
        </div>
    }
}

/// Blocking error panel with a title and detail message
#[component]
pub fn ErrorCallout(
    title: &'static str,
    message: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">{title}</h3>
                <p class="text-red-600 text-sm">{message}</p>
            </div>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-3 py-1.5 text-sm text-white rounded-md transition-colors \
                      disabled:bg-gray-400 disabled:cursor-not-allowed font-medium shadow-sm";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Page heading with an icon, as used across the admin console
#[component]
pub fn AdminPageTitle(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 border-b border-gray-200 pb-4 mb-6">
            <span class="text-gray-700">{children()}</span>
            <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
        </div>
    }
}

#[component]
pub fn ClipboardIcon() -> impl IntoView {
    view! {
        <svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2"></path>
        </svg>
    }
}

#[component]
pub fn EditIcon() -> impl IntoView {
    view! {
        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"></path>
        </svg>
    }
}

#[component]
pub fn TrashIcon() -> impl IntoView {
    view! {
        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"></path>
        </svg>
    }
}

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! {
        <svg class="w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"></path>
        </svg>
    }
}
