use leptos::prelude::*;
use standard_answers::web_app::components::common::*;
use standard_answers::web_app::components::popup::{PopupHandle, PopupHost, PopupHostProps};
use standard_answers::web_app::popup::{delete_popup, PopupKind, PopupSpec};

// Helper to create a runtime for tests
fn with_runtime<F>(f: F)
where
    F: FnOnce(),
{
    let _owner = Owner::new();
    _owner.set();
    f();
}

#[test]
fn test_loading_component_instantiation() {
    with_runtime(|| {
        let _ = Loading(LoadingProps {
            message: "Loading...",
        });

        let _ = Loading(LoadingProps {
            message: "Loading categories...",
        });
    });
}

#[test]
fn test_error_callout_instantiation() {
    with_runtime(|| {
        let _ = ErrorCallout(ErrorCalloutProps {
            title: "Error loading standard answers",
            message: "db down".to_string(),
        });
    });
}

#[test]
fn test_admin_page_title_instantiation() {
    with_runtime(|| {
        let _ = AdminPageTitle(AdminPageTitleProps {
            title: "Standard Answers",
            children: Box::new(move || view! { <ClipboardIcon /> }.into_any()),
        });
    });
}

#[test]
fn test_icons_instantiation() {
    with_runtime(|| {
        let _ = ClipboardIcon();
        let _ = EditIcon();
        let _ = TrashIcon();
        let _ = SearchIcon();
    });
}

#[test]
fn test_popup_host_instantiation() {
    with_runtime(|| {
        let popup = PopupHandle::new();
        popup.replace(PopupSpec::success("Standard answer 1 deleted"));
        let _ = PopupHost(PopupHostProps { popup });
    });
}

#[test]
fn test_newer_popup_replaces_older() {
    with_runtime(|| {
        let popup = PopupHandle::new();

        let first = popup.replace(delete_popup(1, Ok(())));
        popup.replace(delete_popup(2, Err("Not found".to_string())));

        // The first toast's timer fires after the second took the slot
        popup.expire(first);
        let current = popup.current().expect("second popup should still show");
        assert_eq!(current.kind, PopupKind::Error);
        assert_eq!(current.message, "Failed to delete standard answer - Not found");

        popup.clear();
        assert!(popup.current().is_none());
    });
}

#[test]
fn test_delete_refetches_on_success_and_failure() {
    use standard_answers::web_app::pages::standard_answers::finish_delete;

    with_runtime(|| {
        let popup = PopupHandle::new();
        let trigger = RwSignal::new(0_u32);
        let refresh = Callback::new(move |()| trigger.update(|t| *t += 1));

        finish_delete(popup, refresh, 3, Ok(()));
        assert_eq!(trigger.get_untracked(), 1);
        assert_eq!(popup.current().map(|p| p.kind), Some(PopupKind::Success));

        finish_delete(popup, refresh, 3, Err("not found".to_string()));
        assert_eq!(trigger.get_untracked(), 2);
        let toast = popup.current().expect("error toast should be showing");
        assert_eq!(toast.kind, PopupKind::Error);
        assert!(toast.message.contains("not found"));
    });
}
