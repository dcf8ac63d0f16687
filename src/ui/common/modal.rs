use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal component with consistent structure
///
/// Title and description are reactive so one modal instance can switch copy
/// while open.
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Optional description under the title
    #[prop(optional, into)]
    description: Option<Signal<String>>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
    /// Whether clicking backdrop closes modal
    #[prop(default = true)]
    close_on_backdrop: bool,
    /// Whether to show close button in header
    #[prop(default = true)]
    show_close_button: bool,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme transition-all duration-300"
                } else {
                    "fixed inset-0 z-50 flex items-center justify-center backdrop-theme opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                if close_on_backdrop {
                    #[cfg(not(feature = "ssr"))]
                    {
                        if let Some(element) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                            if element.class_list().contains("backdrop-theme") {
                                on_close.run(());
                            }
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            }
        >
            <div
                class=format!("w-full {} card theme-transition", max_width)
                role="dialog"
                aria-modal="true"
            >
                // Header
                <div class="card-header">
                    <div>
                        <h3 class="title-lg">{move || title.get()}</h3>
                        {description.map(|d| view! { <p class="subtitle">{move || d.get()}</p> })}
                    </div>
                    {show_close_button.then(|| view! {
                        <button
                            class="btn-icon"
                            on:click=move |_| on_close.run(())
                            title="Close"
                            aria-label="Close modal"
                        >
                            <Icon name=icons::X class="icon-standalone"/>
                        </button>
                    })}
                </div>

                // Content
                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
