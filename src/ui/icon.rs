use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under /icons, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const X: &str = "x";
    pub const LOG_IN: &str = "log-in";
    pub const LOCK: &str = "lock";
    pub const COMPASS: &str = "compass";
}
