use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(path = %path, "no route matched");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 96px 0; text-align: center;",
            h1 { style: "font-size: 48px; margin: 0 0 8px 0;", "404" }
            p { style: "font-size: 18px; color: #4b5563; margin: 0 0 8px 0;", "Oops! Page not found" }
            p { style: "font-size: 14px; color: #94a3b8; margin: 0 0 24px 0;", "{path}" }
            Link {
                to: Route::Home {},
                style: "color: #0284c7;",
                "Return to Home"
            }
        }
    }
}
