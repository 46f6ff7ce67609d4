use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::style::{footer_style, header_style, main_style, root_container_style};
use crate::{copyright_notice, current_year, APP_NAME};

const NAV_LINK_STYLE: &str =
    "padding: 8px 12px; border-radius: 6px; color: #0f172a; text-decoration: none; font-size: 14px; font-weight: 500;";

#[component]
pub fn SiteLayout() -> Element {
    let notice = copyright_notice(current_year());

    rsx! {
        div {
            style: root_container_style(),
            header {
                style: header_style(),
                nav {
                    style: "display: flex; gap: 4px; align-items: center;",
                    Link { to: Route::Home {}, style: "{NAV_LINK_STYLE} font-weight: 700;", "{APP_NAME}" }
                    Link { to: Route::ChemicalListing { search: String::new() }, style: NAV_LINK_STYLE, "Browse Chemicals" }
                    Link { to: Route::PeriodicTable {}, style: NAV_LINK_STYLE, "Periodic Table" }
                    Link { to: Route::GlossaryInfo {}, style: NAV_LINK_STYLE, "Glossary & Info" }
                }
            }
            main {
                style: main_style(),
                Outlet::<Route> {}
            }
            footer { style: footer_style(), "{notice}" }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub to: Option<Route>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, to: Route) -> Self {
        Self {
            label: label.into(),
            to: Some(to),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: None,
        }
    }
}

#[component]
pub fn Breadcrumb(crumbs: Vec<Crumb>) -> Element {
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        nav {
            style: "display: flex; gap: 8px; align-items: center; font-size: 14px; color: #64748b; margin-bottom: 24px;",
            {crumbs.into_iter().enumerate().map(|(idx, crumb)| {
                let label = crumb.label;
                rsx!(
                    span {
                        key: "{idx}",
                        style: "display: inline-flex; gap: 8px; align-items: center;",
                        {match crumb.to {
                            Some(to) => rsx! { Link { to, style: "color: #64748b;", "{label}" } },
                            None => rsx! { span { style: "color: #0f172a;", "{label}" } },
                        }}
                        if idx < last {
                            span { "›" }
                        }
                    }
                )
            })}
        }
    }
}
