use dioxus::prelude::*;

use crate::domain::entities::chemical::NfpaRating;
use crate::ui::style::{badge_style, BadgeVariant};

pub fn health_variant(score: u8) -> BadgeVariant {
    if score > 1 {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Default
    }
}

pub fn flammability_variant(score: u8) -> BadgeVariant {
    match score {
        0 => BadgeVariant::Default,
        1 | 2 => BadgeVariant::Secondary,
        _ => BadgeVariant::Destructive,
    }
}

pub fn reactivity_variant(score: u8) -> BadgeVariant {
    if score > 0 {
        BadgeVariant::Destructive
    } else {
        BadgeVariant::Default
    }
}

#[component]
pub fn NfpaBadges(rating: NfpaRating) -> Element {
    let health = badge_style(health_variant(rating.health));
    let flammability = badge_style(flammability_variant(rating.flammability));
    let reactivity = badge_style(reactivity_variant(rating.reactivity));
    let outline = badge_style(BadgeVariant::Outline);
    let NfpaRating {
        health: health_score,
        flammability: flammability_score,
        reactivity: reactivity_score,
        special,
    } = rating;

    rsx! {
        div {
            h3 { style: "font-size: 18px; font-weight: 600; margin: 0 0 8px 0;", "NFPA 704 Diamond" }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: health, "Health: {health_score}" }
                span { style: flammability, "Flammability: {flammability_score}" }
                span { style: reactivity, "Reactivity: {reactivity_score}" }
                if let Some(special) = special {
                    span { style: outline, "Special: {special}" }
                }
            }
        }
    }
}
