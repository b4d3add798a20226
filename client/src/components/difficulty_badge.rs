//! Colored difficulty label used by the table, grid, and detail views.

#[cfg(test)]
#[path = "difficulty_badge_test.rs"]
mod difficulty_badge_test;

use leptos::prelude::*;
use problemset::Difficulty;

/// Class attribute for a difficulty label; unknown labels get no color class.
pub fn difficulty_class(difficulty: &Difficulty) -> String {
    match difficulty.css_class() {
        Some(class) => format!("difficulty {class}"),
        None => "difficulty".to_owned(),
    }
}

#[component]
pub fn DifficultyBadge(difficulty: Difficulty) -> impl IntoView {
    view! { <span class=difficulty_class(&difficulty)>{difficulty.label().to_owned()}</span> }
}
