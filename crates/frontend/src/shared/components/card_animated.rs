//! CardAnimated: a thaw `Card` that fades in with the `card-appear` keyframes.
//!
//! Cards of one list pass growing `delay_ms` values for a stagger effect:
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=40>  // card 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Upper bound of the stagger delay so long lists do not appear sluggish
const MAX_DELAY_MS: u32 = 400;

/// Stagger delay of the card at `index`
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    let delay = (index as u32).saturating_mul(step_ms);
    delay.min(MAX_DELAY_MS)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation
    #[prop(optional, into)]
    style: String,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0, 40), 0);
        assert_eq!(stagger_delay(3, 40), 120);
        assert_eq!(stagger_delay(500, 40), MAX_DELAY_MS);
    }
}
