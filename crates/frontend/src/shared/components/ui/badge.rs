use contracts::shared::record_list::{Chip, Tone};
use leptos::prelude::*;

/// Badge variant class for a tone
pub fn tone_variant(tone: Tone) -> &'static str {
    match tone {
        Tone::Brand => "primary",
        Tone::Success => "success",
        Tone::Warning => "warning",
        Tone::Danger => "error",
        Tone::Informative => "info",
        Tone::Subtle => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "info", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "info" => "badge--info",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Enum value chip: coloured badge with its icon
#[component]
pub fn ChipBadge(chip: Chip) -> impl IntoView {
    let variant = tone_variant(chip.presentation.tone).to_string();
    view! {
        <Badge variant=variant class=format!("chip chip--{}", chip.code)>
            <span class="chip__icon">{crate::shared::icons::icon(chip.presentation.icon)}</span>
            {chip.label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_its_own_variant() {
        let tones = [
            Tone::Brand,
            Tone::Success,
            Tone::Warning,
            Tone::Danger,
            Tone::Informative,
            Tone::Subtle,
        ];
        let mut variants: Vec<&str> = tones.iter().map(|t| tone_variant(*t)).collect();
        variants.sort();
        variants.dedup();
        assert_eq!(variants.len(), tones.len());
        assert_eq!(tone_variant(Tone::Subtle), "neutral");
    }
}
