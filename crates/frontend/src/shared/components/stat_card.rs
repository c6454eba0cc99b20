use crate::shared::components::ui::tone_variant;
use crate::shared::format::format_stat;
use crate::shared::icons::icon;
use contracts::shared::record_list::{SummaryStat, Tone};
use leptos::prelude::*;

fn tone_class(tone: Tone) -> String {
    format!("stat-card stat-card--{}", tone_variant(tone))
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    tone: Tone,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=tone_class(tone)>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Row of summary counters above a list
#[component]
pub fn SummaryCards(stats: Vec<SummaryStat>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            {stats
                .into_iter()
                .map(|s| {
                    view! {
                        <StatCard
                            label=s.label
                            icon_name=s.icon
                            value=format_stat(&s.value)
                            tone=s.tone
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class(Tone::Danger), "stat-card stat-card--error");
        assert_eq!(tone_class(Tone::Brand), "stat-card stat-card--primary");
    }
}
