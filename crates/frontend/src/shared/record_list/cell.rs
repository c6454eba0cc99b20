use crate::shared::components::ui::{Badge, ChipBadge};
use crate::shared::format::cell_text;
use crate::shared::icons::icon;
use contracts::shared::record_list::Cell;
use leptos::prelude::*;

/// Progress bar width, clamped to 0..=100
pub fn progress_style(percent: u8) -> String {
    format!("width: {}%;", percent.min(100))
}

/// Renders one cell the same way in cards and table rows.
pub fn render_cell(cell: &Cell) -> AnyView {
    match cell {
        Cell::Chip(chip) => view! { <ChipBadge chip=chip.clone() /> }.into_any(),
        Cell::Progress(p) => {
            let p = *p;
            view! {
                <div class="progress" title=format!("{}%", p)>
                    <div class="progress__track">
                        <div class="progress__fill" style=progress_style(p)></div>
                    </div>
                    <span class="progress__label">{format!("{}%", p)}</span>
                </div>
            }
            .into_any()
        }
        Cell::Flag(on) => {
            let (name, class) = if *on {
                ("check", "flag flag--on")
            } else {
                ("x", "flag flag--off")
            };
            view! { <span class=class>{icon(name)}{cell_text(cell)}</span> }.into_any()
        }
        Cell::Tags(tags) if !tags.is_empty() => view! {
            <span class="tags">
                {tags
                    .iter()
                    .map(|t| {
                        let t = t.clone();
                        view! { <Badge>{t}</Badge> }
                    })
                    .collect_view()}
            </span>
        }
        .into_any(),
        Cell::Money(_) => {
            view! { <span class="cell cell--money">{cell_text(cell)}</span> }.into_any()
        }
        Cell::Empty | Cell::Tags(_) => {
            view! { <span class="cell cell--empty">{cell_text(cell)}</span> }.into_any()
        }
        Cell::Text(_) | Cell::Date(_) => view! { <span class="cell">{cell_text(cell)}</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_style_clamps() {
        assert_eq!(progress_style(40), "width: 40%;");
        assert_eq!(progress_style(250), "width: 100%;");
    }
}
