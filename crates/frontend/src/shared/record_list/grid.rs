use super::actions::RowActions;
use super::cell::render_cell;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use contracts::shared::record_list::{Column, ItemView, RecordAction};
use leptos::prelude::*;

const STAGGER_STEP_MS: u32 = 40;

/// Card per record; every cell is labelled with its column title.
#[component]
pub fn RecordGrid(
    page_key: &'static str,
    columns: Vec<Column>,
    cards: Vec<ItemView>,
    row_actions: &'static [RecordAction],
) -> impl IntoView {
    view! {
        <div class="record-grid">
            {cards
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let fields = columns
                        .iter()
                        .zip(item.cells.iter())
                        .map(|(column, cell)| {
                            view! {
                                <div class=format!("record-card__field record-card__field--{}", column.key)>
                                    <dt>{column.title}</dt>
                                    <dd>{render_cell(cell)}</dd>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <CardAnimated class="record-card" delay_ms=stagger_delay(index, STAGGER_STEP_MS)>
                            <div class="record-card__header" data-record-id=item.id.clone()>
                                <div class="record-card__title">{item.headline.title.clone()}</div>
                                {item.headline.subtitle.clone().map(|s| view! {
                                    <div class="record-card__subtitle">{s}</div>
                                })}
                            </div>
                            <dl class="record-card__fields">{fields}</dl>
                            <div class="record-card__footer">
                                <span class="record-card__id">{item.id.clone()}</span>
                                <RowActions page_key=page_key record_id=item.id.clone() actions=row_actions />
                            </div>
                        </CardAnimated>
                    }
                })
                .collect_view()}
        </div>
    }
}
