use super::actions::RowActions;
use super::cell::render_cell;
use contracts::shared::record_list::{Column, ItemView, RecordAction};
use leptos::prelude::*;
use thaw::*;

/// Row per record; the leading column holds the headline.
#[component]
pub fn RecordTable(
    page_key: &'static str,
    headline_title: &'static str,
    columns: Vec<Column>,
    rows: Vec<ItemView>,
    row_actions: &'static [RecordAction],
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>{headline_title}</TableHeaderCell>
                        {columns
                            .iter()
                            .map(|c| {
                                let title = c.title;
                                view! {
                                    <TableHeaderCell resizable=true min_width=100.0>{title}</TableHeaderCell>
                                }
                            })
                            .collect_view()}
                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|item| {
                            let row_id = item.id.clone();
                            let record_id = item.id.clone();
                            let title = item.headline.title.clone();
                            let subtitle = item.headline.subtitle.clone();
                            let cells = item
                                .cells
                                .iter()
                                .map(|cell| {
                                    let rendered = render_cell(cell);
                                    view! { <TableCell>{rendered}</TableCell> }
                                })
                                .collect_view();
                            view! {
                                <TableRow attr:data-record-id=row_id>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <div class="record-table__title">{title}</div>
                                            {subtitle.map(|s| view! {
                                                <div class="record-table__subtitle">{s}</div>
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    {cells}
                                    <TableCell>
                                        <RowActions page_key=page_key record_id=record_id actions=row_actions />
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
