use super::code_enum::CodeEnum;
use super::presentation::{Presentable, Presentation};
use super::store::ListRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// View mode
// ============================================================================

/// Layout of a list page. Both modes show the same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Table,
            ViewMode::Table => ViewMode::Grid,
        }
    }
}

impl CodeEnum for ViewMode {
    fn all() -> &'static [Self] {
        &[ViewMode::Grid, ViewMode::Table]
    }

    fn code(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Table => "table",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Table => "Table",
        }
    }
}

// ============================================================================
// Cells
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub title: &'static str,
}

impl Column {
    pub const fn new(key: &'static str, title: &'static str) -> Self {
        Self { key, title }
    }
}

/// Enum value rendered as a coloured chip.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub code: &'static str,
    pub label: &'static str,
    pub presentation: Presentation,
}

impl Chip {
    pub fn of<E: Presentable>(value: &E) -> Self {
        Self {
            code: value.code(),
            label: value.display_name(),
            presentation: value.presentation(),
        }
    }
}

/// One displayed value. Formatting (currency, dates) is left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Chip(Chip),
    Money(f64),
    Date(NaiveDate),
    /// Percentage 0..=100
    Progress(u8),
    Flag(bool),
    Tags(Vec<String>),
    Empty,
}

impl Cell {
    pub fn text(value: &str) -> Self {
        Cell::Text(value.to_string())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(Cell::text).unwrap_or(Cell::Empty)
    }

    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        value.map(Cell::Date).unwrap_or(Cell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Headline {
    pub fn new(title: &str, subtitle: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            subtitle,
        }
    }
}

/// Record that knows how to lay itself out as a card or a table row.
///
/// `cells()` must return exactly one cell per entry of `columns()`.
pub trait Displayable: ListRecord {
    /// Header of the leading table column holding the headline
    fn headline_title() -> &'static str;

    fn columns() -> Vec<Column>;

    fn headline(&self) -> Headline;

    fn cells(&self) -> Vec<Cell>;
}

// ============================================================================
// List view
// ============================================================================

/// Display data of a single record, shared by both layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: String,
    pub headline: Headline,
    pub cells: Vec<Cell>,
}

/// Display data of a filtered sequence, built once and independent of the
/// view mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub headline_title: &'static str,
    pub columns: Vec<Column>,
    pub items: Vec<ItemView>,
}

/// A list view arranged for one mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout<'a> {
    /// Cards pair each cell with its column title
    Grid(Vec<&'a ItemView>),
    Table {
        headline_title: &'static str,
        columns: &'a [Column],
        rows: Vec<&'a ItemView>,
    },
}

impl<'a> Layout<'a> {
    pub fn ids(&self) -> Vec<&'a str> {
        let items = match self {
            Layout::Grid(cards) => cards,
            Layout::Table { rows, .. } => rows,
        };
        items.iter().map(|i| i.id.as_str()).collect()
    }
}

impl ListView {
    pub fn build<R: Displayable>(records: &[&R]) -> Self {
        let items = records
            .iter()
            .map(|r| ItemView {
                id: r.id().to_string(),
                headline: r.headline(),
                cells: r.cells(),
            })
            .collect();
        Self {
            headline_title: R::headline_title(),
            columns: R::columns(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }

    /// Arrange the items for `mode` without copying or re-filtering them.
    pub fn layout(&self, mode: ViewMode) -> Layout<'_> {
        let items: Vec<&ItemView> = self.items.iter().collect();
        match mode {
            ViewMode::Grid => Layout::Grid(items),
            ViewMode::Table => Layout::Table {
                headline_title: self.headline_title,
                columns: &self.columns,
                rows: items,
            },
        }
    }
}

impl ItemView {
    /// Cells paired with their column, as shown on a card.
    pub fn labelled<'a>(&'a self, columns: &'a [Column]) -> Vec<(&'a Column, &'a Cell)> {
        columns.iter().zip(self.cells.iter()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::filter::FilterState;
    use crate::shared::record_list::store::RecordStore;
    use crate::shared::record_list::test_support::{sample, Task};

    #[test]
    fn test_view_mode_toggle_and_codes() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::Table);
        assert_eq!(ViewMode::Table.toggled().toggled(), ViewMode::Table);
        assert_eq!(ViewMode::from_code("table"), Some(ViewMode::Table));
        assert_eq!(ViewMode::from_code("list"), None);
        assert_eq!(serde_json::to_string(&ViewMode::Grid).unwrap(), "\"grid\"");
    }

    #[test]
    fn test_layouts_are_content_equivalent() {
        let store = RecordStore::new(sample()).unwrap();
        let state = FilterState::new().with_search("e");
        let filtered = store.filter(&state);
        let view = ListView::build::<Task>(&filtered);

        let grid = view.layout(ViewMode::Grid);
        let table = view.layout(ViewMode::Table);
        assert_eq!(grid.ids(), table.ids());
        assert_eq!(grid.ids(), view.ids());
        assert_eq!(
            view.ids(),
            filtered.iter().map(|t| t.id.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_toggling_does_not_change_items() {
        let records = sample();
        let refs: Vec<&Task> = records.iter().collect();
        let view = ListView::build::<Task>(&refs);
        let before = view.clone();

        let mut mode = ViewMode::Grid;
        for _ in 0..3 {
            mode = mode.toggled();
            let _ = view.layout(mode);
        }
        assert_eq!(view, before);
    }

    #[test]
    fn test_table_layout_carries_columns() {
        let records = sample();
        let refs: Vec<&Task> = records.iter().collect();
        let view = ListView::build::<Task>(&refs);
        match view.layout(ViewMode::Table) {
            Layout::Table {
                headline_title,
                columns,
                rows,
            } => {
                assert_eq!(headline_title, "Task");
                assert_eq!(columns.len(), 3);
                assert!(rows.iter().all(|r| r.cells.len() == columns.len()));
            }
            Layout::Grid(_) => panic!("expected table layout"),
        }
    }

    #[test]
    fn test_card_cells_are_labelled() {
        let records = sample();
        let refs: Vec<&Task> = records.iter().take(1).collect();
        let view = ListView::build::<Task>(&refs);
        let labelled = view.items[0].labelled(&view.columns);
        assert_eq!(labelled[0].0.title, "Department");
        assert_eq!(labelled[0].1, &Cell::text("Engineering"));
        match labelled[1].1 {
            Cell::Chip(chip) => assert_eq!(chip.code, "done"),
            other => panic!("unexpected cell {:?}", other),
        }
    }

    #[test]
    fn test_empty_view() {
        let view = ListView::build::<Task>(&[]);
        assert!(view.is_empty());
        assert!(view.layout(ViewMode::Table).ids().is_empty());
    }
}
