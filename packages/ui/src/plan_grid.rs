//! # Plan grid
//!
//! Table of every plan in the snapshot, one row per plan. Columns are fixed
//! ([`COLUMNS`]); each is sortable by clicking its header (ascending, then
//! descending, then unsorted again) and none is resizable. Column widths are
//! proportional to their flex weight.

use std::cmp::Ordering;

use api::TravelPlan;
use dioxus::prelude::*;

/// Pixel height of the header and of every row.
pub const ROW_HEIGHT_PX: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Id,
    Title,
    StartDate,
    EndDate,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellDataType {
    Number,
    Text,
    DateString,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDef {
    pub column: Column,
    pub field: &'static str,
    pub header: &'static str,
    pub flex: f32,
    pub data_type: CellDataType,
    pub sortable: bool,
    pub resizable: bool,
}

pub static COLUMNS: [ColumnDef; 5] = [
    ColumnDef {
        column: Column::Id,
        field: "id",
        header: "Id",
        flex: 0.5,
        data_type: CellDataType::Number,
        sortable: true,
        resizable: false,
    },
    ColumnDef {
        column: Column::Title,
        field: "title",
        header: "Title",
        flex: 2.0,
        data_type: CellDataType::Text,
        sortable: true,
        resizable: false,
    },
    ColumnDef {
        column: Column::StartDate,
        field: "start_date",
        header: "Start Date",
        flex: 1.0,
        data_type: CellDataType::DateString,
        sortable: true,
        resizable: false,
    },
    ColumnDef {
        column: Column::EndDate,
        field: "end_date",
        header: "End Date",
        flex: 1.0,
        data_type: CellDataType::DateString,
        sortable: true,
        resizable: false,
    },
    ColumnDef {
        column: Column::Description,
        field: "description",
        header: "Description",
        flex: 2.0,
        data_type: CellDataType::Text,
        sortable: true,
        resizable: false,
    },
];

impl Column {
    /// Display text of this column's cell for `plan`. Missing dates render empty.
    pub fn cell(self, plan: &TravelPlan) -> String {
        match self {
            Column::Id => plan.id.to_string(),
            Column::Title => plan.title.clone(),
            Column::StartDate => plan.start_date.map(|d| d.to_string()).unwrap_or_default(),
            Column::EndDate => plan.end_date.map(|d| d.to_string()).unwrap_or_default(),
            Column::Description => plan.description.clone(),
        }
    }

    /// Missing dates sort before present ones.
    fn compare(self, a: &TravelPlan, b: &TravelPlan) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::Title => a.title.cmp(&b.title),
            Column::StartDate => a.start_date.cmp(&b.start_date),
            Column::EndDate => a.end_date.cmp(&b.end_date),
            Column::Description => a.description.cmp(&b.description),
        }
    }
}

impl ColumnDef {
    /// Width as a percentage of the table, from the flex weights.
    pub fn width_percent(&self) -> f32 {
        let total: f32 = COLUMNS.iter().map(|c| c.flex).sum();
        self.flex / total * 100.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub descending: bool,
}

/// Sort state after clicking `column`'s header: ascending, descending, then
/// back to server order.
pub fn next_sort(current: Option<SortOrder>, column: Column) -> Option<SortOrder> {
    match current {
        Some(order) if order.column == column && order.descending => None,
        Some(order) if order.column == column => Some(SortOrder {
            column,
            descending: true,
        }),
        _ => Some(SortOrder {
            column,
            descending: false,
        }),
    }
}

fn sort_indicator(order: Option<SortOrder>, column: Column) -> &'static str {
    match order {
        Some(order) if order.column == column && order.descending => " ▼",
        Some(order) if order.column == column => " ▲",
        _ => "",
    }
}

/// Rows in display order. Unsorted keeps server order; sorting is stable.
pub fn sorted_rows(plans: &[TravelPlan], order: Option<SortOrder>) -> Vec<TravelPlan> {
    let mut rows = plans.to_vec();
    if let Some(order) = order {
        rows.sort_by(|a, b| {
            let ordering = order.column.compare(a, b);
            if order.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
    rows
}

#[component]
pub fn PlanGrid(plans: Vec<TravelPlan>) -> Element {
    let mut sort = use_signal(|| Option::<SortOrder>::None);
    let rows = sorted_rows(&plans, sort());

    rsx! {
        table {
            class: "plan-grid",
            thead {
                tr {
                    style: "height: {ROW_HEIGHT_PX}px",
                    for def in COLUMNS.iter() {
                        th {
                            key: "{def.field}",
                            style: "width: {def.width_percent()}%",
                            class: if def.sortable { "sortable" } else { "" },
                            onclick: move |_| {
                                if def.sortable {
                                    sort.set(next_sort(sort(), def.column));
                                }
                            },
                            "{def.header}"
                            span { class: "sort-indicator", "{sort_indicator(sort(), def.column)}" }
                        }
                    }
                }
            }
            tbody {
                for plan in rows {
                    tr {
                        key: "{plan.id}",
                        style: "height: {ROW_HEIGHT_PX}px",
                        for def in COLUMNS.iter() {
                            td {
                                key: "{def.field}",
                                class: if def.data_type == CellDataType::Number { "cell-number" } else { "" },
                                "{def.column.cell(&plan)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
