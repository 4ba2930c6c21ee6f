use chrono::NaiveDate;

use crate::model::Selection;

/// the dashboard controls for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardRequest {
    pub date: NaiveDate,
    pub hour: u8,
    pub selection: Selection,
    pub show_overlay: bool,
}

impl DashboardRequest {
    pub fn new(date: NaiveDate, hour: u8) -> DashboardRequest {
        DashboardRequest {
            date,
            hour,
            selection: Selection::All,
            show_overlay: false,
        }
    }

    pub fn with_selection(self, selection: Selection) -> DashboardRequest {
        DashboardRequest { selection, ..self }
    }

    pub fn with_overlay(self, show_overlay: bool) -> DashboardRequest {
        DashboardRequest {
            show_overlay,
            ..self
        }
    }
}
