use serde::Serialize;

use super::{html, DeckLayer, OutputFormat, ViewState};
use crate::{
    config::DashboardConfiguration,
    model::TrafficError,
    pipeline::DashboardView,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
struct MapView {
    #[serde(rename = "@@type")]
    class: &'static str,
    controller: bool,
}

/// a complete deck.gl map: layers, camera and basemap.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckDocument {
    pub initial_view_state: ViewState,
    pub layers: Vec<DeckLayer>,
    pub map_provider: String,
    pub map_style: String,
    pub tooltip: Tooltip,
    pub width: u32,
    pub height: u32,
    views: Vec<MapView>,
}

impl DeckDocument {
    /// lays out the layers of a view: the traffic hexagons always, then the
    /// home hexagons and arcs when the view carries an overlay.
    pub fn from_view(view: &DashboardView, conf: &DashboardConfiguration) -> DeckDocument {
        let mut layers = vec![DeckLayer::traffic(&view.selected_cells)];
        if let Some(overlay) = &view.overlay {
            layers.push(DeckLayer::home(&overlay.home_cells, conf.home_fill_color));
            layers.push(DeckLayer::arcs(
                &overlay.arcs,
                conf.arc_source_color,
                conf.arc_target_color,
                conf.arc_width,
            ));
        }
        DeckDocument {
            initial_view_state: ViewState::new(&view.center, &conf.view),
            layers,
            map_provider: conf.map_provider.clone(),
            map_style: conf.map_style.clone(),
            tooltip: Tooltip {
                text: conf.tooltip.clone(),
            },
            width: conf.width,
            height: conf.height,
            views: vec![MapView {
                class: "MapView",
                controller: true,
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, TrafficError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn encode(&self, format: &OutputFormat) -> Result<String, TrafficError> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Html => html::to_html(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellId, Selection};
    use crate::pipeline::{
        run_dashboard, CellGeocoder, ColorScale, DashboardOutcome, DashboardRequest,
        H3Geocoder, TrafficDataset,
    };
    use crate::model::TrafficRecord;
    use chrono::NaiveDate;
    use geo::Point;
    use std::path::Path;

    /// places every cell at the same point, for datasets with made-up ids.
    struct FixedGeocoder;

    impl CellGeocoder for FixedGeocoder {
        fn centroid(&self, _cell: &CellId) -> Result<Point<f64>, TrafficError> {
            Ok(Point::new(106.8, -6.2))
        }
    }

    fn render(
        dataset: &TrafficDataset,
        request: &DashboardRequest,
        geocoder: &dyn CellGeocoder,
    ) -> DeckDocument {
        let outcome = run_dashboard(dataset, request, &ColorScale::default(), geocoder).unwrap();
        match outcome {
            DashboardOutcome::Ready(view) => {
                DeckDocument::from_view(&view, &DashboardConfiguration::default())
            }
            other => panic!("expected a view, found {other:?}"),
        }
    }

    fn single_record_dataset() -> TrafficDataset {
        let record = TrafficRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hour: 18,
            traffic_h3_8: CellId::from("A"),
            home_h3_8: CellId::from("H"),
            count_visitor: 10,
            origin_lat: -6.1,
            origin_lon: 106.7,
            dest_lat: -6.2,
            dest_lon: 106.8,
        };
        TrafficDataset::new("inline", vec![record])
    }

    #[test]
    fn test_single_selection_without_overlay_has_one_layer() {
        let dataset = single_record_dataset();
        let request = DashboardRequest::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 18)
            .with_selection(Selection::One(CellId::from("A")));
        let doc = render(&dataset, &request, &FixedGeocoder);
        assert_eq!(doc.layers.len(), 1);
        assert_eq!(doc.layers[0].id(), "traffic");
    }

    #[test]
    fn test_single_selection_with_overlay_has_three_layers() {
        let dataset = single_record_dataset();
        let request = DashboardRequest::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 18)
            .with_selection(Selection::One(CellId::from("A")))
            .with_overlay(true);
        let doc = render(&dataset, &request, &FixedGeocoder);
        let ids = doc.layers.iter().map(|l| l.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["traffic", "home", "home-traffic-arc"]);
    }

    #[test]
    fn test_overlay_flag_ignored_for_all_cells() {
        let dataset = TrafficDataset::from_csv(Path::new("src/test/traffic_sample.csv")).unwrap();
        let request = DashboardRequest::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), 18)
            .with_overlay(true);
        let doc = render(&dataset, &request, &H3Geocoder);
        assert_eq!(doc.layers.len(), 1);
    }

    #[test]
    fn test_document_json() {
        let dataset = single_record_dataset();
        let request = DashboardRequest::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 18);
        let doc = render(&dataset, &request, &FixedGeocoder);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(
            value["initialViewState"],
            serde_json::json!({
                "latitude": -6.2,
                "longitude": 106.8,
                "zoom": 13.0,
                "pitch": 0.0,
                "bearing": 0.0
            })
        );
        assert_eq!(value["mapProvider"], "carto");
        assert_eq!(value["mapStyle"], "light");
        assert_eq!(
            value["tooltip"]["text"],
            "Traffic H3: {h3}\nVisitors: {count_visitor}"
        );
        assert_eq!(value["views"][0]["@@type"], "MapView");
        assert_eq!(value["layers"][0]["data"][0]["color"], serde_json::json!([255, 180, 180, 180]));
    }
}
