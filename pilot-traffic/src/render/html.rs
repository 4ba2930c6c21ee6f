use super::DeckDocument;
use crate::model::TrafficError;

const DECK_GL_SCRIPT: &str = "https://unpkg.com/deck.gl@^9.0.0/dist.min.js";
const DECK_GL_JSON_SCRIPT: &str = "https://unpkg.com/@deck.gl/json@^9.0.0/dist.min.js";
const H3_SCRIPT: &str = "https://unpkg.com/h3-js@^4.1.0/dist/h3-js.umd.js";
const MAPLIBRE_SCRIPT: &str = "https://unpkg.com/maplibre-gl@^4.0.0/dist/maplibre-gl.js";
const MAPLIBRE_CSS: &str = "https://unpkg.com/maplibre-gl@^4.0.0/dist/maplibre-gl.css";

/// basemap style url for a carto style name. unknown names are assumed to
/// already be a style url.
pub fn carto_style_url(map_style: &str) -> String {
    match map_style {
        "light" => String::from("https://basemaps.cartocdn.com/gl/positron-gl-style/style.json"),
        "dark" => String::from("https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json"),
        "road" => String::from("https://basemaps.cartocdn.com/gl/voyager-gl-style/style.json"),
        other => other.to_string(),
    }
}

/// wraps the document in a standalone page that converts it with deck.gl's
/// JSONConverter.
pub fn to_html(doc: &DeckDocument) -> Result<String, TrafficError> {
    // keep a "</script>" inside any string from closing the script element
    let spec = serde_json::to_string(doc)?.replace("</", "<\\/");
    let style_url = serde_json::to_string(&carto_style_url(&doc.map_style))?;
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pilot Traffic - Home</title>
    <script src="{deck}"></script>
    <script src="{deck_json}"></script>
    <script src="{h3}"></script>
    <script src="{maplibre}"></script>
    <link href="{maplibre_css}" rel="stylesheet" />
    <style>
        body {{ margin: 0; }}
        #map {{ position: relative; width: {width}px; height: {height}px; }}
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        const spec = {spec};
        const configuration = new deck.JSONConfiguration({{ classes: Object.assign({{}}, deck) }});
        const converter = new deck.JSONConverter({{ configuration }});
        const props = converter.convert(spec);
        const tooltip = spec.tooltip.text;
        new deck.DeckGL({{
            container: 'map',
            mapStyle: {style_url},
            initialViewState: props.initialViewState,
            layers: props.layers,
            controller: true,
            getTooltip: ({{ object }}) =>
                object && tooltip.replace(/\{{(\w+)\}}/g, (_, key) => object[key] ?? '')
        }});
    </script>
</body>
</html>"#,
        deck = DECK_GL_SCRIPT,
        deck_json = DECK_GL_JSON_SCRIPT,
        h3 = H3_SCRIPT,
        maplibre = MAPLIBRE_SCRIPT,
        maplibre_css = MAPLIBRE_CSS,
        width = doc.width,
        height = doc.height,
        spec = spec,
        style_url = style_url,
    );
    Ok(page)
}
