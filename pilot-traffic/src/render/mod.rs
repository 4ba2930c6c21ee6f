//! deck.gl documents for the traffic dashboard, in the JSON layout read by
//! deck.gl's JSONConverter (`@@type` class names and `@@=` accessors).
mod deck_document;
mod deck_layer;
mod html;
mod output_format;
mod view_state;

pub use deck_document::{DeckDocument, Tooltip};
pub use deck_layer::{ArcLayer, ColorAccessor, DeckLayer, H3HexagonLayer};
pub use html::to_html;
pub use output_format::OutputFormat;
pub use view_state::ViewState;
