pub mod date_codec;
pub mod output_ops;
