pub mod encoding;
pub mod environment;

pub use encoding::{encode_uri, encode_uri_component};
pub use environment::get_manuals_dir;
