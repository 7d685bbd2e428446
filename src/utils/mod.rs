pub mod logging;
pub mod naming;
pub mod path;

pub use logging::init_logging;
pub use naming::{clean_raw_name, normalize_name};
pub use path::{absolute_path, normalize_path, resolve_font_path};
