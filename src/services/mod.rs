pub mod format;

pub use format::render_status_change;
