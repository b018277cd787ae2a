pub mod gaps;
pub mod timeline;
pub mod window;
