pub mod articles;
pub mod mount;
pub mod tabs;
pub mod toggle;

pub use mount::{mount, MountedWidgets};
