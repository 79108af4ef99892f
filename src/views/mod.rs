pub mod detail;
pub mod markers;
pub mod sidebar;
