//! All available SVG icons within the application.

/// Check mark in a circle icon.
pub const CHECK_CIRCLE: &str = include_str!("../assets/svg/check-circle.svg");

/// Exclamation mark in a triangle icon.
pub const EXCLAMATION_TRIANGLE: &str = include_str!("../assets/svg/exclamation-triangle.svg");

/// Stacked horizontal lines icon.
pub const LIST: &str = include_str!("../assets/svg/list.svg");

/// 'x' icon.
pub const XMARK: &str = include_str!("../assets/svg/xmark.svg");
