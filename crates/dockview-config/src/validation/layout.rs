//! Layout, frame and window validation.

use crate::schema::DockviewConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &DockviewConfig) {
    validate_range(errors, "layout.gap", config.layout.gap.into(), 0, 20);
    validate_range(
        errors,
        "layout.outer_padding",
        config.layout.outer_padding.into(),
        0,
        40,
    );
    if config.layout.min_pane_size < 0.0 {
        errors.push(format!(
            "layout.min_pane_size = {} must not be negative",
            config.layout.min_pane_size
        ));
    }
}

pub(crate) fn validate_frame(errors: &mut Vec<String>, config: &DockviewConfig) {
    validate_range_f64(errors, "frame.title_height", config.frame.title_height, 0.0, 100.0);
    validate_range_f64(errors, "frame.edge_fraction", config.frame.edge_fraction, 0.05, 0.5);
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &DockviewConfig) {
    validate_range(errors, "window.width", config.window.width.into(), 200, 10000);
    validate_range(errors, "window.height", config.window.height.into(), 200, 10000);
}
