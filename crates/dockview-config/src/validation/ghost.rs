//! Ghost timing and opacity validation.

use crate::schema::DockviewConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_ghost(errors: &mut Vec<String>, config: &DockviewConfig) {
    let ghost = &config.ghost;
    validate_range(errors, "ghost.anchor_duration_ms", ghost.anchor_duration_ms, 0, 1000);
    validate_range(errors, "ghost.fade_in_duration_ms", ghost.fade_in_duration_ms, 0, 1000);
    validate_range(
        errors,
        "ghost.fade_out_duration_ms",
        ghost.fade_out_duration_ms,
        0,
        1000,
    );
    validate_range(errors, "ghost.frame_interval_ms", ghost.frame_interval_ms, 1, 100);
    validate_range_f64(errors, "ghost.floating_opacity", ghost.floating_opacity, 0.0, 1.0);
    validate_range_f64(errors, "ghost.anchored_opacity", ghost.anchored_opacity, 0.0, 1.0);
}
