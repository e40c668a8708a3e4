//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# Dockview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[ghost]
# anchor_duration_ms = 150     # 0-1000
# fade_in_duration_ms = 200    # 0-1000
# fade_out_duration_ms = 100   # 0-1000
# floating_opacity = 0.3       # 0.0-1.0
# anchored_opacity = 0.3       # 0.0-1.0
# frame_interval_ms = 16       # 1-100

[frame]
# title_height = 24.0          # 0-100
# edge_fraction = 0.25         # 0.05-0.5
# layer_base = 1

[layout]
# gap = 6                      # 0-20
# outer_padding = 0            # 0-40
# min_pane_size = 50.0

[window]
# title = "Dockview"
# width = 1280
# height = 800

[logging]
# level = "INFO"               # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
