//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Text layer search configuration
# Only override what you want to change -- missing fields use defaults.

[search]
# ignore_case = false
# complete_words = false     # match whole words only

[highlight]
# marker_class = "highlight appended"   # letters, digits, '-', '_' and spaces

[logging]
# level = "INFO"             # TRACE, DEBUG, INFO, WARNING, ERROR; RUST_LOG adds to it
"##
    .to_string()
}
