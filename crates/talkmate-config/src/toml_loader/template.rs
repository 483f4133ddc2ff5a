//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# TalkMate Configuration
# Only override what you want to change -- missing fields use defaults.

[api]
# The GEMINI_API_KEY environment variable takes precedence over this value.
# api_key = ""
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# text_model = "gemini-2.0-flash"     # text-only prompts
# vision_model = "gemini-2.0-flash"   # prompts with an attached image
# max_tokens = 4096                   # 1-65536
# temperature = 0.7                   # 0.0-2.0
# connect_timeout_secs = 10           # 1-300
# request_timeout_secs = 120          # 1-600

[logging]
# level = "INFO"                      # DEBUG | INFO | WARNING | ERROR
"##
    .to_string()
}
