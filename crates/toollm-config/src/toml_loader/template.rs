//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# ToolLM Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# API keys are read from GROQ_API_KEY and TAVILY_API_KEY, never from here.

[server]
# host = "0.0.0.0"
# port = 8001             # PORT env var wins

[llm]
# base_url = "https://api.groq.com/openai/v1"
# model = "llama-3.3-70b-versatile"
# temperature = 0.0       # 0.0-2.0
# max_tokens = 1024
# timeout_secs = 120      # 5-600

[search]
# base_url = "https://api.tavily.com"
# max_results = 5         # 1-20
# search_depth = "basic"  # basic | advanced
# timeout_secs = 30       # 5-600

[session]
# ttl_secs = 86400        # 60-604800
# reap_interval_secs = 600

[chat]
# max_tool_rounds = 5     # 1-20
# fallback_message = "I am unable to gather enough information on this"
# system_prompt = "..."

[logging]
# level = "info"          # trace | debug | info | warn | error
"##
    .to_string()
}
