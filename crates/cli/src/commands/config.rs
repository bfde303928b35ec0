use eduverse_core::config::AppConfig;

pub fn run(config: &AppConfig) -> String {
    let lines = vec![
        "effective config (source precedence: env > file > default):".to_string(),
        render_line("logging.level", &config.logging.level, "EDUVERSE_LOG_LEVEL"),
        render_line(
            "logging.format",
            &format!("{:?}", config.logging.format).to_ascii_lowercase(),
            "EDUVERSE_LOG_FORMAT",
        ),
        render_line("lms.enabled", &config.lms.enabled.to_string(), "EDUVERSE_LMS_ENABLED"),
    ];
    lines.join("\n")
}

fn render_line(key: &str, value: &str, env_var: &str) -> String {
    format!("{key} = {value} (env: {env_var})")
}
