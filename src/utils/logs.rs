use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warn,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

/// 动态设置日志输出级别（不持久化）
pub fn set_log_level(level: &str) -> Result<(), String> {
    let lf = match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        "off" => log::LevelFilter::Off,
        other => return Err(format!("无效的日志级别: {}", other)),
    };
    log::set_max_level(lf);
    Ok(())
}

/// 获取当前日志级别
pub fn current_log_level() -> LogLevel {
    log::max_level().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_the_facade() {
        let before = log::max_level();

        set_log_level("WARN").unwrap();
        assert_eq!(current_log_level(), LogLevel::Warn);
        set_log_level("debug").unwrap();
        assert_eq!(current_log_level(), LogLevel::Debug);
        set_log_level("trace").unwrap();
        assert_eq!(current_log_level(), LogLevel::Trace);
        set_log_level("Off").unwrap();
        assert_eq!(current_log_level(), LogLevel::Off);

        log::set_max_level(before);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = set_log_level("verbose").unwrap_err();
        assert!(err.contains("verbose"));
    }

    #[test]
    fn level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    }
}
