/// Console logger tagged with the component that emitted the message.
///
/// In the browser every line goes to the devtools console; native builds
/// (unit tests) discard them.
pub struct Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn format_line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }

    #[cfg(target_arch = "wasm32")]
    fn log(level: Level, component: &str, message: &str) {
        let line = Self::format_line(component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(_level: Level, component: &str, message: &str) {
        let _ = Self::format_line(component, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_includes_component() {
        assert_eq!(Logger::format_line("api", "GET /api/Books"), "[api] GET /api/Books");
    }

    #[test]
    fn test_logging_is_safe_outside_the_browser() {
        Logger::debug_with_component("test", "debug");
        Logger::info_with_component("test", "info");
        Logger::warn_with_component("test", "warn");
        Logger::error_with_component("test", "error");
    }
}
