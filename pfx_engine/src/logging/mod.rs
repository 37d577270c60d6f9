//! Global logging module for the filter-expression engine
//!
//! Provides thread-safe global logging with coded events and a clean macro
//! interface. Evaluation is pure; logging is the only observable side channel.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::utils::Span;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system with a console logger
pub fn init_global_logging() -> Result<(), String> {
    let service = Arc::new(LoggingService::new(
        Arc::new(ConsoleLogger::new(LogLevel::Info)),
        LogLevel::Info,
    ));
    init_global_logging_with_service(service)
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    // Validate error code system
    let test_codes = ["E001", "E010", "E020", "S001"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let event = events::LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    service.log_event(event);

    Ok(())
}

fn global_service() -> Option<&'static Arc<LoggingService>> {
    GLOBAL_LOGGER.get()
}

/// Log a pre-built event through the global service
pub fn log_event(event: LogEvent) {
    if let Some(service) = global_service() {
        service.log_event(event);
    }
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log an error event with optional span and context (used by `log_error!`)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<Span>,
    context: Vec<(&str, &str)>,
) {
    if let Some(service) = global_service() {
        let mut event = LogEvent::error(code, message);
        if let Some(span) = span {
            event = event.with_span(span);
        }
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        service.log_event(event);
    }
}

/// Log a success event with context (used by `log_success!`)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    if let Some(service) = global_service() {
        let mut event = LogEvent::success(code, message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        service.log_event(event);
    }
}

/// Log an info event with context (used by `log_info!`)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(service) = global_service() {
        let mut event = LogEvent::info(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        service.log_event(event);
    }
}

/// Log a warning event with context (used by `log_warning!`)
pub fn log_warning_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(service) = global_service() {
        let mut event = LogEvent::warning(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        service.log_event(event);
    }
}

/// Log a debug event with context (used by `log_debug!`)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    if let Some(service) = global_service() {
        let mut event = LogEvent::debug(message);
        for (key, value) in context {
            event = event.with_context(key, value);
        }
        service.log_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent_failure() {
        let _ = init_global_logging();
        // Second initialization must be rejected, not panic
        assert!(init_global_logging().is_err());
    }

    #[test]
    fn test_logging_without_init_is_silent() {
        // Helpers must be safe to call regardless of init state
        log_info_with_context("no-op when uninitialized", vec![]);
        log_debug_with_context("still a no-op", vec![("k", "v")]);
    }
}
