//! GodotLogger implementation
//!
//! Bridges Rust logging to Godot's godot_print!/godot_error! + logs/game.log file.
//! Уровень фильтруется в vanguard_simulation::logger, сюда приходит только то, что надо печатать.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use vanguard_simulation::{LogLevel, LogPrinter};

// Godot запускается из godot/ директории, поэтому путь относительно project root
const LOG_PATH: &str = "../logs/game.log";

/// Ошибку открытия файла логируем только один раз
static FILE_ERROR_LOGGED: AtomicBool = AtomicBool::new(false);

pub struct GodotLogger;

impl LogPrinter for GodotLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => godot::prelude::godot_error!("[{}] {}", level.as_str(), message),
            LogLevel::Warning => godot::prelude::godot_warn!("[{}] {}", level.as_str(), message),
            _ => godot::prelude::godot_print!("[{}] {}", level.as_str(), message),
        }

        Self::append_to_file(level, message);
    }
}

impl GodotLogger {
    /// Новая сессия - новый файл (+ заголовок с датой)
    pub fn clear_log_file() {
        let log_path = std::path::Path::new(LOG_PATH);
        let _ = std::fs::remove_file(log_path);

        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(
            log_path,
            format!("=== session {} ===\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S")),
        );
    }

    fn append_to_file(level: LogLevel, message: &str) {
        let log_path = std::path::Path::new(LOG_PATH);

        match std::fs::OpenOptions::new().create(true).append(true).open(log_path) {
            Ok(mut file) => {
                let _ = writeln!(file, "[{}] {}", level.as_str(), message);
            }
            Err(e) => {
                if !FILE_ERROR_LOGGED.swap(true, Ordering::Relaxed) {
                    godot::prelude::godot_error!("Failed to open log file {:?}: {}", log_path, e);
                }
            }
        }
    }
}
