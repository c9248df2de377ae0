//! # Entries del Logger
//! src/log/entry.rs
//!
//! Un `LogEntry` acumula los valores de una línea de log y la escribe a
//! todos los sinks exactamente una vez, al salir de scope (`Drop`). Esto
//! garantiza el flush en todo camino de salida sin llamadas explícitas.
//!
//! El `LogMarker` captura la severidad y el call-site (archivo:línea) en el
//! punto de la llamada, usando `#[track_caller]`. Se consume de inmediato
//! para construir el entry; nunca se almacena.

use std::fmt::{Display, Write as _};
use std::panic::Location;

use crate::log::level::LogLevel;
use crate::log::logger::Logger;

/// Severidad + call-site capturados en el punto de la llamada
#[derive(Debug, Clone, Copy)]
pub struct LogMarker {
    level: LogLevel,
    location: &'static Location<'static>,
}

impl LogMarker {
    /// Captura un marker en el call-site actual
    ///
    /// Gracias a `#[track_caller]`, `Location::caller()` retorna el
    /// archivo:línea de quien llama (propagado a través de `Logger::log`).
    #[track_caller]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            location: Location::caller(),
        }
    }

    /// Severidad del marker
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Call-site capturado (archivo y línea)
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Acumulador de una línea de log, ligado al logger que lo creó
///
/// Los valores se agregan con `append` encadenado; la línea completa se
/// renderiza y escribe cuando el entry es destruido.
pub struct LogEntry<'a> {
    logger: &'a Logger,
    marker: LogMarker,
    message: String,
}

impl<'a> LogEntry<'a> {
    /// Crea un entry vacío para el marker dado
    pub(crate) fn new(logger: &'a Logger, marker: LogMarker) -> Self {
        Self {
            logger,
            marker,
            message: String::new(),
        }
    }

    /// Agrega un valor al mensaje (encadenable)
    ///
    /// Acepta cualquier valor que implemente `Display`.
    ///
    /// # Ejemplo
    /// ```no_run
    /// use hello_server::log::{Logger, LogLevel};
    ///
    /// let logger = Logger::open("./logs/server.log").unwrap();
    /// logger.log(LogLevel::Info).append("puerto: ").append(8080);
    /// ```
    pub fn append(mut self, value: impl Display) -> Self {
        // write! sobre String no falla
        let _ = write!(self.message, "{}", value);
        self
    }
}

impl Drop for LogEntry<'_> {
    /// Renderiza y escribe la línea, exactamente una vez
    ///
    /// Ocurre también con mensaje vacío: todo entry produce una línea.
    fn drop(&mut self) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = compose_line(
            &timestamp.to_string(),
            self.marker.location.file(),
            self.marker.location.line(),
            self.marker.level,
            &self.message,
        );
        self.logger.write_line(&line);
    }
}

/// Compone una línea de log con el formato
/// `<fecha> <hora> <archivo>:<línea>  <SEVERIDAD>; <mensaje>`
fn compose_line(
    timestamp: &str,
    file: &str,
    line: u32,
    level: LogLevel,
    message: &str,
) -> String {
    format!("{} {}:{}  {}; {}", timestamp, file, line, level.label(), message)
}
