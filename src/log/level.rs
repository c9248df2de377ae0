//! # Niveles de Severidad
//! src/log/level.rs
//!
//! Define la enumeración ordenada de severidades del logger.
//! El orden es solo informativo: el logger no filtra por umbral,
//! toda llamada llega a todos los sinks.

/// Severidad de una línea de log, de menor a mayor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Detalle fino de ejecución
    Trace,

    /// Información de depuración
    Debug,

    /// Eventos normales del ciclo de vida del servidor
    Info,

    /// Situaciones anómalas pero manejadas (ej: método no soportado)
    Warning,

    /// Fallos de operación (ej: error al cerrar un socket)
    Error,

    /// Fallos que impiden continuar
    Fatal,
}

impl LogLevel {
    /// Retorna la etiqueta en mayúsculas usada en las líneas de log
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::log::LogLevel;
    /// assert_eq!(LogLevel::Warning.label(), "WARNING");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
