//! # Logger de Doble Sink
//! src/log/logger.rs
//!
//! El `Logger` mantiene el conjunto de sinks (archivo + consola) y escribe
//! cada línea renderizada a todos ellos, con flush inmediato. No hay
//! filtrado por nivel ni buffering: toda llamada llega a todos los sinks.
//!
//! El logger se construye una vez en `main` y se comparte por referencia
//! (`Arc<Logger>`) con el servidor; no hay estado global.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::log::entry::{LogEntry, LogMarker};
use crate::log::level::LogLevel;

/// Logger con sinks espejados
///
/// Los sinks van detrás de un `Mutex` para que el tipo sea `Send + Sync`;
/// en operación normal escribe un único thread.
pub struct Logger {
    sinks: Mutex<Vec<Box<dyn Write + Send>>>,
}

impl Logger {
    /// Abre el logger con sus dos sinks: archivo (append) y consola
    ///
    /// El directorio del archivo debe existir; si el archivo no puede
    /// abrirse (permisos, directorio inexistente) retorna el error y el
    /// proceso no debe continuar.
    ///
    /// # Ejemplo
    /// ```no_run
    /// use hello_server::log::Logger;
    ///
    /// let logger = Logger::open("./logs/server.log").expect("abrir log");
    /// ```
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_sinks(vec![
            Box::new(file),
            Box::new(io::stdout()),
        ]))
    }

    /// Construye un logger sobre sinks arbitrarios
    ///
    /// Útil en pruebas para capturar la salida en buffers.
    pub fn from_sinks(sinks: Vec<Box<dyn Write + Send>>) -> Self {
        Self {
            sinks: Mutex::new(sinks),
        }
    }

    /// Comienza un entry con la severidad dada
    ///
    /// No tiene efecto hasta que el entry retornado sale de scope: ahí se
    /// renderiza la línea (timestamp + archivo:línea + severidad + mensaje)
    /// y se escribe a todos los sinks.
    ///
    /// # Ejemplo
    /// ```no_run
    /// use hello_server::log::{Logger, LogLevel};
    ///
    /// let logger = Logger::open("./logs/server.log").unwrap();
    /// logger.log(LogLevel::Info).append("Starting web server at 0.0.0.0:8080");
    /// ```
    #[track_caller]
    pub fn log(&self, level: LogLevel) -> LogEntry<'_> {
        LogEntry::new(self, LogMarker::new(level))
    }

    /// Escribe una línea ya renderizada a todos los sinks, con flush
    ///
    /// Los errores de escritura se descartan: un sink caído no interrumpe
    /// al servidor (limitación conocida del diseño).
    pub(crate) fn write_line(&self, line: &str) {
        if let Ok(mut sinks) = self.sinks.lock() {
            for sink in sinks.iter_mut() {
                let _ = writeln!(sink, "{}", line);
                let _ = sink.flush();
            }
        }
    }
}
