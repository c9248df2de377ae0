//! # Módulo de Logging
//! src/log/mod.rs
//!
//! Este módulo implementa el logger del servidor:
//!
//! - Niveles de severidad ordenados (Trace a Fatal)
//! - Captura del call-site (archivo:línea) en cada llamada
//! - Entries que acumulan valores y se escriben al salir de scope (RAII)
//! - Doble sink: archivo con flush inmediato + consola, siempre espejados
//!
//! ## Formato de cada línea
//!
//! ```text
//! 2026-08-28 14:03:07 src/server/tcp.rs:81  INFO; Client connected: 127.0.0.1:52114
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use hello_server::log::{Logger, LogLevel};
//!
//! let logger = Logger::open("./logs/server.log").expect("abrir log");
//! logger.log(LogLevel::Info).append("Listo en el puerto ").append(8080);
//! // La línea se escribe aquí, cuando el entry sale de scope
//! ```

pub mod entry;
pub mod level;
pub mod logger;

// Re-exportamos los tipos principales para facilitar su uso
pub use entry::{LogEntry, LogMarker};
pub use level::LogLevel;
pub use logger::Logger;
