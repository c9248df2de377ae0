//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración, abre el logger
//! (precondición de arranque: si el archivo de log no puede abrirse, el
//! proceso no continúa) y corre el loop secuencial. Cualquier fallo que
//! escape del loop se loguea como ERROR y el proceso termina con estado 1.

use std::sync::Arc;

use hello_server::config::Config;
use hello_server::log::{LogLevel, Logger};
use hello_server::server::Server;

fn main() {
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("Configuración inválida: {}", e);
        std::process::exit(1);
    }

    let logger = match Logger::open(&config.log_file) {
        Ok(logger) => Arc::new(logger),
        Err(e) => {
            eprintln!("No se pudo abrir el archivo de log {}: {}", config.log_file, e);
            std::process::exit(1);
        }
    };

    logger
        .log(LogLevel::Info)
        .append("Starting web server at ")
        .append(config.address());

    let mut server = Server::new(config, Arc::clone(&logger));

    if let Err(e) = server.run() {
        logger.log(LogLevel::Error).append("Error: ").append(&e);
        std::process::exit(1);
    }
}
