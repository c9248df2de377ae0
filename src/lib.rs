//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP secuencial de demostración implementado desde cero.
//! Atiende una conexión a la vez: acepta, lee un request, responde
//! `"Hello, World!\n"` a GET (y solo advierte para cualquier otro método),
//! cierra la conexión y vuelve a aceptar.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `log`: Logger con doble sink (archivo + consola) y entries RAII
//! - `http`: Parsing y manejo del protocolo HTTP/1.x
//! - `server`: Lógica del servidor TCP y manejo de la conexión
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use std::sync::Arc;
//! use hello_server::config::Config;
//! use hello_server::log::Logger;
//! use hello_server::server::Server;
//!
//! let config = Config::default();
//! let logger = Arc::new(Logger::open(&config.log_file).expect("abrir log"));
//! let mut server = Server::new(config, logger);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod http;
pub mod log;
pub mod server;
