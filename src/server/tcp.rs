//! # Servidor TCP Secuencial
//! src/server/tcp.rs
//!
//! Implementación del loop accept → leer request → responder → cerrar.
//! Atiende estrictamente una conexión a la vez: la siguiente no se acepta
//! hasta que la actual fue atendida y cerrada.
//!
//! Manejo de fallos:
//! - Fallo de bind: propaga, `main` lo loguea y el proceso termina con 1.
//! - Fallo de lectura/escritura por conexión: también fatal para el proceso
//!   entero (fail-fast deliberado de este núcleo; la variante endurecida
//!   sería aislar el fallo y continuar con el siguiente accept).
//! - Fallo de shutdown-send: se loguea como ERROR y el loop continúa.

use std::io;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use crate::config::Config;
use crate::http::{Method, Response, StatusCode};
use crate::log::{LogLevel, Logger};
use crate::server::connection::Connection;

/// Valor del header `Server` en las respuestas
const SERVER_NAME: &str = "HelloServer/0.1";

/// Cuerpo fijo de la respuesta a GET
const HELLO_BODY: &str = "Hello, World!\n";

/// Servidor HTTP secuencial con responder fijo
pub struct Server {
    config: Config,
    logger: Arc<Logger>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config, logger: Arc<Logger>) -> Self {
        Self {
            config,
            logger,
            listener: None,
        }
    }

    /// Hace bind del listener en la dirección configurada
    ///
    /// Retorna la dirección local efectiva (útil con puerto 0 en pruebas).
    /// El bind ocurre una sola vez por proceso; si falla (ej: puerto en
    /// uso) el error propaga y el proceso debe terminar.
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let listener = TcpListener::bind(self.config.address())?;
        let addr = listener.local_addr()?;
        self.listener = Some(listener);
        Ok(addr)
    }

    /// Corre el loop del servidor (bloqueante, no retorna en operación normal)
    ///
    /// La única salida es un fallo no manejado: cualquier error de accept,
    /// lectura o escritura propaga al llamador, que debe loguearlo y
    /// terminar el proceso con estado de fallo.
    pub fn run(&mut self) -> io::Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let listener = self.listener.as_ref().unwrap();

        loop {
            // Bloquea hasta que conecte un cliente; sin timeout
            let (stream, peer) = listener.accept()?;
            let connection = Connection::new(stream, peer);
            self.handle_connection(connection)?;
        }
    }

    /// Atiende una conexión completa: leer, despachar, responder, cerrar
    fn handle_connection(&self, mut connection: Connection) -> io::Result<()> {
        self.logger
            .log(LogLevel::Info)
            .append("Client connected: ")
            .append(connection.peer_addr());

        let request = connection.read_request()?;
        self.logger
            .log(LogLevel::Info)
            .append("Received request: ")
            .append(request.method())
            .append(" ")
            .append(request.target());

        if request.method() == &Method::GET {
            let response = Response::new(StatusCode::Ok)
                .with_version(request.version())
                .with_header("Server", SERVER_NAME)
                .with_header("Content-Type", "text/plain")
                .with_body(HELLO_BODY);

            self.logger
                .log(LogLevel::Info)
                .append("Sending response: ")
                .append(response.status().as_u16())
                .append(", body: ")
                .append(HELLO_BODY);

            connection.write_response(&response)?;
        } else {
            // Métodos distintos de GET: advertir y cerrar sin escribir
            // ni un byte de respuesta
            self.logger
                .log(LogLevel::Warning)
                .append("Unsupported request method: ")
                .append(request.method());
        }

        if let Err(e) = connection.shutdown_send() {
            // Fallo recuperado: se loguea y el loop continúa
            self.logger
                .log(LogLevel::Error)
                .append("Socket shutdown error: ")
                .append(e);
        }

        Ok(())
    }
}
