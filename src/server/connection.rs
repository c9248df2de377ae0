//! # Conexión de un Cliente
//! src/server/connection.rs
//!
//! Una `Connection` es el socket de un cliente aceptado, con su ciclo de
//! vida completo: leer un request, escribir (a lo sumo) una respuesta,
//! hacer half-close y cerrar al soltarla. Pertenece en exclusiva a la
//! iteración actual del loop; nunca se retiene entre iteraciones.

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use crate::http::{Request, Response};

/// Tamaño máximo de un request (request line + headers + body)
const MAX_REQUEST_SIZE: usize = 8192;

/// Socket de un cliente aceptado
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    /// Envuelve un stream aceptado junto con la dirección del cliente
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }

    /// Dirección remota del cliente
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Lee un request HTTP completo del socket (bloqueante)
    ///
    /// Acumula bytes hasta ver el terminador de headers `\r\n\r\n` más el
    /// body que indique `Content-Length`, y entonces parsea. No hay timeout
    /// de lectura: un cliente que conecta y nunca envía datos bloquea al
    /// servidor entero (limitación conocida del diseño).
    ///
    /// # Errores
    ///
    /// * `UnexpectedEof` - el cliente cerró antes de completar el request
    /// * `InvalidData` - request demasiado grande o malformado
    pub fn read_request(&mut self) -> io::Result<Request> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];

        while !request_is_complete(&buffer) {
            if buffer.len() >= MAX_REQUEST_SIZE {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "request exceeds maximum size",
                ));
            }

            let bytes_read = self.stream.read(&mut chunk)?;
            if bytes_read == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "connection closed before a complete request",
                ));
            }
            buffer.extend_from_slice(&chunk[..bytes_read]);
        }

        // Parsear solo el request completo; bytes extra (ej: un segundo
        // request pipelined) se ignoran, esta conexión atiende uno solo
        let headers_end = find_headers_end(&buffer).unwrap_or(buffer.len());
        let request_len =
            (headers_end + declared_content_length(&buffer[..headers_end])).min(buffer.len());

        Request::parse(&buffer[..request_len])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Escribe una respuesta completa al socket, con flush
    pub fn write_response(&mut self, response: &Response) -> io::Result<()> {
        self.stream.write_all(&response.to_bytes())?;
        self.stream.flush()
    }

    /// Hace half-close del lado de envío (shutdown-send)
    ///
    /// El socket se cierra del todo cuando la `Connection` se suelta.
    pub fn shutdown_send(&self) -> io::Result<()> {
        self.stream.shutdown(Shutdown::Write)
    }
}

/// Determina si el buffer ya contiene un request completo
///
/// Completo = terminador de headers presente, y tantos bytes de body como
/// declare `Content-Length` (cero si no está el header).
fn request_is_complete(buffer: &[u8]) -> bool {
    match find_headers_end(buffer) {
        Some(headers_end) => {
            let body_len = declared_content_length(&buffer[..headers_end]);
            buffer.len() >= headers_end + body_len
        }
        None => false,
    }
}

/// Busca el fin de la sección de headers (`\r\n\r\n`)
///
/// Retorna la posición del primer byte después del terminador.
fn find_headers_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

/// Extrae el valor de `Content-Length` de la sección de headers
///
/// Retorna 0 si el header no está o no es un número válido.
fn declared_content_length(head: &[u8]) -> usize {
    let head_str = String::from_utf8_lossy(head);
    for line in head_str.split("\r\n") {
        if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim();
            if name.eq_ignore_ascii_case("content-length") {
                return line[colon_pos + 1..].trim().parse().unwrap_or(0);
            }
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use std::net::TcpListener;
    use std::thread;

    fn connected_pair() -> (Connection, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().unwrap();
        let client = TcpStream::connect(addr).unwrap();
        let (stream, peer) = listener.accept().unwrap();
        (Connection::new(stream, peer), client)
    }

    #[test]
    fn test_find_headers_end() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(18));
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
        assert_eq!(find_headers_end(b""), None);
    }

    #[test]
    fn test_declared_content_length() {
        assert_eq!(declared_content_length(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n"), 5);
        assert_eq!(declared_content_length(b"POST / HTTP/1.1\r\ncontent-length: 12\r\n"), 12);
        assert_eq!(declared_content_length(b"GET / HTTP/1.1\r\nHost: x\r\n"), 0);
        assert_eq!(declared_content_length(b"POST / HTTP/1.1\r\nContent-Length: abc\r\n"), 0);
    }

    #[test]
    fn test_request_is_complete() {
        assert!(request_is_complete(b"GET / HTTP/1.1\r\n\r\n"));
        assert!(!request_is_complete(b"GET / HTTP/1.1\r\n"));
        assert!(!request_is_complete(
            b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhel"
        ));
        assert!(request_is_complete(
            b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello"
        ));
    }

    #[test]
    fn test_read_request_simple_get() {
        let (mut conn, mut client) = connected_pair();

        let t = thread::spawn(move || {
            client.write_all(b"GET /hello HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
            client
        });

        let request = conn.read_request().unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.target(), "/hello");
        assert_eq!(request.header("Host"), Some("localhost"));

        t.join().unwrap();
    }

    #[test]
    fn test_read_request_in_two_fragments() {
        let (mut conn, mut client) = connected_pair();

        let t = thread::spawn(move || {
            client.write_all(b"GET /parcial HT").unwrap();
            client.flush().unwrap();
            thread::sleep(std::time::Duration::from_millis(20));
            client.write_all(b"TP/1.1\r\n\r\n").unwrap();
            client
        });

        let request = conn.read_request().unwrap();
        assert_eq!(request.target(), "/parcial");

        t.join().unwrap();
    }

    #[test]
    fn test_read_request_with_body() {
        let (mut conn, mut client) = connected_pair();

        let t = thread::spawn(move || {
            client
                .write_all(b"POST /datos HTTP/1.1\r\nContent-Length: 4\r\n\r\nabcd")
                .unwrap();
            client
        });

        let request = conn.read_request().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), b"abcd");
    }

    #[test]
    fn test_read_request_with_binary_body() {
        let (mut conn, mut client) = connected_pair();

        let t = thread::spawn(move || {
            client
                .write_all(b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\xff\xfe\x01")
                .unwrap();
            client
        });

        let request = conn.read_request().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), &[0x00, 0xff, 0xfe, 0x01]);

        t.join().unwrap();
    }

    #[test]
    fn test_read_request_truncated_is_eof_error() {
        let (mut conn, client) = connected_pair();

        let t = thread::spawn(move || {
            let mut client = client;
            // Request line truncada, sin terminador de headers
            client.write_all(b"GET /trunc").unwrap();
            client.shutdown(Shutdown::Write).unwrap();
            client
        });

        let err = conn.read_request().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        t.join().unwrap();
    }

    #[test]
    fn test_read_request_garbage_is_invalid_data() {
        let (mut conn, mut client) = connected_pair();

        let t = thread::spawn(move || {
            client.write_all(b"\xff\xfegarbage\r\n\r\n").unwrap();
            client
        });

        let err = conn.read_request().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        t.join().unwrap();
    }

    #[test]
    fn test_write_response_and_shutdown() {
        use crate::http::{Response, StatusCode};

        let (mut conn, mut client) = connected_pair();

        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Hola");
        conn.write_response(&response).unwrap();
        conn.shutdown_send().unwrap();

        let mut received = Vec::new();
        client.read_to_end(&mut received).unwrap();
        let text = String::from_utf8(received).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.ends_with("\r\n\r\nHola"));
    }
}
