//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Este módulo implementa lo justo del protocolo HTTP/1.x que el servidor
//! necesita, sin librerías de alto nivel:
//!
//! - Parsing de requests (método, target, versión, headers, body)
//! - Construcción de responses
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /path HTTP/1.1\r\n
//! Host: localhost:8080\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 14\r\n
//! \r\n
//! Hello, World!
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
