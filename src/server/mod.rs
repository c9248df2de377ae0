//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión a la vez
//! 3. Lee y parsea un request HTTP
//! 4. Responde a GET (o advierte para otros métodos) y cierra
//!
//! El ciclo es estrictamente secuencial: la conexión N+1 no se acepta
//! hasta que la conexión N fue atendida y cerrada por completo.

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::Connection;
pub use tcp::Server;
