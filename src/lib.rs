//! Interaction Rust Library
//!
//! Este crate agrupa lo que rodea al núcleo:
//! - `config` carga la configuración del demo desde el entorno / `.env`.
//! - `scenarios` construye las interacciones de ejemplo de cada dominio.
//!
//! Puede usarse desde `main.rs` o desde los tests de integración.

pub mod config;
pub mod scenarios;
