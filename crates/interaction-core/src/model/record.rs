//! Capacidad común de todo record de dominio (contexto, estado, acción,
//! resultado): producir una representación plana en forma de mapa JSON.
//!
//! El núcleo no impone campos; sólo observa `to_map`. Los traits de rol
//! (`Context`, `State`, `Action`, `Outcome`) son marcadores sobre `Record`
//! para que cada posición de una `Interaction` acepte únicamente un record del
//! rol correcto.
use serde_json::{Map, Value};

/// Record serializable. `to_map` debe ser total sobre cualquier instancia
/// construida.
pub trait Record {
    fn to_map(&self) -> Map<String, Value>;
}

/// Información estática/ambiental que acompaña a una interacción.
pub trait Context: Record {}

/// Instantánea del sujeto observado.
pub trait State: Record {}

/// Intervención realizada.
pub trait Action: Record {}

/// Resultado medido de una acción.
pub trait Outcome: Record {}

/// Un mapa JSON es un record ad-hoc válido para cualquier rol.
impl Record for Map<String, Value> {
    fn to_map(&self) -> Map<String, Value> { self.clone() }
}

impl Context for Map<String, Value> {}
impl State for Map<String, Value> {}
impl Action for Map<String, Value> {}
impl Outcome for Map<String, Value> {}

impl<R: Record + ?Sized> Record for Box<R> {
    fn to_map(&self) -> Map<String, Value> { (**self).to_map() }
}

impl<R: Context + ?Sized> Context for Box<R> {}
impl<R: State + ?Sized> State for Box<R> {}
impl<R: Action + ?Sized> Action for Box<R> {}
impl<R: Outcome + ?Sized> Outcome for Box<R> {}

/// Convierte un `serde_json::Value` en record ad-hoc. Valores que no son
/// objeto quedan envueltos bajo la clave `"value"`.
pub fn record_from_value(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".to_string(), other);
            map
        }
    }
}
