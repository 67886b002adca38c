//! Macro utilitaria para declarar records de dominio sin boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use interaction_core::record;
//!
//! El crate que la usa necesita `serde` y `serde_json` como dependencias.

/// Declara un record con derives, constructor posicional, `Record` y el rol
/// indicado.
///
/// Formas soportadas:
/// - record!(context Name { field1: Ty1, field2: Ty2 });
/// - record!(state Name { ... }); record!(action Name { ... }); record!(outcome Name { ... });
///
/// Cada campo se serializa con `serde_json::Value::from`, por lo que su tipo
/// debe implementar `Clone` y `Into<Value>` (String, enteros, f64, bool,
/// Option<T>, Vec<T>...).
#[macro_export]
macro_rules! record {
    (context $name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::record!(@define $crate::model::Context; $name { $($fname : $fty),+ });
    };
    (state $name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::record!(@define $crate::model::State; $name { $($fname : $fty),+ });
    };
    (action $name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::record!(@define $crate::model::Action; $name { $($fname : $fty),+ });
    };
    (outcome $name:ident { $($fname:ident : $fty:ty),+ $(,)? }) => {
        $crate::record!(@define $crate::model::Outcome; $name { $($fname : $fty),+ });
    };
    (@define $role:path; $name:ident { $($fname:ident : $fty:ty),+ }) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name { $(pub $fname: $fty,)+ }
        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($($fname : $fty),+) -> Self { Self { $($fname),+ } }
        }
        impl $crate::model::Record for $name {
            fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
                let mut map = serde_json::Map::new();
                $( map.insert(stringify!($fname).to_string(), serde_json::Value::from(self.$fname.clone())); )+
                map
            }
        }
        impl $role for $name {}
    };
}
