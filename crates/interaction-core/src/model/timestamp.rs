//! Tiempo absoluto + tiempo relativo a un evento de referencia.
//!
//! Un `Timestamp` fija un instante (`absolute_time`) y, opcionalmente, lo
//! expresa respecto de un evento con nombre (`relative_to`, p.ej.
//! "planting") mediante un desfase con signo (`relative_offset`).
//!
//! Invariante: un desfase sin evento de referencia no tiene sentido y se
//! rechaza al construir (`CoreModelError::OffsetWithoutReference`).
//!
//! Formato serializado:
//! `{"absoluteTime": <ISO-8601>, "relativeTo": <str|null>, "relativeOffsetDays": <int|null>}`.
//! Los días se obtienen por división entera con piso (hacia -infinito), de modo
//! que `-1h` serializa como `-1` y `+36h` como `1`.
use std::fmt;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Offset, SecondsFormat, TimeZone};
use log::warn;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::{ABSOLUTE_TIME_KEY, RELATIVE_OFFSET_DAYS_KEY, RELATIVE_TO_KEY, SECONDS_PER_DAY};
use crate::errors::CoreModelError;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Instante absoluto. Conserva si el valor de entrada traía zona horaria:
/// sólo los valores `Zoned` emiten el sufijo `+HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsoluteTime {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl AbsoluteTime {
    /// Representación ISO-8601. La fracción de segundo sólo aparece si no es
    /// cero (3, 6 o 9 dígitos); UTC se escribe `+00:00`.
    pub fn to_iso8601(&self) -> String {
        match self {
            AbsoluteTime::Zoned(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, false),
            AbsoluteTime::Naive(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }

    pub fn is_zoned(&self) -> bool { matches!(self, AbsoluteTime::Zoned(_)) }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for AbsoluteTime {
    fn from(dt: DateTime<Tz>) -> Self {
        let offset = dt.offset().fix();
        AbsoluteTime::Zoned(dt.with_timezone(&offset))
    }
}

impl From<NaiveDateTime> for AbsoluteTime {
    fn from(dt: NaiveDateTime) -> Self { AbsoluteTime::Naive(dt) }
}

impl fmt::Display for AbsoluteTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_iso8601()) }
}

/// Punto en el tiempo con parte relativa opcional. Inmutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    absolute_time: AbsoluteTime,
    relative_to: Option<String>,
    relative_offset: Option<Duration>,
}

impl Timestamp {
    /// Constructor general. Rechaza un desfase sin evento de referencia y
    /// etiquetas vacías; cualquier otra combinación es válida.
    pub fn new(absolute_time: impl Into<AbsoluteTime>,
               relative_to: Option<String>,
               relative_offset: Option<Duration>)
               -> Result<Self, CoreModelError> {
        match (&relative_to, &relative_offset) {
            (None, Some(offset)) => {
                warn!("timestamp rejected: offset {offset} without reference event");
                return Err(CoreModelError::OffsetWithoutReference);
            }
            (Some(label), _) if label.trim().is_empty() => {
                warn!("timestamp rejected: blank reference event label");
                return Err(CoreModelError::EmptyReference);
            }
            _ => {}
        }
        Ok(Self { absolute_time: absolute_time.into(),
                  relative_to,
                  relative_offset })
    }

    /// Sólo tiempo absoluto.
    pub fn at(absolute_time: impl Into<AbsoluteTime>) -> Self {
        Self { absolute_time: absolute_time.into(),
               relative_to: None,
               relative_offset: None }
    }

    /// Tiempo absoluto expresado además como `offset` respecto de `relative_to`.
    pub fn relative(absolute_time: impl Into<AbsoluteTime>,
                    relative_to: impl Into<String>,
                    offset: Duration)
                    -> Result<Self, CoreModelError> {
        Self::new(absolute_time, Some(relative_to.into()), Some(offset))
    }

    /// Tiempo absoluto asociado a un evento de referencia, sin desfase.
    pub fn anchored(absolute_time: impl Into<AbsoluteTime>, relative_to: impl Into<String>) -> Result<Self, CoreModelError> {
        Self::new(absolute_time, Some(relative_to.into()), None)
    }

    pub fn absolute_time(&self) -> &AbsoluteTime { &self.absolute_time }

    pub fn relative_to(&self) -> Option<&str> { self.relative_to.as_deref() }

    pub fn relative_offset(&self) -> Option<Duration> { self.relative_offset }

    /// Desfase en días completos (piso), tal como se serializa.
    pub fn relative_offset_days(&self) -> Option<i64> { self.relative_offset.map(floor_days) }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(ABSOLUTE_TIME_KEY.to_string(), Value::from(self.absolute_time.to_iso8601()));
        map.insert(RELATIVE_TO_KEY.to_string(), Value::from(self.relative_to.clone()));
        map.insert(RELATIVE_OFFSET_DAYS_KEY.to_string(), Value::from(self.relative_offset_days()));
        map
    }
}

fn floor_days(offset: Duration) -> i64 {
    // subsec_nanos lleva el mismo signo que la duración
    let nanos = i128::from(offset.num_seconds()) * NANOS_PER_SECOND + i128::from(offset.subsec_nanos());
    let days = nanos.div_euclid(i128::from(SECONDS_PER_DAY) * NANOS_PER_SECOND);
    days as i64
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp(absolute={}, relative_to=", self.absolute_time)?;
        match &self.relative_to {
            Some(label) => write!(f, "{label}")?,
            None => f.write_str("None")?,
        }
        f.write_str(", offset=")?;
        match &self.relative_offset {
            Some(offset) => write!(f, "{offset})"),
            None => f.write_str("None)"),
        }
    }
}
