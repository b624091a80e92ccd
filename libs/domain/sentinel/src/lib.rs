// [libs/domain/sentinel/src/lib.rs]

#![deny(missing_docs)]

//! # APARATO: SENTINEL DOMAIN ROOT (V4.1 - ZENITH GOLD)
//! CLASIFICACIÓN: DOMAIN CORE (ESTRATO L2)
//! RESPONSABILIDAD: AISLAMIENTO PROGRESIVO DE IDENTIDADES ABUSIVAS
//!
//! ## Visión Holística 2026
//! Frente a un servicio, cada petición entrega una identidad opaca y
//! recibe uno de tres veredictos: admitida, bloqueada en este ciclo o
//! baneada por un enfriamiento declarado. Las identidades que abusan
//! del bucket agregado son aisladas en estratos cada vez más
//! restrictivos hasta el baneo, mientras sus pares bien portados
//! conservan el servicio: todo sin alocación por identidad.
//!
//! ## Características de Élite
//! 1. **Promotion Ring:** Cuatro pools encadenados envejecen a las
//!    identidades bloqueadas desde la criba de ingreso hasta el censo
//!    de baneados.
//! 2. **Atomic Swap:** El pool de baneados se intercambia íntegro; los
//!    lectores jamás observan una estructura a medio podar.
//! 3. **Amortized Bookkeeping:** La poda y la promoción se disparan una
//!    vez por cada centenar de fallos, ganadas por un solo ejecutor.

/// Tunables del motor restringido con valores de fábrica y lectura de entorno.
pub mod calibration;

/// Veredictos de rechazo con digesto ofuscado de identidad.
pub mod errors;

/// Composición frontal: bucket agregado más motor restringido.
pub mod limiter;

/// Marcapasos de tokens del bucket agregado.
pub mod pacing;

/// Motor restringido: criba de ingreso, anillo de promoción y censo de baneados.
pub mod restricted;

/**
 * RE-EXPORTACIONES SOBERANAS (NOMINAL ACCESS)
 */

pub use crate::calibration::Calibration;
pub use crate::errors::Rejection;
pub use crate::limiter::{Analytics, Limiter};
pub use crate::pacing::{PacerRate, TokenPacer};
pub use crate::restricted::RestrictedEngine;

/**
 * PRELUDIO DEL CENTINELA
 */
pub mod prelude {
    pub use crate::calibration::Calibration;
    pub use crate::errors::Rejection;
    pub use crate::limiter::{Analytics, Limiter};
    pub use crate::pacing::{PacerRate, TokenPacer};
    pub use crate::restricted::RestrictedEngine;
}
