// [libs/core/probabilistic/src/lib.rs]

#![deny(missing_docs)]

//! # APARATO: PROBABILISTIC STRATUM ROOT (V4.1 - ZENITH GOLD)
//! CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
//! RESPONSABILIDAD: ORQUESTACIÓN Y EXPOSICIÓN DEL MOTOR PROBABILÍSTICO
//!
//! ## Visión Holística 2026
//! Actúa como la autoridad suprema del rastreo de identidades abusivas.
//! Esta versión sella la integración entre la máscara de membresía
//! fusionable, las celdas particionadas con contador de bloqueos y los
//! pools de admisión probabilística que alimentan al centinela L2.
//!
//! ## Características de Élite
//! 1. **Merge-Safe Masks:** Toda máscara nace de la semilla unificada;
//!    las formas iguales son fusionables bit a bit.
//! 2. **Salted Routing:** El ruteo de particiones deriva del digesto
//!    MD5 del prefijo salado, decorrelacionando los estratos duplicados.
//! 3. **Poison Shielding:** Propaga la resiliencia de cerrojos (locks)
//!    a toda la crate; una celda envenenada degrada, nunca colapsa.
//! 4. **Higiene L1:** Erradicación total de advertencias del compilador.

/// Definiciones de errores semánticos para el triaje programático de fallos.
pub mod errors;

/// Máscara de membresía: envoltorio fusionable de la matriz de Bloom.
pub mod mask;

/// Utilidades de unión de máscaras a través de particiones y pools.
pub mod mask_ops;

/// Celda particionada: máscara serializada más contador de bloqueos.
pub mod partition;

/// Formas preconfiguradas de los estratos (sieve y banned).
pub mod presets;

/// Pool de admisión: tracker, máscara de membresía y testigo de inserción.
pub mod pool;

/// Tracker salado: arreglo fijo de particiones indexado por digesto.
pub mod tracker;

/**
 * RE-EXPORTACIONES SOBERANAS (NOMINAL ACCESS)
 *
 * Centralizamos los tipos fundamentales para eliminar el ruido de
 * importación en el estrato superior (L2-Sentinel).
 */

pub use crate::errors::MatrixError;
pub use crate::mask::{MaskShape, MembershipMask};
pub use crate::partition::Partition;
pub use crate::pool::Pool;
pub use crate::tracker::Tracker;

/**
 * PRELUDIO PROBABILÍSTICO
 *
 * Colección de tipos de alta frecuencia para inyección directa en motores.
 */
pub mod prelude {
    pub use crate::errors::MatrixError;
    pub use crate::mask::{MaskShape, MembershipMask};
    pub use crate::mask_ops::{union_of_partitions, union_of_pools};
    pub use crate::partition::Partition;
    pub use crate::pool::Pool;
    pub use crate::presets;
    pub use crate::tracker::Tracker;
}
