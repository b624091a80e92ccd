// libs/core/probabilistic/src/errors.rs
// =================================================================
// APARATO: PROBABILISTIC ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL ESTRATO PROBABILÍSTICO
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los errores posibles durante la manipulación de máscaras.
///
/// Este enum centraliza los fallos que pueden ocurrir al fusionar o
/// copiar estructuras probabilísticas. La disciplina de formas
/// preconfiguradas (presets) garantiza que en runtime el estrato L2
/// nunca los observe; su aparición delata un error de programación.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Intento de fusión entre máscaras de formas divergentes.
    ///
    /// Dos máscaras solo son fusionables cuando comparten:
    /// - La cantidad de bits de la matriz.
    /// - La cantidad de funciones hash.
    /// - Las llaves SipHash de la semilla unificada.
    #[error("formas de máscara divergentes: {left_bits}b/{left_hashes}h vs {right_bits}b/{right_hashes}h")]
    ShapeMismatch {
        /// Bits de la matriz receptora.
        left_bits: u64,
        /// Funciones hash de la matriz receptora.
        left_hashes: u32,
        /// Bits de la matriz entrante.
        right_bits: u64,
        /// Funciones hash de la matriz entrante.
        right_hashes: u32,
    },

    /// Unión solicitada sobre una colección sin máscaras legibles.
    ///
    /// Ocurre si la colección está vacía o si todas las celdas fueron
    /// descartadas por envenenamiento de cerrojo.
    #[error("unión de máscaras sobre una colección vacía")]
    EmptyUnion,
}
