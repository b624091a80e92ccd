// [libs/core/probabilistic/src/mask.rs]
/**
 * =================================================================
 * APARATO: MEMBERSHIP MASK WRAPPER (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: ABSTRACCIÓN FUSIONABLE DE LA MATRIZ DE BLOOM
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. UNIFIED SEED: Toda máscara nace de la misma semilla SipHash;
 *    dos máscaras de forma idéntica indexan bits idénticos y son,
 *    por lo tanto, fusionables mediante unión bit a bit.
 * 2. SHAPE DISCIPLINE: La forma (bits, hashes, llaves) viaja junto a
 *    la matriz y se verifica antes de cada fusión.
 * 3. CARDINALITY ESTIMATE: Expone el estimador clásico de población
 *    -(m/k)·ln(1 - X/m) redondeado al entero más cercano.
 *
 * # Mathematical Proof (Bloom Union):
 * Para filtros con parámetros (m, k) y llaves idénticas, la unión de
 * los vectores de bits es exactamente el filtro del conjunto unión:
 * cada identidad activa los mismos k índices en ambas matrices.
 * =================================================================
 */

use crate::errors::MatrixError;
use bloomfilter::Bloom;

/// Llaves SipHash unificadas de la crate: fijan el hashing de toda máscara.
///
/// Sin ellas, cada matriz generaría llaves aleatorias propias y la unión
/// bit a bit entre máscaras de forma idéntica dejaría de ser válida.
const UNIFIED_SIP_KEYS: [(u64, u64); 2] = [
    (0x9E37_79B9_7F4A_7C15, 0xC37B_019E_44D2_5A08),
    (0x38A5_700B_F186_2EC9, 0x5793_1DE4_6A05_BF60),
];

/// Huella estructural de una máscara: dos máscaras son fusionables
/// si y solo si sus huellas son idénticas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskShape {
    /// Cantidad de bits de la matriz subyacente.
    pub bit_count: u64,
    /// Cantidad de funciones hash aplicadas por consulta.
    pub hash_count: u32,
    /// Llaves SipHash derivadas de la semilla unificada.
    pub sip_keys: [(u64, u64); 2],
}

/// Superficie autoritativa de membresía para el rastreo de identidades.
pub struct MembershipMask {
    bloom_matrix: Bloom<[u8]>,
}

impl MembershipMask {
    /// Sintetiza una máscara nueva para la capacidad y la tasa de falsos
    /// positivos indicadas, anclada a las llaves unificadas.
    ///
    /// La geometría se deriva de la fórmula óptima clásica:
    /// `m = ⌈-n·ln(p) / ln²(2)⌉` bits y `k = max(1, ⌊(m/n)·ln(2)⌉)` hashes.
    #[must_use]
    pub fn with_estimates(identity_capacity: usize, false_positive_rate: f64) -> Self {
        let nominal_capacity = if identity_capacity == 0 { 1 } else { identity_capacity };
        let acceptable_error_rate = if false_positive_rate <= 0.0 {
            0.000_000_1
        } else {
            false_positive_rate
        };

        let bit_count = optimal_bit_count(nominal_capacity, acceptable_error_rate);
        let hash_count = optimal_hash_count(bit_count, nominal_capacity);
        let zeroed_bitmap = vec![0u8; ((bit_count + 7) / 8) as usize];

        Self {
            bloom_matrix: Bloom::from_existing(
                &zeroed_bitmap,
                bit_count,
                hash_count,
                UNIFIED_SIP_KEYS,
            ),
        }
    }

    /// Consulta la presencia probable de una identidad.
    ///
    /// # Returns:
    /// - `true` ante una colisión probable (FPR controlado).
    /// - `false` ante la ausencia absoluta del rastro.
    #[must_use]
    #[inline(always)]
    pub fn test(&self, identity: &[u8]) -> bool {
        self.bloom_matrix.check(identity)
    }

    /// Registra una identidad en la matriz.
    #[inline(always)]
    pub fn add(&mut self, identity: &[u8]) {
        self.bloom_matrix.set(identity);
    }

    /// Apaga todos los bits de la matriz preservando su forma.
    pub fn clear_all(&mut self) {
        self.bloom_matrix.clear();
    }

    /// Retorna la huella estructural de la máscara.
    #[must_use]
    pub fn shape(&self) -> MaskShape {
        MaskShape {
            bit_count: self.bloom_matrix.number_of_bits(),
            hash_count: self.bloom_matrix.number_of_hash_functions(),
            sip_keys: self.bloom_matrix.sip_keys(),
        }
    }

    /// Produce una réplica exacta: misma forma, mismos bits encendidos.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let shape = self.shape();
        Self {
            bloom_matrix: Bloom::from_existing(
                &self.bloom_matrix.bitmap(),
                shape.bit_count,
                shape.hash_count,
                shape.sip_keys,
            ),
        }
    }

    /// Produce una réplica vacía: misma forma, todos los bits apagados.
    #[must_use]
    pub fn duplicate_empty(&self) -> Self {
        let mut replica = self.duplicate();
        replica.clear_all();
        replica
    }

    /// Fusiona la máscara entrante dentro de la receptora (unión bit a bit).
    ///
    /// # Errors:
    /// `MatrixError::ShapeMismatch` si las huellas estructurales divergen;
    /// la disciplina de presets garantiza que esto no ocurre en runtime.
    pub fn merge_from(&mut self, incoming: &Self) -> Result<(), MatrixError> {
        let receiver_shape = self.shape();
        let incoming_shape = incoming.shape();

        if receiver_shape != incoming_shape {
            return Err(MatrixError::ShapeMismatch {
                left_bits: receiver_shape.bit_count,
                left_hashes: receiver_shape.hash_count,
                right_bits: incoming_shape.bit_count,
                right_hashes: incoming_shape.hash_count,
            });
        }

        let mut merged_bitmap = self.bloom_matrix.bitmap();
        for (receiver_byte, incoming_byte) in
            merged_bitmap.iter_mut().zip(incoming.bloom_matrix.bitmap())
        {
            *receiver_byte |= incoming_byte;
        }

        self.bloom_matrix = Bloom::from_existing(
            &merged_bitmap,
            receiver_shape.bit_count,
            receiver_shape.hash_count,
            receiver_shape.sip_keys,
        );

        Ok(())
    }

    /// Estima la cantidad de identidades registradas en la máscara.
    ///
    /// # Logic:
    /// Estimador clásico de población de un filtro de Bloom:
    /// `n ≈ -(m/k) · ln(1 - X/m)` donde X es la cantidad de bits
    /// encendidos. Se redondea al entero más cercano; una matriz
    /// saturada reporta el tope del dominio.
    #[must_use]
    pub fn approximated_cardinality(&self) -> u32 {
        let bit_total = self.bloom_matrix.number_of_bits() as f64;
        let hash_total = f64::from(self.bloom_matrix.number_of_hash_functions());
        let lit_bits = self
            .bloom_matrix
            .bitmap()
            .iter()
            .map(|byte| byte.count_ones())
            .sum::<u32>() as f64;

        if lit_bits <= 0.0 {
            return 0;
        }
        if lit_bits >= bit_total {
            return u32::MAX;
        }

        (-(bit_total / hash_total) * (1.0 - lit_bits / bit_total).ln()).round() as u32
    }
}

/// Bits óptimos de la matriz para la capacidad y el FPR deseados.
fn optimal_bit_count(identity_capacity: usize, false_positive_rate: f64) -> u64 {
    let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
    ((-(identity_capacity as f64) * false_positive_rate.ln()) / ln2_squared).ceil() as u64
}

/// Cantidad óptima de funciones hash para la geometría derivada.
fn optimal_hash_count(bit_count: u64, identity_capacity: usize) -> u32 {
    let optimal = ((bit_count as f64 / identity_capacity as f64) * std::f64::consts::LN_2).round();
    (optimal as u32).max(1)
}
