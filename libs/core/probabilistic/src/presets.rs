// [libs/core/probabilistic/src/presets.rs]
/**
 * =================================================================
 * APARATO: STRATUM SHAPE PRESETS (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: TABLA DE FORMAS PRECONFIGURADAS DE LOS ESTRATOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SIEVE SHAPE: Celdas pequeñas y baratas para identificar con
 *    rapidez a las identidades abusivas durante su paso por el anillo.
 * 2. BANNED SHAPE: Un censo mayor con muchas particiones; para cuando
 *    una identidad llega aquí la certeza es alta, y el número elevado
 *    de celdas permite liberar regiones a medida que envejecen.
 * 3. DISCIPLINE: Toda máscara del sistema nace de esta tabla; por eso
 *    las fusiones entre máscaras del mismo estrato nunca divergen.
 * =================================================================
 */

use crate::mask::MembershipMask;
use crate::tracker::Tracker;

/// Celdas del tracker criba (sieve).
pub const SIEVE_PARTITION_COUNT: usize = 32;

/// Capacidad nominal de cada máscara con forma criba.
pub const SIEVE_IDENTITY_CAPACITY: usize = 128;

/// Celdas del tracker de baneados.
pub const BANNED_PARTITION_COUNT: usize = 128;

/// Censo total de identidades repartido entre las celdas de baneados.
pub const BANNED_IDENTITY_UPPERBOUND: usize = 8192;

/// Tasa de falsos positivos compartida por todas las formas.
pub const PRESET_FALSE_POSITIVE_RATE: f64 = 0.001;

/// Máscara con forma criba: capacidad 128, FPR 0.001.
///
/// También guarda la entrada del anillo: limita la cantidad de pools a
/// consultar por identidad, tolerando aquí algo más de imprecisión.
#[must_use]
pub fn sieve_mask() -> MembershipMask {
    MembershipMask::with_estimates(SIEVE_IDENTITY_CAPACITY, PRESET_FALSE_POSITIVE_RATE)
}

/// Máscara acotada: reparte `identity_upperbound` entre `partition_count`
/// celdas con la tasa de falsos positivos indicada.
#[must_use]
pub fn bounded_mask(
    partition_count: usize,
    identity_upperbound: usize,
    false_positive_rate: f64,
) -> MembershipMask {
    let per_cell_capacity = identity_upperbound / partition_count.max(1);
    MembershipMask::with_estimates(per_cell_capacity, false_positive_rate)
}

/// Réplica vacía de la máscara por celda del estrato de baneados.
#[must_use]
pub fn banned_cell_mask() -> MembershipMask {
    bounded_mask(
        BANNED_PARTITION_COUNT,
        BANNED_IDENTITY_UPPERBOUND,
        PRESET_FALSE_POSITIVE_RATE,
    )
}

/// Tracker con forma criba: 32 celdas de capacidad 128.
#[must_use]
pub fn sieve_tracker() -> Tracker {
    Tracker::assemble(SIEVE_PARTITION_COUNT, &sieve_mask())
}

/// Tracker del estrato de baneados: 128 celdas de capacidad 64.
#[must_use]
pub fn banned_tracker() -> Tracker {
    Tracker::assemble(BANNED_PARTITION_COUNT, &banned_cell_mask())
}
