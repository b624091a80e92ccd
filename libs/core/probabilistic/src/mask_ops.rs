// [libs/core/probabilistic/src/mask_ops.rs]
/**
 * =================================================================
 * APARATO: MASK UNION OPERATIONS (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: FUSIÓN DE MÁSCARAS A TRAVÉS DE CELDAS Y POOLS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SNAPSHOT DISCIPLINE: Cada celda entrega su máscara bajo su propio
 *    cerrojo; la unión opera sobre copias íntegras, nunca sobre
 *    referencias vivas.
 * 2. SHAPE GUARD: Una divergencia de forma dentro de la unión delata un
 *    error de programación y se reporta como MatrixError; la disciplina
 *    de presets la hace inalcanzable en runtime.
 * =================================================================
 */

use crate::errors::MatrixError;
use crate::mask::MembershipMask;
use crate::partition::Partition;
use crate::pool::Pool;
use tracing::warn;

/// Une las máscaras de una colección de celdas en una sola superficie.
///
/// Las celdas con cerrojo envenenado se descartan con un log forense.
///
/// # Errors:
/// - `MatrixError::EmptyUnion` si ninguna celda aportó una máscara.
/// - `MatrixError::ShapeMismatch` ante geometrías divergentes.
pub fn union_of_partitions<'a, I>(partitions: I) -> Result<MembershipMask, MatrixError>
where
    I: IntoIterator<Item = &'a Partition>,
{
    let mut merged: Option<MembershipMask> = None;

    for cell in partitions {
        let Some(snapshot) = cell.snapshot_mask() else {
            warn!("⚠️ [UNION_SKIP]: Poisoned cell discarded from mask union.");
            continue;
        };

        match merged.as_mut() {
            None => merged = Some(snapshot),
            Some(surface) => surface.merge_from(&snapshot)?,
        }
    }

    merged.ok_or(MatrixError::EmptyUnion)
}

/// Une las máscaras de membresía de una colección de pools.
///
/// # Errors:
/// - `MatrixError::EmptyUnion` si la colección está vacía.
/// - `MatrixError::ShapeMismatch` ante geometrías divergentes.
pub fn union_of_pools<'a, I>(pools: I) -> Result<MembershipMask, MatrixError>
where
    I: IntoIterator<Item = &'a Pool>,
{
    let mut merged: Option<MembershipMask> = None;

    for pool in pools {
        match merged.as_mut() {
            None => merged = Some(pool.membership().duplicate()),
            Some(surface) => surface.merge_from(pool.membership())?,
        }
    }

    merged.ok_or(MatrixError::EmptyUnion)
}
