// [libs/core/probabilistic/src/partition.rs]
/**
 * =================================================================
 * APARATO: PARTITION CELL (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: CELDA DE MEMBRESÍA SERIALIZADA CON CONTADOR DE BLOQUEOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. WRITE SERIALIZATION: Toda mutación de la máscara pasa por el
 *    cerrojo de la celda; las lecturas de snapshot comparten el mismo
 *    cerrojo para observar un estado íntegro.
 * 2. ATOMIC TALLY: El contador de bloqueos es atómico y legible sin
 *    cerrojo; alimenta la poda de particiones inactivas.
 * 3. POISON SHIELD: Una celda envenenada degrada con un log forense,
 *    jamás propaga el pánico al hot path.
 * =================================================================
 */

use crate::mask::MembershipMask;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::error;

/// Celda particionada: una máscara de membresía bajo cerrojo de escritura
/// más el recuento atómico de bloqueos atribuidos a la celda.
pub struct Partition {
    blocked_request_count: AtomicU64,
    membership_cell: Mutex<MembershipMask>,
}

impl Partition {
    /// Envuelve una máscara en una celda recién estrenada (contador en cero).
    #[must_use]
    pub fn new(membership: MembershipMask) -> Self {
        Self {
            blocked_request_count: AtomicU64::new(0),
            membership_cell: Mutex::new(membership),
        }
    }

    /// Registra una identidad en la celda: cerrojo, alta en la máscara,
    /// incremento del contador de bloqueos.
    pub fn touch(&self, identity: &[u8]) {
        match self.membership_cell.lock() {
            Ok(mut membership) => {
                membership.add(identity);
                self.blocked_request_count.fetch_add(1, Ordering::Relaxed);
            }
            Err(poison_fault) => {
                error!(
                    "💀 [CELL_POISONED]: Partition write discarded: {}",
                    poison_fault
                );
            }
        }
    }

    /// Recuento de bloqueos acumulados por la celda.
    #[must_use]
    pub fn blocked_count(&self) -> u64 {
        self.blocked_request_count.load(Ordering::Relaxed)
    }

    /// Indica si la celda registró al menos un bloqueo.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.blocked_count() > 0
    }

    /// Copia íntegra de la máscara de la celda, tomada bajo cerrojo.
    ///
    /// Retorna `None` si el cerrojo está envenenado; la unión que la
    /// solicitó descarta la celda con un log forense.
    #[must_use]
    pub fn snapshot_mask(&self) -> Option<MembershipMask> {
        match self.membership_cell.lock() {
            Ok(membership) => Some(membership.duplicate()),
            Err(poison_fault) => {
                error!(
                    "💀 [CELL_POISONED]: Partition snapshot unavailable: {}",
                    poison_fault
                );
                None
            }
        }
    }

    /// Cardinalidad aproximada de la máscara de la celda (diagnóstico).
    #[must_use]
    pub fn approximated_cardinality(&self) -> u32 {
        match self.membership_cell.lock() {
            Ok(membership) => membership.approximated_cardinality(),
            Err(_) => 0,
        }
    }
}
