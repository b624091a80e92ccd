// [libs/core/probabilistic/src/pool.rs]
/**
 * =================================================================
 * APARATO: ADMISSION POOL (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: MEMBRESÍA PROBABILÍSTICA CON TESTIGO DE INSERCIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. AUTHORITATIVE MASK: La máscara de membresía es la superficie de
 *    consulta; es inmutable tras el ensamblado y se lee sin cerrojo.
 * 2. INSERTED WITNESS: Un testigo perezoso distingue las identidades
 *    realmente insertadas de las heredadas por uniones de máscaras de
 *    otra procedencia.
 * 3. PROBABILISTIC RELEASE: El ratio de admisión es el dial entre la
 *    membresía determinista (1.0) y la liberación parcial (<1.0) que
 *    deja escapar identidades en enfriamiento.
 * 4. WRITE-BACK TRACKING: Todo acierto se anota en el tracker del pool
 *    para que la celda correspondiente acumule su recuento de bloqueos.
 * =================================================================
 */

use crate::mask::MembershipMask;
use crate::mask_ops;
use crate::presets;
use crate::tracker::Tracker;
use rand::Rng;
use std::sync::RwLock;
use tracing::{error, warn};

/// Pool de admisión: tracker salado, máscara autoritativa de membresía
/// y testigo opcional de inserciones.
pub struct Pool {
    admission_ratio: f32,
    tracker: Tracker,
    membership: MembershipMask,
    inserted_witness: RwLock<Option<MembershipMask>>,
}

impl Pool {
    /// Ensambla un pool a partir de sus tres componentes.
    #[must_use]
    pub fn assemble(admission_ratio: f32, tracker: Tracker, membership: MembershipMask) -> Self {
        Self {
            admission_ratio,
            tracker,
            membership,
            inserted_witness: RwLock::new(None),
        }
    }

    /// Construye un pool cuya membresía es la unión de las celdas del
    /// tracker fuente, rastreado por un gemelo con sal fresca.
    #[must_use]
    pub fn from_tracker(admission_ratio: f32, source: &Tracker) -> Self {
        let membership = match mask_ops::union_of_partitions(source.partitions().iter()) {
            Ok(surface) => surface,
            Err(fault) => {
                error!(
                    "💀 [POOL_ASSEMBLY]: Source tracker yielded no mask ({fault}); starting empty."
                );
                source.prototype_mask()
            }
        };

        Self::assemble(admission_ratio, source.duplicate(), membership)
    }

    /// Construye el pool del estrato de baneados: membresía entregada,
    /// tracker preconfigurado de 128 celdas y admisión determinista.
    #[must_use]
    pub fn banned(membership: MembershipMask) -> Self {
        Self::assemble(1.0, presets::banned_tracker(), membership)
    }

    /// Consulta la membresía de una identidad sin cerrojo de escritura.
    ///
    /// # Logic:
    /// 1. Fallo de la máscara autoritativa → ausencia definitiva.
    /// 2. Testigo materializado sin la identidad → membresía heredada de
    ///    otra procedencia, se reporta ausencia.
    /// 3. Sorteo de admisión fallido → liberación probabilística.
    /// 4. Acierto: se anota en el tracker y se reporta presencia.
    #[must_use]
    pub fn test(&self, identity: &[u8]) -> bool {
        if !self.membership.test(identity) {
            return false;
        }

        match self.inserted_witness.read() {
            Ok(witness_slot) => {
                if let Some(witness) = witness_slot.as_ref() {
                    if !witness.test(identity) {
                        return false;
                    }
                }
            }
            Err(_) => {
                warn!("⚠️ [WITNESS_POISONED]: Defaulting to negative membership.");
                return false;
            }
        }

        let admitted = self.admission_ratio > rand::thread_rng().gen::<f32>();
        if !admitted {
            return false;
        }

        self.tracker.insert(identity);
        true
    }

    /// Inserta una identidad bajo el cerrojo del pool.
    ///
    /// El testigo se materializa perezosamente como réplica vacía de la
    /// máscara autoritativa en la primera inserción.
    pub fn insert(&self, identity: &[u8]) -> bool {
        match self.inserted_witness.write() {
            Ok(mut witness_slot) => {
                let witness =
                    witness_slot.get_or_insert_with(|| self.membership.duplicate_empty());
                self.tracker.insert(identity);
                witness.add(identity);
                true
            }
            Err(poison_fault) => {
                error!(
                    "💀 [WITNESS_POISONED]: Pool insert discarded: {}",
                    poison_fault
                );
                false
            }
        }
    }

    /// Superficie autoritativa de membresía del pool.
    #[must_use]
    pub fn membership(&self) -> &MembershipMask {
        &self.membership
    }

    /// Tracker de anotación del pool.
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Ratio de admisión del pool.
    #[must_use]
    pub fn admission_ratio(&self) -> f32 {
        self.admission_ratio
    }
}
