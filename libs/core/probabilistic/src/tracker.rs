// [libs/core/probabilistic/src/tracker.rs]
/**
 * =================================================================
 * APARATO: SALTED IDENTITY TRACKER (V4.1 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: RUTEO DETERMINISTA DE IDENTIDADES A CELDAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SALTED ROUTING: El índice de partición deriva del digesto MD5 del
 *    prefijo salado; trackers duplicados con sales frescas rutean la
 *    misma identidad a celdas independientes.
 * 2. ACTIVE PRUNING: Expone las celdas con bloqueos acumulados para que
 *    la poda del estrato superior libere regiones inertes.
 * 3. ZERO-ALLOC HOT PATH: La llave salada se digiere por streaming;
 *    la inserción no aloca memoria por identidad.
 *
 * # Mathematical Proof (Routing Independence):
 * Para sales s1 ≠ s2, los digestos MD5(s1 ∥ id) y MD5(s2 ∥ id) son
 * estadísticamente independientes; la probabilidad de que dos trackers
 * duplicados coloquen una identidad en el mismo índice es 1/N.
 * =================================================================
 */

use crate::mask::MembershipMask;
use crate::partition::Partition;

/// Deriva el índice de celda para una identidad bajo la sal indicada.
///
/// El digesto se computa por streaming sobre `sal_le ∥ identidad`; los
/// 8 bytes bajos del digesto (little-endian) se reducen módulo N.
#[must_use]
pub fn compute_partition_index(
    routing_salt: u64,
    partition_count: usize,
    identity: &[u8],
) -> usize {
    let mut digest_context = md5::Context::new();
    digest_context.consume(routing_salt.to_le_bytes());
    digest_context.consume(identity);
    let digest = digest_context.compute();

    let mut low_word = [0u8; 8];
    low_word.copy_from_slice(&digest.0[..8]);

    (u64::from_le_bytes(low_word) % partition_count as u64) as usize
}

/// Arreglo fijo de celdas particionadas bajo una sal de ruteo aleatoria.
pub struct Tracker {
    routing_salt: u64,
    partitions: Vec<Partition>,
    shape_prototype: MembershipMask,
}

impl Tracker {
    /// Ensambla un tracker de `partition_count` celdas, cada una con una
    /// réplica vacía de la máscara prototipo, bajo una sal fresca.
    #[must_use]
    pub fn assemble(partition_count: usize, shape_prototype: &MembershipMask) -> Self {
        let safe_partition_count = if partition_count == 0 { 1 } else { partition_count };

        let mut partitions = Vec::with_capacity(safe_partition_count);
        for _ in 0..safe_partition_count {
            partitions.push(Partition::new(shape_prototype.duplicate_empty()));
        }

        Self {
            routing_salt: rand::random::<u64>(),
            partitions,
            shape_prototype: shape_prototype.duplicate_empty(),
        }
    }

    /// Produce un tracker gemelo: misma geometría, celdas vacías y una
    /// sal de ruteo nueva.
    ///
    /// La sal fresca es un mecanismo de correctitud: identidades
    /// reinyectadas en un estrato nuevo caen en celdas distintas a las
    /// del estrato anterior, evitando que una sola celda acumule
    /// tráfico correlacionado a lo largo del pipeline.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::assemble(self.partitions.len(), &self.shape_prototype)
    }

    /// Registra una identidad en la celda que le corresponde por ruteo.
    #[inline(always)]
    pub fn insert(&self, identity: &[u8]) {
        let target_index =
            compute_partition_index(self.routing_salt, self.partitions.len(), identity);
        self.partitions[target_index].touch(identity);
    }

    /// Celdas que registraron al menos un bloqueo.
    #[must_use]
    pub fn active(&self) -> Vec<&Partition> {
        self.partitions
            .iter()
            .filter(|cell| cell.is_active())
            .collect()
    }

    /// Acceso de solo lectura a todas las celdas del tracker.
    #[must_use]
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Sal de ruteo del tracker (diagnóstico).
    #[must_use]
    pub fn salt(&self) -> u64 {
        self.routing_salt
    }

    /// Réplica vacía de la máscara prototipo de las celdas.
    #[must_use]
    pub fn prototype_mask(&self) -> MembershipMask {
        self.shape_prototype.duplicate_empty()
    }
}
