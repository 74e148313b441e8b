use smallvec::SmallVec;

/// How revealed entries of one intersection batch are spread out in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStagger {
    Immediate,
    /// Delay of `step_ms * position` where position is the entry's index in
    /// the delivered batch.
    PerEntry { step_ms: u32 },
}

impl RevealStagger {
    #[inline]
    pub fn delay_ms(self, position: usize) -> u32 {
        match self {
            RevealStagger::Immediate => 0,
            RevealStagger::PerEntry { step_ms } => step_ms.saturating_mul(position as u32),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Suppressed,
    Revealed,
}

/// One intersection report: which target and whether it crossed the threshold.
#[derive(Clone, Copy, Debug)]
pub struct Sighting {
    pub target: usize,
    pub intersecting: bool,
}

/// A reveal to apply to `target` after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealAction {
    pub target: usize,
    pub delay_ms: u32,
}

pub type RevealBatch = SmallVec<[RevealAction; 8]>;

/// Tracks the one-way suppressed -> revealed transition for a fixed target set.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
    stagger: RevealStagger,
}

impl RevealTracker {
    pub fn new(targets: usize, stagger: RevealStagger) -> Self {
        Self {
            phases: vec![RevealPhase::Suppressed; targets],
            stagger,
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    #[cfg(test)]
    pub fn phase(&self, target: usize) -> Option<RevealPhase> {
        self.phases.get(target).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|p| **p == RevealPhase::Revealed)
            .count()
    }

    /// Consume one observer batch. Targets are marked revealed immediately so a
    /// later batch can never schedule them again, even while a staggered
    /// reveal is still pending.
    pub fn observe(&mut self, batch: &[Sighting]) -> RevealBatch {
        let mut out = RevealBatch::new();
        for (position, sighting) in batch.iter().enumerate() {
            if !sighting.intersecting {
                continue;
            }
            let Some(phase) = self.phases.get_mut(sighting.target) else {
                continue;
            };
            if *phase == RevealPhase::Revealed {
                continue;
            }
            *phase = RevealPhase::Revealed;
            out.push(RevealAction {
                target: sighting.target,
                delay_ms: self.stagger.delay_ms(position),
            });
        }
        out
    }
}
