use crate::verdict::VerdictKind;

/// Per-batch bias signal tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BiasSignalCounts {
    /// Sentences whose dominant sentiment cleared the emotional threshold.
    pub emotional: u32,
    /// Manipulative flags; a sentence can raise one for emotion and one for toxicity.
    pub manipulative: u32,
    /// Sentences with a left- or right-leaning label.
    pub political: u32,
    /// Sentences classified as subjective (before the report list is capped).
    pub opinion: u32,
}

impl BiasSignalCounts {
    pub fn bias_score(&self) -> u8 {
        super::bias_score(self)
    }
}

/// Verdict tallies over every produced claim finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounts {
    pub supported: u32,
    pub misinformation: u32,
    pub uncertain: u32,
}

impl VerdictCounts {
    pub fn tally<'a>(kinds: impl IntoIterator<Item = &'a VerdictKind>) -> Self {
        let mut counts = Self::default();
        for kind in kinds {
            counts.record(*kind);
        }
        counts
    }

    pub fn record(&mut self, kind: VerdictKind) {
        let slot = match kind {
            VerdictKind::Supported => &mut self.supported,
            VerdictKind::Misinformation => &mut self.misinformation,
            VerdictKind::Uncertain => &mut self.uncertain,
        };
        *slot = slot.saturating_add(1);
    }

    pub fn total(&self) -> u32 {
        self.supported + self.misinformation + self.uncertain
    }

    pub fn misinformation_score(&self) -> u8 {
        super::misinformation_score(self)
    }
}
