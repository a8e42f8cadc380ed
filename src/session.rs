use crate::error::{DecodeError, MissingKeysError};
use crate::extract::{body, face, undertone};
use crate::models::{AttributeDelta, AttributeRecord, Recommendation};
use crate::recommend;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Which extractor a submitted photo feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStage {
    Face,
    Vein,
    Body,
}

/// Linear wizard state. Transitions are explicit: `next()` on a completed
/// step, `back()` from anywhere but the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    FaceUpload,
    VeinUpload,
    BodyUpload,
    Recommend,
}

impl WizardStep {
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Welcome => WizardStep::FaceUpload,
            WizardStep::FaceUpload => WizardStep::VeinUpload,
            WizardStep::VeinUpload => WizardStep::BodyUpload,
            WizardStep::BodyUpload => WizardStep::Recommend,
            WizardStep::Recommend => WizardStep::Recommend,
        }
    }

    pub fn back(self) -> WizardStep {
        match self {
            WizardStep::Welcome => WizardStep::Welcome,
            WizardStep::FaceUpload => WizardStep::Welcome,
            WizardStep::VeinUpload => WizardStep::FaceUpload,
            WizardStep::BodyUpload => WizardStep::VeinUpload,
            WizardStep::Recommend => WizardStep::BodyUpload,
        }
    }

    /// The upload stage this step expects, if it is an upload step.
    pub fn stage(self) -> Option<WizardStage> {
        match self {
            WizardStep::FaceUpload => Some(WizardStage::Face),
            WizardStep::VeinUpload => Some(WizardStage::Vein),
            WizardStep::BodyUpload => Some(WizardStage::Body),
            WizardStep::Welcome | WizardStep::Recommend => None,
        }
    }
}

/// One user's trip through the wizard.
///
/// Owns the accumulating attribute record, the cached recommendation and the
/// RNG behind the random stages. Created at session start, dropped at session
/// end; nothing is persisted.
#[derive(Debug)]
pub struct WizardSession {
    step: WizardStep,
    record: AttributeRecord,
    cached: Option<Recommendation>,
    rng: StdRng,
}

impl WizardSession {
    /// Session with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Session with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            step: WizardStep::Welcome,
            record: AttributeRecord::new(),
            cached: None,
            rng,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    pub fn go_back(&mut self) {
        self.step = self.step.back();
    }

    pub fn record(&self) -> &AttributeRecord {
        &self.record
    }

    /// Run one stage's extractor over uploaded photo bytes and merge the
    /// result into the record.
    ///
    /// On a decode failure the record is untouched and the stage is not
    /// complete. A successful submission drops any cached recommendation,
    /// since the record it was computed from has changed.
    pub fn submit_image(
        &mut self,
        stage: WizardStage,
        bytes: &[u8],
    ) -> Result<AttributeDelta, DecodeError> {
        let delta = match stage {
            WizardStage::Face => face::extract(bytes)?.delta(),
            WizardStage::Vein => undertone::extract(bytes)?.delta(),
            WizardStage::Body => body::extract(bytes, &mut self.rng)?.delta(),
        };
        self.record.merge(&delta);
        self.cached = None;
        Ok(delta)
    }

    /// Compute the recommendation, or return it from cache.
    ///
    /// Refuses with the exact list of absent keys while the record is
    /// incomplete. Once computed the result is cached, so re-displaying does
    /// not re-sample.
    pub fn recommendation(&mut self) -> Result<Recommendation, MissingKeysError> {
        if let Some(cached) = &self.cached {
            return Ok(cached.clone());
        }
        let result = recommend::predict(&self.record, &mut self.rng)?;
        self.cached = Some(result.clone());
        Ok(result)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
