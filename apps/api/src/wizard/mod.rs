//! Multi-step profile wizard.
//!
//! Holds the in-progress draft, walks the four form steps, and on submit writes
//! the cleaned profile into the session, enriches it and moves on to preview.
//! Preview and download actions read everything back from the session.

pub mod validation;

use thiserror::Error;
use tracing::{debug, info};

use crate::enrichment::EnrichmentClient;
use crate::export::{ExportDocument, ExportError, ExportPackage, ExportQueue, ExportedFile};
use crate::models::{
    EducationEntry, ExperienceEntry, PartialProfile, PersonalInfo, Profile, TemplateVariant,
};
use crate::render::{renderer_for, VisualDocument};
use crate::session::{SessionHandle, StoreError};

pub use validation::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    PersonalInfo,
    Education,
    Experience,
    SkillsAndTarget,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PersonalInfo,
        WizardStep::Education,
        WizardStep::Experience,
        WizardStep::SkillsAndTarget,
    ];

    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Education => "Education",
            WizardStep::Experience => "Experience",
            WizardStep::SkillsAndTarget => "Skills & Target",
        }
    }

    fn next(self) -> Self {
        match self {
            WizardStep::PersonalInfo => WizardStep::Education,
            WizardStep::Education => WizardStep::Experience,
            WizardStep::Experience | WizardStep::SkillsAndTarget => WizardStep::SkillsAndTarget,
        }
    }

    fn previous(self) -> Self {
        match self {
            WizardStep::PersonalInfo | WizardStep::Education => WizardStep::PersonalInfo,
            WizardStep::Experience => WizardStep::Education,
            WizardStep::SkillsAndTarget => WizardStep::Experience,
        }
    }
}

/// Where the user should be looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Form(WizardStep),
    Preview,
    Download,
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{} field(s) need attention, first: {}", .0.len(), .0[0])]
    Invalid(Vec<FieldError>),

    #[error("no {section} entry at index {index}")]
    NoSuchEntry { section: &'static str, index: usize },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Blank form: one empty education row, one empty experience row, one empty skill.
fn blank_draft() -> Profile {
    Profile {
        education: vec![EducationEntry::default()],
        experience: vec![ExperienceEntry::default()],
        skills: vec![String::new()],
        ..Default::default()
    }
}

pub struct WizardController {
    session: SessionHandle,
    enrichment: EnrichmentClient,
    exports: ExportQueue,
    step: WizardStep,
    draft: Profile,
    errors: Vec<FieldError>,
}

impl WizardController {
    pub fn new(session: SessionHandle, enrichment: EnrichmentClient, exports: ExportQueue) -> Self {
        Self {
            session,
            enrichment,
            exports,
            step: WizardStep::PersonalInfo,
            draft: blank_draft(),
            errors: Vec::new(),
        }
    }

    // ── navigation ──────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Moves forward without validating; validation happens on submit.
    pub fn next(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Errors from the last submit, cleared by a successful one.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn errors_for(&self, step: WizardStep) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.step == step)
    }

    // ── draft editing ───────────────────────────────────────────────────────

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn set_personal_info(&mut self, info: PersonalInfo) {
        self.draft.personal_info = info;
    }

    /// Appends an empty row and returns its index.
    pub fn add_education(&mut self) -> usize {
        self.draft.education.push(EducationEntry::default());
        self.draft.education.len() - 1
    }

    pub fn update_education(&mut self, index: usize, entry: EducationEntry) -> Result<(), WizardError> {
        let slot = self
            .draft
            .education
            .get_mut(index)
            .ok_or(WizardError::NoSuchEntry {
                section: "education",
                index,
            })?;
        *slot = entry;
        Ok(())
    }

    pub fn remove_education(&mut self, index: usize) -> Result<EducationEntry, WizardError> {
        if index >= self.draft.education.len() {
            return Err(WizardError::NoSuchEntry {
                section: "education",
                index,
            });
        }
        Ok(self.draft.education.remove(index))
    }

    pub fn add_experience(&mut self) -> usize {
        self.draft.experience.push(ExperienceEntry::default());
        self.draft.experience.len() - 1
    }

    pub fn update_experience(&mut self, index: usize, entry: ExperienceEntry) -> Result<(), WizardError> {
        let slot = self
            .draft
            .experience
            .get_mut(index)
            .ok_or(WizardError::NoSuchEntry {
                section: "experience",
                index,
            })?;
        *slot = entry;
        Ok(())
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<ExperienceEntry, WizardError> {
        if index >= self.draft.experience.len() {
            return Err(WizardError::NoSuchEntry {
                section: "experience",
                index,
            });
        }
        Ok(self.draft.experience.remove(index))
    }

    pub fn set_skills(&mut self, skills: Vec<String>) {
        self.draft.skills = skills;
    }

    pub fn add_skill(&mut self, skill: impl Into<String>) {
        self.draft.skills.push(skill.into());
    }

    pub fn set_target(&mut self, role: impl Into<String>, company: Option<String>) {
        self.draft.target_role = role.into();
        self.draft.target_company = company;
    }

    // ── submit ──────────────────────────────────────────────────────────────

    /// Validates the whole draft; on failure jumps to the first step with an error.
    /// On success stores the cleaned profile, enriches it, stores the enriched
    /// profile and routes to preview.
    pub async fn submit(&mut self) -> Result<Route, WizardError> {
        let errors = validation::validate(&self.draft);
        if let Some(first) = errors.first() {
            self.step = first.step;
            debug!(count = errors.len(), step = ?self.step, "wizard submit rejected");
            self.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }
        self.errors.clear();

        let cleaned = clean_profile(self.draft.clone());
        self.session
            .update_profile(PartialProfile::replace_all(cleaned.clone()))
            .await?;

        let enrichment = self.enrichment.enrich_resume(&cleaned).await;
        self.session
            .update_profile(PartialProfile {
                experience: Some(cleaned.clone().with_enrichment(enrichment.clone()).experience),
                enrichment: Some(Some(enrichment)),
                ..Default::default()
            })
            .await?;

        info!(
            experience = cleaned.experience.len(),
            education = cleaned.education.len(),
            "profile submitted and enriched"
        );
        Ok(Route::Preview)
    }

    // ── preview ─────────────────────────────────────────────────────────────

    /// Preview and download need a profile with a name; otherwise back to the form.
    pub async fn guard(&self, route: Route) -> Result<Route, WizardError> {
        match route {
            Route::Preview | Route::Download => {
                let profile = self.session.profile().await?;
                if profile.personal_info.full_name.trim().is_empty() {
                    Ok(Route::Form(WizardStep::PersonalInfo))
                } else {
                    Ok(route)
                }
            }
            Route::Form(_) => Ok(route),
        }
    }

    pub async fn download_route(&self) -> Result<Route, WizardError> {
        self.guard(Route::Download).await
    }

    pub async fn select_template(&self, variant: TemplateVariant) -> Result<(), WizardError> {
        self.session.set_selected_template(variant).await?;
        Ok(())
    }

    /// The stored profile rendered with the selected template.
    pub async fn preview(&self) -> Result<VisualDocument, WizardError> {
        let profile = self.session.profile().await?;
        let variant = self.session.selected_template().await?;
        Ok(renderer_for(variant).render(&profile))
    }

    pub async fn generate_cover_letter(
        &self,
        job_description: Option<&str>,
    ) -> Result<String, WizardError> {
        let profile = self.session.profile().await?;
        let letter = self
            .enrichment
            .enrich_cover_letter(&profile, job_description)
            .await;
        self.session.set_cover_letter(letter.clone()).await?;
        Ok(letter)
    }

    // ── downloads ───────────────────────────────────────────────────────────

    async fn resume_document(&self) -> Result<Option<ExportDocument>, WizardError> {
        let profile = self.session.profile().await?;
        let variant = self.session.selected_template().await?;
        Ok(ExportDocument::resume(&profile, variant)?)
    }

    async fn cover_letter_document(&self) -> Result<Option<ExportDocument>, WizardError> {
        let profile = self.session.profile().await?;
        let letter = self.session.cover_letter().await?;
        Ok(ExportDocument::cover_letter(&profile, &letter)?)
    }

    pub async fn download_resume(&self) -> Result<Option<ExportedFile>, WizardError> {
        let document = self.resume_document().await?;
        Ok(self.exports.export_to_file(document).await?)
    }

    /// `Ok(None)` until a cover letter has been generated.
    pub async fn download_cover_letter(&self) -> Result<Option<ExportedFile>, WizardError> {
        let document = self.cover_letter_document().await?;
        Ok(self.exports.export_to_file(document).await?)
    }

    pub async fn download_package(&self) -> Result<ExportPackage, WizardError> {
        let resume = self.resume_document().await?;
        let cover_letter = self.cover_letter_document().await?;
        Ok(self.exports.export_package(resume, cover_letter).await?)
    }

    /// Clears the session and the draft for a new resume.
    pub async fn start_over(&mut self) -> Result<(), WizardError> {
        self.session.reset().await?;
        self.draft = blank_draft();
        self.errors.clear();
        self.step = WizardStep::PersonalInfo;
        Ok(())
    }
}

/// Drops blank skills and assigns positional ids (`edu-<i>`, `exp-<i>`).
fn clean_profile(mut profile: Profile) -> Profile {
    profile.skills.retain(|s| !s.trim().is_empty());
    for (i, edu) in profile.education.iter_mut().enumerate() {
        edu.id = format!("edu-{i}");
    }
    for (i, exp) in profile.experience.iter_mut().enumerate() {
        exp.id = format!("exp-{i}");
    }
    profile.enrichment = None;
    profile
}
