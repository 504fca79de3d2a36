pub mod profile;
pub mod template;

pub use profile::{
    EducationEntry, EnhancedExperience, EnrichmentResult, ExperienceEntry, PartialProfile,
    PersonalInfo, Profile,
};
pub use template::TemplateVariant;
