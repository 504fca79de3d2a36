//! Per-field checks run when the wizard form is submitted.

use std::fmt;

use super::WizardStep;
use crate::models::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub step: WizardStep,
    /// Wire-style path, e.g. `personalInfo.email` or `experience.1.company`.
    pub field: String,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// `<non-whitespace>@<non-whitespace>`
pub fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    value
        .char_indices()
        .any(|(i, c)| c == '@' && i > 0 && i + 1 < value.len())
}

struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn require(&mut self, step: WizardStep, field: String, value: &str, message: &'static str) -> bool {
        let present = !value.trim().is_empty();
        if !present {
            self.errors.push(FieldError {
                step,
                field,
                message,
            });
        }
        present
    }
}

/// Every failing field across all steps, in step order.
pub fn validate(draft: &Profile) -> Vec<FieldError> {
    let mut check = Checker { errors: Vec::new() };
    let info = &draft.personal_info;

    let step = WizardStep::PersonalInfo;
    check.require(step, "personalInfo.fullName".into(), &info.full_name, "Full name is required");
    if check.require(step, "personalInfo.email".into(), &info.email, "Email is required")
        && !is_plausible_email(&info.email)
    {
        check.errors.push(FieldError {
            step,
            field: "personalInfo.email".into(),
            message: "Invalid email address",
        });
    }
    check.require(step, "personalInfo.phone".into(), &info.phone, "Phone number is required");
    check.require(step, "personalInfo.location".into(), &info.location, "Location is required");

    let step = WizardStep::Education;
    for (i, edu) in draft.education.iter().enumerate() {
        check.require(step, format!("education.{i}.degree"), &edu.degree, "Degree is required");
        check.require(
            step,
            format!("education.{i}.institution"),
            &edu.institution,
            "Institution is required",
        );
        check.require(
            step,
            format!("education.{i}.graduationYear"),
            &edu.graduation_year,
            "Graduation year is required",
        );
    }

    let step = WizardStep::Experience;
    for (i, exp) in draft.experience.iter().enumerate() {
        check.require(step, format!("experience.{i}.jobTitle"), &exp.job_title, "Job title is required");
        check.require(step, format!("experience.{i}.company"), &exp.company, "Company is required");
        check.require(step, format!("experience.{i}.duration"), &exp.duration, "Duration is required");
        check.require(
            step,
            format!("experience.{i}.description"),
            &exp.description,
            "Description is required",
        );
    }

    check.require(
        WizardStep::SkillsAndTarget,
        "targetRole".into(),
        &draft.target_role,
        "Target role is required",
    );

    check.errors
}
