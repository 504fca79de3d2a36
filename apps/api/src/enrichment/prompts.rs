// Prompt templates for the enrichment relay.
// Placeholders are filled with `str::replace` by `enrichment::build_*_prompt`.

/// Resume enrichment prompt.
/// Replace: {full_name}, {target_role}, {skills}, {education}, {experience}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Generate professional resume content for the following candidate:

Name: {full_name}
Target Role: {target_role}
Skills: {skills}
Education: {education}
Experience: {experience}

Please provide:
1. A compelling professional summary (2-3 sentences)
2. Enhanced bullet points for each work experience that highlight achievements and impact
3. Relevant skills organization and prioritization

Format the response as JSON with keys: summary, enhancedExperience (array), skillsRecommendations.
Each enhancedExperience element corresponds, in order, to one experience entry above and must be
an object of the form {"jobTitle": "...", "company": "...", "bulletPoints": ["...", "..."]}.
skillsRecommendations must be an array of strings."#;

/// Cover letter prompt.
/// Replace: {full_name}, {target_role}, {company}, {skills}, {key_experience}, {job_context}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for:

Candidate: {full_name}
Target Role: {target_role}
Company: {company}
Skills: {skills}
Key Experience: {key_experience}
{job_context}
Create a compelling 3-paragraph cover letter that:
1. Opens with enthusiasm and mentions the specific role
2. Highlights relevant experience and achievements
3. Closes with a strong call to action

Keep it professional, engaging, and under {word_limit} words."#;

pub const COVER_LETTER_WORD_LIMIT: u32 = 300;

pub const RESUME_TEMPERATURE: f32 = 0.7;
pub const RESUME_MAX_TOKENS: u32 = 1000;
pub const COVER_LETTER_TEMPERATURE: f32 = 0.8;
pub const COVER_LETTER_MAX_TOKENS: u32 = 500;
