// Prompt templates for the gateway operations.
// Placeholders in `{braces}` are filled with `str::replace` before sending.

/// Replace: {experience}, {skills}, {goals}
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"Recommend 5 job roles that suit the user profile below.
For each role give a 2-3 sentence description of why it fits this person, and the 5 most important skills the role requires.

USER PROFILE:
- Experience: {experience}
- Skills: {skills}
- Goals: {goals}

Return a JSON array of exactly 5 objects shaped like:
{ "title": "Job Title", "description": "Why it fits.", "skills": ["Skill 1", "Skill 2", "Skill 3", "Skill 4", "Skill 5"] }"#;

/// Replace: {user_skills}, {job_title}, {job_skills}
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Compare the user's skills with the skills a target role requires.
Skills the user already has are strengths; required skills the user lacks are gaps.

- User's skills: {user_skills}
- Target role: {job_title}
- Role's required skills: {job_skills}

Return a JSON object shaped like: { "strengths": ["Skill"], "gaps": ["Skill"] }"#;

/// Replace: {role}, {user_skills}, {skills_to_learn}
pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = r#"Build a 3-month learning plan that closes the user's skill gaps for a target role.
Build on what the user already knows and focus on the missing skills.

- Target role: {role}
- Current skills: {user_skills}
- Skills to learn: {skills_to_learn}

Produce one step per month. Each step has a title, a detailed description of the month's tasks, and one or two specific, well-known online resources (a course, a channel, or official documentation).

Return a JSON array of objects shaped like:
{ "month": 1, "title": "Focus for the month", "description": "Tasks and goals.", "resources": [{ "name": "Resource", "url": "https://example.com" }] }"#;

/// Replace: {role}, {resume_text}
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are also a professional resume writer. Review the resume below for someone targeting a '{role}' position.

Give feedback in four parts:
1. impression: 1-2 sentences on the resume's main strengths and weaknesses.
2. suggestions: 3-5 specific, high-impact content improvements.
3. formattingFeedback: 2-4 suggestions on layout, structure and readability.
4. rewrittenSummary: a 2-4 sentence professional summary tailored to the role and rich in relevant keywords.

RESUME:
---
{resume_text}
---

Return a single JSON object with the keys "impression", "suggestions", "formattingFeedback" and "rewrittenSummary"."#;

/// Replace: {role}, {full_plan}, {completed_steps}, {pending_steps}
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Give motivating, actionable feedback to a user working through a learning plan to become a "{role}".

FULL PLAN:
{full_plan}

COMPLETED STEPS:
{completed_steps}

PENDING STEPS:
{pending_steps}

Write one concise paragraph that acknowledges the completed work, encourages the next steps, and gently points out any step completed out of order (for example month 2 done before month 1). Keep the tone positive."#;

/// Replace: {job_title}
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an experienced hiring manager and interview coach. Write 5 diverse interview questions for a '{job_title}' role.

Mix the question types where they apply to the role:
1. A behavioral question.
2. A technical or problem-solving challenge.
3. A situational or role-play scenario.
4. A question on motivation, growth or leadership style.
5. A question testing creativity or strategic thinking.

Return a JSON array of 5 strings."#;

/// Replace: {job_title}, {question}, {answer}
pub const ANSWER_FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an interview coach. The user is practicing for a '{job_title}' interview.

QUESTION:
"{question}"

USER'S ANSWER:
"{answer}"

Give constructive feedback on structure, clarity and content. For behavioral questions, suggest improvements using the STAR method (Situation, Task, Action, Result). Keep it to 2-3 encouraging, actionable paragraphs."#;

/// Replace: {experience}, {skills}, {goals}, {job_title}, {job_description}, {job_skills}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are an ATS-savvy resume writer. Write a polished one-page resume for the user below, aimed at the target job.

USER PROFILE:
- Experience: {experience}
- Skills: {skills}
- Goals: {goals}

TARGET JOB:
- Title: {job_title}
- Description: {job_description}
- Required skills: {job_skills}

Rules:
1. Contact details are placeholders ("Your Name", "your.email@example.com", ...).
2. summary: 3-4 sentences tailored to the target job.
3. skills: split into "technical" and "soft".
4. experience: one entry per role in the profile, each with 3-4 quantified achievement bullets aligned with the job's requirements.
5. education: formatted clearly from the profile.

Return a single JSON object."#;

/// Replace: {job_title}, {goals}
pub const LIVE_JOBS_SEARCH_PROMPT_TEMPLATE: &str = r#"Use your search tool to find up to 5 recent, live job postings for a "{job_title}" role.
The user's career goals are: "{goals}". Prefer postings that match those goals (remote work, location, industry).
For each posting list its title, company, location and direct URL."#;

/// Replace: {search_text}
pub const LIVE_JOBS_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the job postings from the text below as a JSON array of objects with "title", "company", "location" and "url".
If the text contains no postings or is irrelevant, return an empty array.

TEXT:
---
{search_text}
---"#;

/// Replace: {experience}, {skills}, {goals}, {resume_name}, {resume_summary},
///          {job_title}, {job_company}, {job_location}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional, personalized cover letter for the job below.

Rules:
- 3-4 paragraphs.
- Address the company ({job_company}) and the role ({job_title}) directly.
- Connect the user's most relevant skills and experience to the job's needs.
- Show genuine interest in the company and close with a clear call to action.
- Sign off as "{resume_name}".

USER PROFILE:
- Experience: {experience}
- Skills: {skills}
- Goals: {goals}

RESUME SUMMARY:
{resume_summary}

TARGET JOB:
- Title: {job_title}
- Company: {job_company}
- Location: {job_location}

Separate paragraphs with blank lines."#;

/// Replace: {company}, {experience}, {skills}, {goals}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are a career strategist writing a complete guide for a beginner who wants to work at "{company}".

USER PROFILE:
- Experience: {experience}
- Skills: {skills}
- Goals: {goals}

Produce these sections:
1. beginnerIntroduction: 2-3 encouraging paragraphs; the path is hard but achievable, with an overview of the strategy (skills, networking, tailored applications).
2. companyProfile: the company's culture, values and what it looks for in candidates.
3. targetRoles: 2-3 realistic entry-level or junior roles there, each with its reasoning.
4. skillsRoadmap: 3-5 key skills, each with its reasoning and resources grouped as videoCourses, youtubeTutorials, books and articlesAndPdfs (1-2 real resources per group).
5. networkingStrategy: 3-4 concrete networking steps.
6. opportunities: 1-2 internships or entry roles to watch, with a placeholder URL.
7. resumeTips: 3-4 tips for tailoring a resume to this company.

Set companyName to "{company}". Return a single JSON object."#;
