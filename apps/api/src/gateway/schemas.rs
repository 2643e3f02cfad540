// Response shapes for every structured gateway operation.

use crate::llm_client::schema::Schema;

fn resource() -> Schema {
    Schema::object([("name", Schema::String), ("url", Schema::String)])
}

fn resource_list() -> Schema {
    Schema::array(resource())
}

pub fn job_recommendations() -> Schema {
    Schema::array(Schema::object([
        ("title", Schema::String),
        ("description", Schema::String),
        ("skills", Schema::string_array()),
    ]))
}

pub fn skill_gap() -> Schema {
    Schema::object([
        ("strengths", Schema::string_array()),
        ("gaps", Schema::string_array()),
    ])
}

pub fn learning_path() -> Schema {
    Schema::array(Schema::object([
        ("month", Schema::Integer),
        ("title", Schema::String),
        ("description", Schema::String),
        ("resources", resource_list()),
    ]))
}

pub fn resume_feedback() -> Schema {
    Schema::object([
        ("impression", Schema::String),
        ("suggestions", Schema::string_array()),
        ("formattingFeedback", Schema::string_array()),
        ("rewrittenSummary", Schema::String),
    ])
}

pub fn interview_questions() -> Schema {
    Schema::string_array()
}

pub fn generated_resume() -> Schema {
    Schema::object([
        ("name", Schema::String),
        ("email", Schema::String),
        ("phone", Schema::String),
        ("linkedin", Schema::String),
        ("summary", Schema::String),
        (
            "skills",
            Schema::object([
                ("technical", Schema::string_array()),
                ("soft", Schema::string_array()),
            ]),
        ),
        (
            "experience",
            Schema::array(Schema::object([
                ("role", Schema::String),
                ("company", Schema::String),
                ("duration", Schema::String),
                ("points", Schema::string_array()),
            ])),
        ),
        (
            "education",
            Schema::array(Schema::object([
                ("degree", Schema::String),
                ("university", Schema::String),
                ("duration", Schema::String),
            ])),
        ),
    ])
}

pub fn live_jobs() -> Schema {
    Schema::array(Schema::object([
        ("title", Schema::String),
        ("company", Schema::String),
        ("location", Schema::String),
        ("url", Schema::String),
    ]))
}

pub fn dream_company_roadmap() -> Schema {
    Schema::object([
        ("companyName", Schema::String),
        ("companyProfile", Schema::String),
        ("beginnerIntroduction", Schema::String),
        (
            "targetRoles",
            Schema::array(Schema::object([
                ("title", Schema::String),
                ("reasoning", Schema::String),
            ])),
        ),
        (
            "skillsRoadmap",
            Schema::array(Schema::object([
                ("skill", Schema::String),
                ("reasoning", Schema::String),
                (
                    "resources",
                    Schema::object([
                        ("videoCourses", resource_list()),
                        ("youtubeTutorials", resource_list()),
                        ("books", resource_list()),
                        ("articlesAndPdfs", resource_list()),
                    ]),
                ),
            ])),
        ),
        ("networkingStrategy", Schema::string_array()),
        (
            "opportunities",
            Schema::array(Schema::object([
                ("title", Schema::String),
                ("url", Schema::String),
            ])),
        ),
        ("resumeTips", Schema::string_array()),
    ])
}
