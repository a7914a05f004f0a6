//! Built-in portfolio content, used when no content file is given.

use crate::records::{
    About, Contact, ContactLink, Content, Education, Experience, Involvement, Project,
};

fn project(id: &str, title: &str, description: &str, repo: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        repo: repo.to_string(),
        demo: "[DEMO PENDING]".to_string(),
    }
}

impl Content {
    /// The stock portfolio shipped with the terminal.
    pub fn builtin() -> Self {
        let projects = vec![
            project(
                "project1",
                "VidScore Pro",
                "Easily score your short-form content to understand where it can improve to boost social media engagement.",
                "https://github.com/carloslopezjr/VidScore-Pro",
            ),
            project(
                "project2",
                "Schedule-to-calendar-heb",
                "Without no automated way to integrate your H-E-B work schedule to Google Calendar, this project fixes that.",
                "https://github.com/carloslopezjr/schedule-to-calendar-heb",
            ),
            project(
                "project3",
                "StreamPilot",
                "Coupled multiple APIs into one to automate pre-stream production setups like stream title, description, thumbnail, and selection of Leetcode problems.",
                "https://github.com/carloslopezjr/StreamPilot",
            ),
            project(
                "project4",
                "Door.ai",
                "Solves specific problem for UTSA Rowdy Creator members who always have to knock on door to join meetings which wasn't efficient.",
                "https://github.com/carloslopezjr/Door.Ai",
            ),
        ];

        let experiences = vec![Experience {
            company: "Visa Inc".to_string(),
            title: "Software Engineer Intern".to_string(),
            period: "May 2025 - August 2025".to_string(),
            bullets: vec![
                "Developed an intelligent agent workflow using LangGraph to automate anomaly interpretation and rule generation, reducing time from anomaly detection to mitigation from hours/days to near real-time.".to_string(),
                "Built and integrated agent explanation workflow in real-time anomaly detection dashboard using websockets to deliver instant information to client side.".to_string(),
                "Collaborated in an agile, fast-paced environment, proactively providing updates, gathering feedback, and adapting to ambiguity through iterative development and communication with stakeholders.".to_string(),
            ],
        }];

        let involvement = vec![
            Involvement {
                org: "Rowdy Creators".to_string(),
                role: "Vice President".to_string(),
                details: "Ensuring retention rates and engagement in organization increases."
                    .to_string(),
                url: None,
            },
            Involvement {
                org: "HardWorkingGeniuses YouTube".to_string(),
                role: "Co-host / Streamer".to_string(),
                details: "Aimed to help beginners build confidence in their problem-solving by solving Leetcode problems.".to_string(),
                url: Some("https://www.youtube.com/@hardworkinggeniuses".to_string()),
            },
        ];

        let education = vec![
            Education {
                school: "University of Texas at San Antonio".to_string(),
                degree: "B.S. in Computer Science".to_string(),
                period: "2023 - 2025".to_string(),
                notes: None,
            },
            Education {
                school: "University of Texas at San Antonio".to_string(),
                degree: "B.A. in Communications, Minor in Marketing".to_string(),
                period: "2019 - 2023".to_string(),
                notes: None,
            },
            Education {
                school: "East Central High School".to_string(),
                degree: "Diploma".to_string(),
                period: "2015 - 2019".to_string(),
                notes: Some(
                    "Interests were in video production and computer hardware classes".to_string(),
                ),
            },
        ];

        let about = About {
            summary: "Hi - here's a super quick intro on me. From San Antonio, Texas. I enjoy playing basketball, biking, hiking. During free time I work on personal coding projects and I stream on YouTube. My career interests are within backend engineering. More specifically: data pipelines, agentic workflows, and system architecture.".to_string(),
            skills: ["Python", "Go", "C", "SQL", "Docker", "GitHub", "Cline/Cursor"]
                .into_iter()
                .map(String::from)
                .collect(),
            location: Some("San Antonio, TX".to_string()),
        };

        let contact = Contact {
            email: None,
            repo: Some("https://github.com/carloslopezjr/terminal-portfolio".to_string()),
            links: vec![
                ContactLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/carloslopezjr".to_string(),
                },
                ContactLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/carloslopezjr19".to_string(),
                },
            ],
        };

        Self {
            projects,
            experiences,
            involvement,
            education,
            about,
            contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_projects_in_order() {
        let c = Content::builtin();
        let ids: Vec<&str> = c.project_ids().collect();
        assert_eq!(ids, vec!["project1", "project2", "project3", "project4"]);
    }

    #[test]
    fn builtin_optional_fields() {
        let c = Content::builtin();
        assert!(c.involvement[0].url.is_none());
        assert!(c.involvement[1].url.is_some());
        assert!(c.education[2].notes.is_some());
        assert!(c.education[0].notes.is_none());
    }

    #[test]
    fn builtin_ids_are_unique() {
        let c = Content::builtin();
        let mut ids: Vec<String> = c.project_ids().map(str::to_ascii_lowercase).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), c.projects.len());
    }
}
