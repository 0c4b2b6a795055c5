use serde::Serialize;

use crate::model::ids::MentorId;

/// A client-embedded expert persona used to flavor question sets.
///
/// Mentors are not backend entities: the directory ships with the client
/// and only the mentor id travels with a quiz request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub expertise: &'static [&'static str],
    pub experience: &'static str,
    pub linkedin: &'static str,
    pub bio: &'static str,
    pub question_count: u32,
    pub rating: f32,
}

impl Mentor {
    /// The static mentor directory.
    #[must_use]
    pub fn directory() -> &'static [Mentor] {
        DIRECTORY
    }

    /// Looks up a mentor by id.
    #[must_use]
    pub fn by_id(id: MentorId) -> Option<&'static Mentor> {
        DIRECTORY.iter().find(|mentor| mentor.id == id)
    }

    /// The mentor's expertise restricted to topics the backend offers.
    #[must_use]
    pub fn expertise_in(&self, available_topics: &[String]) -> Vec<String> {
        self.expertise
            .iter()
            .filter(|skill| available_topics.iter().any(|topic| topic == *skill))
            .map(|skill| (*skill).to_string())
            .collect()
    }
}

const DIRECTORY: &[Mentor] = &[
    Mentor {
        id: MentorId::new(1),
        name: "Sarah Chen",
        title: "Senior Software Engineer",
        company: "Google",
        avatar: "👩‍💻",
        expertise: &["Python", "JavaScript", "System Design", "Algorithms"],
        experience: "8 years",
        linkedin: "https://linkedin.com/in/sarahchen",
        bio: "Former Google SWE with expertise in distributed systems and backend development.",
        question_count: 45,
        rating: 4.9,
    },
    Mentor {
        id: MentorId::new(2),
        name: "Alex Rodriguez",
        title: "Principal Engineer",
        company: "Microsoft",
        avatar: "👨‍💻",
        expertise: &["C#", "Azure", "System Design", "Leadership"],
        experience: "12 years",
        linkedin: "https://linkedin.com/in/alexrodriguez",
        bio: "Principal Engineer at Microsoft Azure with deep expertise in cloud architecture.",
        question_count: 38,
        rating: 4.8,
    },
    Mentor {
        id: MentorId::new(3),
        name: "Priya Sharma",
        title: "Data Scientist",
        company: "Meta",
        avatar: "👩‍🔬",
        expertise: &["Machine Learning", "Python", "Statistics", "SQL"],
        experience: "6 years",
        linkedin: "https://linkedin.com/in/priyasharma",
        bio: "Data Scientist at Meta working on recommendation systems and ML infrastructure.",
        question_count: 32,
        rating: 4.9,
    },
    Mentor {
        id: MentorId::new(4),
        name: "James Park",
        title: "Engineering Manager",
        company: "Amazon",
        avatar: "👨‍💼",
        expertise: &["Java", "AWS", "System Design", "Behavioral"],
        experience: "10 years",
        linkedin: "https://linkedin.com/in/jamespark",
        bio: "Engineering Manager at Amazon focused on large-scale retail systems and hiring.",
        question_count: 41,
        rating: 4.7,
    },
    Mentor {
        id: MentorId::new(5),
        name: "Elena Volkov",
        title: "Staff Frontend Engineer",
        company: "Netflix",
        avatar: "👩‍🎨",
        expertise: &["JavaScript", "React", "CSS", "Accessibility"],
        experience: "9 years",
        linkedin: "https://linkedin.com/in/elenavolkov",
        bio: "Staff engineer at Netflix building playback UI and design-system tooling.",
        question_count: 27,
        rating: 4.8,
    },
];
