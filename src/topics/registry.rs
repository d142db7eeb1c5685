use serde::Serialize;

/// Text content of a topic window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicBody {
    pub paragraphs: &'static [&'static str],
    pub points: &'static [&'static str],
}

/// One of the fixed sections of the presentation, shown as a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub short_title: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    pub body: TopicBody,
}

pub const TOPICS: &[Topic] = &[
    Topic {
        id: "hardware",
        title: "Hardware & Sobriety",
        short_title: "Hardware & Sobriety",
        tagline: "Less waste, longer life for devices",
        icon: "🖥️",
        body: TopicBody {
            paragraphs: &[
                "In a resistant digital village, schools prioritize reusing and refurbishing existing \
                 hardware instead of constantly buying new devices. This approach reduces electronic \
                 waste and teaches students the value of sustainability.",
                "Digital sobriety means using fewer, lighter devices that serve their purpose without \
                 unnecessary complexity. Schools can function effectively with older computers running \
                 efficient software, extending the life of technology and reducing dependence on major \
                 hardware manufacturers.",
            ],
            points: &[
                "Refurbish and repair existing computers and tablets",
                "Choose devices that can be easily maintained and upgraded",
                "Reduce the number of devices per student when possible",
                "Partner with local repair shops and recycling centers",
            ],
        },
    },
    Topic {
        id: "freesoftware",
        title: "Free/Open-Source Software",
        short_title: "Free Software",
        tagline: "Tools for independence from Big Tech",
        icon: "🐧",
        body: TopicBody {
            paragraphs: &[
                "Free and open-source software (FOSS) gives schools the freedom to use, study, modify, \
                 and share software without vendor lock-in. Linux, LibreOffice, and educational tools \
                 like GIMP or Blender provide powerful alternatives to proprietary ecosystems.",
                "By adopting FOSS, schools break free from expensive licensing fees and data collection \
                 practices of Big Tech companies. Students learn on tools they can truly own and \
                 understand, fostering digital literacy and independence.",
            ],
            points: &[
                "Use Linux distributions designed for education (e.g., Ubuntu Education, Debian Edu)",
                "Replace proprietary office suites with LibreOffice",
                "Adopt free educational software for specific subjects",
                "Teach students about software freedom and open-source principles",
            ],
        },
    },
    Topic {
        id: "education",
        title: "Digital Education & Awareness",
        short_title: "Education & Awareness",
        tagline: "Understanding data, privacy, and algorithms",
        icon: "📚",
        body: TopicBody {
            paragraphs: &[
                "A resistant digital village requires that teachers and students understand how digital \
                 technologies work, how data is collected and used, and how algorithms influence what \
                 we see and learn online.",
                "Digital education goes beyond using tools: it means understanding the implications of \
                 platform dependence, recognizing privacy risks, and making informed choices about \
                 technology. Students learn to be critical users, not just consumers.",
            ],
            points: &[
                "Teach data literacy and privacy awareness from an early age",
                "Explain how algorithms and recommendation systems work",
                "Discuss the business models behind \"free\" online services",
                "Encourage students to question and verify digital information",
            ],
        },
    },
    Topic {
        id: "community",
        title: "Local Community & Shared Resources",
        short_title: "Community & Resources",
        tagline: "Co-building and sharing instead of buying",
        icon: "🤝",
        body: TopicBody {
            paragraphs: &[
                "Instead of each school purchasing expensive proprietary solutions independently, the \
                 resistant digital village builds shared resources through collaboration between \
                 schools, parents, local associations, and municipalities.",
                "This community approach creates a network of mutual support: shared servers, \
                 collaborative training sessions, local technical support, and collectively maintained \
                 software installations. Together, schools become stronger and more independent.",
            ],
            points: &[
                "Create local technical support networks between schools",
                "Share servers and infrastructure costs across institutions",
                "Organize community training sessions for teachers and IT staff",
                "Build partnerships with local tech associations and makerspaces",
            ],
        },
    },
];

pub fn topic_count() -> usize {
    TOPICS.len()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
