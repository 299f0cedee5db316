use glam::Vec3;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    About,
    Projects,
    Resume,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Resume,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Resume => "resume",
            SectionKind::Skills => "skills",
            SectionKind::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = crate::IslandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| crate::IslandError::UnknownSection(s.to_owned()))
    }
}

/// A navigable content topic tied to a prop on the island.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub position: Vec3,
    pub kind: SectionKind,
}

static SECTIONS: [Section; 5] = [
    Section {
        id: "avatar",
        title: "About Me",
        position: Vec3::new(-1.0, -0.38, 6.5),
        kind: SectionKind::About,
    },
    Section {
        id: "lighthouse",
        title: "Projects",
        position: Vec3::new(-3.0, 0.5, -0.5),
        kind: SectionKind::Projects,
    },
    Section {
        id: "terminal",
        title: "Resume",
        position: Vec3::new(2.0, 0.5, 4.0),
        kind: SectionKind::Resume,
    },
    Section {
        id: "workshop",
        title: "Skills",
        position: Vec3::new(-0.75, 0.5, -2.0),
        kind: SectionKind::Skills,
    },
    Section {
        id: "postbox",
        title: "Contact",
        position: Vec3::new(2.4, 0.5, 0.75),
        kind: SectionKind::Contact,
    },
];

/// The fixed island layout, in menu order.
pub fn default_sections() -> &'static [Section] {
    &SECTIONS
}

pub fn find_section<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    sections.iter().find(|s| s.id == id)
}
