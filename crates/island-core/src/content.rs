//! Section content, as a flat panel or as a nested 3D sub-scene.
//!
//! `render` is a pure function of the active section, the modal mode and the
//! visitor name. The web layer turns a [`Panel`] into HTML and hands a
//! [`SubScene`] to the composer.

use crate::ambient::Float;
use crate::constants::FALLBACK_USER_NAME;
use crate::navigation::ModalMode;
use crate::sections::{Section, SectionKind};
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub enum ContentView {
    Panel(Panel),
    SubScene(SubScene),
}

impl ContentView {
    pub fn section_id(&self) -> &'static str {
        match self {
            ContentView::Panel(p) => p.section_id,
            ContentView::SubScene(s) => s.section_id,
        }
    }

    pub fn closable(&self) -> bool {
        match self {
            ContentView::Panel(p) => p.closable,
            ContentView::SubScene(s) => s.closable,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub section_id: &'static str,
    pub kind: SectionKind,
    pub title: String,
    pub blocks: Vec<Block>,
    pub closable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Heading(String),
    Subheading(String),
    Paragraph(String),
    Card(Card),
    /// Label/value pairs laid out side by side.
    Facts(Vec<(&'static str, &'static str)>),
    Tags {
        group: &'static str,
        tags: Vec<&'static str>,
    },
    Contact {
        icon: ContactIcon,
        value: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactIcon {
    Mail,
    Phone,
    Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub period: Option<&'static str>,
    pub body: Option<&'static str>,
    pub tags: Vec<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Sphere,
    Box,
    Cylinder,
    Plane,
}

/// One primitive of a sub-scene, placed relative to the sub-scene origin.
#[derive(Clone, Debug, PartialEq)]
pub struct SubSceneProp {
    pub shape: Shape,
    pub offset: Vec3,
    pub size: f32,
    pub color: [f32; 4],
    pub float: Option<Float>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubSceneLabel {
    pub text: String,
    pub offset: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubScene {
    pub section_id: &'static str,
    pub kind: SectionKind,
    pub title: String,
    pub props: Vec<SubSceneProp>,
    pub labels: Vec<SubSceneLabel>,
    /// Whole-group rotation about Y in radians per second.
    pub spin: f32,
    pub hint: &'static str,
    pub closable: bool,
}

pub const SUBSCENE_HINT: &str = "Drag to rotate \u{2022} Scroll to zoom \u{2022} Click objects to interact";

pub fn render(active: Option<&Section>, mode: ModalMode, user_name: Option<&str>) -> Option<ContentView> {
    let section = active?;
    let name = display_name(user_name);
    Some(match mode {
        ModalMode::Overlay => ContentView::Panel(panel(section, name)),
        ModalMode::Embedded3d => ContentView::SubScene(sub_scene(section, name)),
    })
}

/// Trimmed visitor name, or the site owner's when none was given.
pub fn display_name(user_name: Option<&str>) -> &str {
    match user_name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => FALLBACK_USER_NAME,
    }
}

fn panel(section: &Section, name: &str) -> Panel {
    let blocks = match section.kind {
        SectionKind::About => about_blocks(name),
        SectionKind::Projects => project_blocks(),
        SectionKind::Resume => resume_blocks(),
        SectionKind::Skills => skill_blocks(),
        SectionKind::Contact => contact_blocks(),
    };
    Panel {
        section_id: section.id,
        kind: section.kind,
        title: section.title.to_owned(),
        blocks,
        closable: true,
    }
}

fn about_blocks(name: &str) -> Vec<Block> {
    vec![
        Block::Heading("Aziz Avatar".into()),
        Block::Subheading("Full Stack Developer".into()),
        Block::Paragraph(format!("Hi {name}, welcome to the island!")),
        Block::Paragraph(
            "Passionate full-stack developer with expertise in modern web technologies. \
             I love creating beautiful, functional, and user-friendly applications that \
             solve real-world problems."
                .into(),
        ),
        Block::Paragraph(
            "When I'm not coding, you can find me exploring new technologies, contributing \
             to open-source projects, or enjoying the great outdoors."
                .into(),
        ),
        Block::Facts(vec![("Location", "Available Worldwide"), ("Experience", "5+ Years")]),
    ]
}

const PROJECTS: [(&str, &str, [&str; 4]); 3] = [
    (
        "3D Portfolio Island",
        "Interactive 3D portfolio built with React Three Fiber and Next.js",
        ["React", "Three.js", "Next.js", "TypeScript"],
    ),
    (
        "E-Commerce Platform",
        "Full-stack e-commerce solution with payment integration",
        ["React", "Node.js", "MongoDB", "Stripe"],
    ),
    (
        "Task Management App",
        "Collaborative task management with real-time updates",
        ["Vue.js", "Socket.io", "Express", "PostgreSQL"],
    ),
];

fn project_blocks() -> Vec<Block> {
    let mut blocks = vec![Block::Heading("Featured Projects".into())];
    blocks.extend(PROJECTS.iter().map(|&(title, body, tags)| {
        Block::Card(Card {
            title,
            subtitle: None,
            period: None,
            body: Some(body),
            tags: tags.to_vec(),
        })
    }));
    blocks
}

const JOBS: [(&str, &str, &str, &str); 3] = [
    (
        "Senior Full Stack Developer",
        "Tech Solutions Inc.",
        "2022 - Present",
        "Led development of scalable web applications using React, Node.js, and cloud technologies.",
    ),
    (
        "Frontend Developer",
        "Digital Agency",
        "2020 - 2022",
        "Developed responsive web applications and collaborated with design teams to create engaging user experiences.",
    ),
    (
        "Junior Developer",
        "Startup Co.",
        "2019 - 2020",
        "Built and maintained web applications while learning modern development practices.",
    ),
];

fn resume_blocks() -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading("Experience & Education".into()),
        Block::Subheading("Work Experience".into()),
    ];
    blocks.extend(JOBS.iter().map(|&(title, company, period, body)| {
        Block::Card(Card {
            title,
            subtitle: Some(company),
            period: Some(period),
            body: Some(body),
            tags: Vec::new(),
        })
    }));
    blocks.push(Block::Subheading("Education".into()));
    blocks.push(Block::Card(Card {
        title: "Bachelor of Computer Science",
        subtitle: Some("University of Technology"),
        period: Some("2015 - 2019"),
        body: None,
        tags: Vec::new(),
    }));
    blocks
}

const SKILL_GROUPS: [(&str, &[&str]); 4] = [
    ("Frontend", &["React", "Vue.js", "TypeScript", "HTML5", "CSS3", "Tailwind CSS"]),
    ("Backend", &["Node.js", "Python", "Express", "FastAPI", "PostgreSQL", "MongoDB"]),
    ("Tools & DevOps", &["Git", "Docker", "AWS", "CI/CD", "Jest", "Webpack"]),
    ("3D & Graphics", &["Three.js", "React Three Fiber", "Blender", "WebGL", "GLSL"]),
];

fn skill_blocks() -> Vec<Block> {
    let mut blocks = vec![Block::Heading("Skills & Technologies".into())];
    blocks.extend(SKILL_GROUPS.iter().map(|&(group, tags)| Block::Tags {
        group,
        tags: tags.to_vec(),
    }));
    blocks
}

fn contact_blocks() -> Vec<Block> {
    vec![
        Block::Heading("Get In Touch".into()),
        Block::Contact {
            icon: ContactIcon::Mail,
            value: "aziz.avatar@example.com",
        },
        Block::Contact {
            icon: ContactIcon::Phone,
            value: "+1 (555) 123-4567",
        },
        Block::Contact {
            icon: ContactIcon::Location,
            value: "Available Worldwide",
        },
    ]
}

/// `0xRRGGBB` to linear-ish RGBA floats.
pub fn hex_color(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

fn sub_scene(section: &Section, name: &str) -> SubScene {
    let (props, labels, spin) = match section.kind {
        SectionKind::About => about_scene(name),
        SectionKind::Projects => projects_scene(),
        SectionKind::Resume => resume_scene(),
        SectionKind::Skills => skills_scene(),
        SectionKind::Contact => contact_scene(),
    };
    SubScene {
        section_id: section.id,
        kind: section.kind,
        title: format!("{} - 3D Experience", section.title),
        props,
        labels,
        spin,
        hint: SUBSCENE_HINT,
        closable: true,
    }
}

type SceneParts = (Vec<SubSceneProp>, Vec<SubSceneLabel>, f32);

fn label(text: impl Into<String>, offset: Vec3) -> SubSceneLabel {
    SubSceneLabel {
        text: text.into(),
        offset,
    }
}

fn about_scene(name: &str) -> SceneParts {
    let mut props = vec![SubSceneProp {
        shape: Shape::Plane,
        offset: Vec3::new(0.0, -2.0, 0.0),
        size: 6.0,
        color: [0.11, 0.42, 0.63, 0.9],
        float: None,
    }];
    // rising bubbles; phases spread so they do not move in lockstep
    props.extend((0..10).map(|i| {
        let fi = i as f32;
        SubSceneProp {
            shape: Shape::Sphere,
            offset: Vec3::new((fi * 1.7).sin() * 2.0, -1.0 + fi * 0.4, (fi * 2.3).cos() * 2.0),
            size: 0.1,
            color: [0.70, 0.90, 0.99, 0.6],
            float: Some(Float::new(1.0 + fi * 0.1, 1.5).with_phase(fi)),
        }
    }));
    let labels = vec![label(format!("Hi, I'm {name} \u{1f30a}"), Vec3::new(2.0, 1.0, 0.0))];
    (props, labels, 0.0)
}

fn projects_scene() -> SceneParts {
    let boxes = [
        ("3D Portfolio", 0xff6b6b, Vec3::new(0.0, 2.0, 0.0)),
        ("Web App", 0x4ecdc4, Vec3::new(2.0, 0.0, 0.0)),
        ("Mobile App", 0x45b7d1, Vec3::new(-2.0, 0.0, 0.0)),
        ("AI Project", 0x96ceb4, Vec3::new(0.0, -2.0, 0.0)),
    ];
    let mut props = Vec::with_capacity(boxes.len() + 1);
    let mut labels = Vec::with_capacity(boxes.len());
    for (i, (title, color, pos)) in boxes.iter().enumerate() {
        props.push(SubSceneProp {
            shape: Shape::Box,
            offset: *pos,
            size: 1.0,
            color: hex_color(*color),
            float: Some(Float::new(1.0 + i as f32 * 0.2, 0.5)),
        });
        labels.push(label(*title, *pos + Vec3::new(0.0, -0.8, 0.0)));
    }
    props.push(SubSceneProp {
        shape: Shape::Sphere,
        offset: Vec3::ZERO,
        size: 0.5,
        color: [1.0, 1.0, 1.0, 0.8],
        float: None,
    });
    (props, labels, 0.2)
}

fn skills_scene() -> SceneParts {
    let skills: [(&str, f32, u32); 5] = [
        ("React", 0.9, 0x61dafb),
        ("Three.js", 0.8, 0x049ef4),
        ("TypeScript", 0.85, 0x3178c6),
        ("Node.js", 0.75, 0x339933),
        ("Python", 0.7, 0x3776ab),
    ];
    let mut props = Vec::with_capacity(skills.len());
    let mut labels = Vec::with_capacity(skills.len());
    for (i, &(title, level, color)) in skills.iter().enumerate() {
        let fi = i as f32;
        let angle = fi / skills.len() as f32 * TAU;
        let pos = Vec3::new(angle.cos() * 3.0, (fi * 0.5).sin() * 2.0, angle.sin() * 3.0);
        props.push(SubSceneProp {
            shape: Shape::Cylinder,
            offset: pos,
            size: level * 3.0,
            color: hex_color(color),
            float: Some(Float::new(1.0 + fi * 0.1, 0.3)),
        });
        let percent = (level * 100.0).round() as u32;
        labels.push(label(format!("{title} {percent}%"), pos + Vec3::new(0.0, level * 1.5 + 0.3, 0.0)));
    }
    (props, labels, 0.0)
}

fn resume_scene() -> SceneParts {
    let pages: [(&str, [&str; 3]); 3] = [
        ("Experience", ["Senior Dev", "Full Stack", "3D Specialist"]),
        ("Education", ["Computer Science", "Web Development", "3D Graphics"]),
        ("Achievements", ["Awards", "Certifications", "Projects"]),
    ];
    let mut props = Vec::with_capacity(pages.len());
    let mut labels = Vec::new();
    for (i, (title, items)) in pages.iter().enumerate() {
        let fi = i as f32;
        let pos = Vec3::new((fi - 1.0) * 3.0, 0.0, fi * 0.5);
        props.push(SubSceneProp {
            shape: Shape::Plane,
            offset: pos,
            size: 2.0,
            color: [1.0, 1.0, 1.0, 1.0],
            float: Some(Float::new(1.2 + fi * 0.2, 0.3)),
        });
        labels.push(label(*title, pos + Vec3::new(0.0, 0.9, 0.01)));
        for (row, item) in items.iter().enumerate() {
            labels.push(label(*item, pos + Vec3::new(0.0, 0.3 - row as f32 * 0.4, 0.01)));
        }
    }
    (props, labels, 0.0)
}

fn contact_scene() -> SceneParts {
    let icons = ["\u{1f4e7}", "\u{1f4f1}", "\u{1f4bc}", "\u{1f310}"];
    let mut props = Vec::with_capacity(icons.len());
    let mut labels = vec![label("GET IN TOUCH", Vec3::new(0.0, 2.5, 0.0))];
    for (i, icon) in icons.iter().enumerate() {
        let fi = i as f32;
        let angle = fi / icons.len() as f32 * TAU;
        let pos = Vec3::new(angle.cos() * 4.0, (fi * 2.0).sin() * 2.0, angle.sin() * 2.0);
        props.push(SubSceneProp {
            shape: Shape::Sphere,
            offset: pos,
            size: 0.6,
            color: [0.23, 0.51, 0.96, 1.0],
            float: Some(Float::new(1.0 + fi * 0.3, 0.5)),
        });
        labels.push(label(*icon, pos));
    }
    (props, labels, 0.0)
}
