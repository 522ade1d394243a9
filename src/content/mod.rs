//! Static report content
//!
//! Everything shown on screen or exported to the deck lives here as read-only
//! tables built once at startup. Neither the presenter nor the exporter ever
//! mutates it.

pub mod samples;

pub use samples::{Code, FunctionSample, FULL_OUTPUT, FULL_SOURCE, FUNCTION_SAMPLES, SAMPLE_OUTPUT};

/// What a slide shows, which also decides how "next" behaves on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Intro,
    Context,
    Solution,
    Flowchart,
    Code,
    Demo,
    Future,
    Thanks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SlideKind,
    /// Index into [`FUNCTION_SAMPLES`] for `Code` slides
    pub func_index: Option<usize>,
}

const fn slide(id: &'static str, title: &'static str, kind: SlideKind) -> Slide {
    Slide {
        id,
        title,
        kind,
        func_index: None,
    }
}

const fn code_slide(id: &'static str, title: &'static str, func_index: usize) -> Slide {
    Slide {
        id,
        title,
        kind: SlideKind::Code,
        func_index: Some(func_index),
    }
}

/// The presentation deck, in viewing order
pub const SLIDES: [Slide; 12] = [
    slide("intro", "Project Introduction", SlideKind::Intro),
    slide("context", "Idea and Goal", SlideKind::Context),
    slide("solution", "Proposed Solution", SlideKind::Solution),
    slide("flowchart", "Workflow Chart", SlideKind::Flowchart),
    code_slide("main", "Entry Point main()", 0),
    code_slide("init", "Setup initClassroom()", 1),
    code_slide("available", "Availability isSeatAvailable()", 2),
    code_slide("assign", "Allocation assignSeat()", 3),
    code_slide("display", "Layout displayMap()", 4),
    slide("demo", "Live Run", SlideKind::Demo),
    slide("future", "Future Work", SlideKind::Future),
    slide("thanks", "Thank You", SlideKind::Thanks),
];

pub const REPORT_TITLE: &str = "Smart Seating Allocation Engine";
pub const REPORT_SUBTITLE: &str = "C++ Data Structures & Algorithms";
pub const REPORT_DATE: &str = "December 2025";

pub const SUMMARY: &str = "This report presents a comprehensive Smart Seating Allocation Engine \
developed using core C++ data structures and algorithms. The system efficiently manages classroom \
seating through a 2D array structure, implementing automated seat assignment, availability \
checking, and visual mapping features. The modular design ensures scalability, maintainability, \
and serves as a practical demonstration of algorithmic problem-solving.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Ali Adnan Muhammad",
        role: "Project Manager | Developer | Designer | Presenter",
    },
    TeamMember {
        name: "Saad Safaa Al-Din",
        role: "QA Tester | Developer",
    },
    TeamMember {
        name: "Mutasim Ahmed",
        role: "Developer | Presenter",
    },
    TeamMember {
        name: "Abdullah Muhammad",
        role: "Developer",
    },
    TeamMember {
        name: "Muhammad Abdullah",
        role: "Developer",
    },
    TeamMember {
        name: "Walid Jassim",
        role: "Developer",
    },
];

/// One of the three cards on the context slide. `color` is `RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextCard {
    pub title: &'static str,
    pub color: &'static str,
    pub text: &'static str,
}

pub const CONTEXT_CARDS: [ContextCard; 3] = [
    ContextCard {
        title: "Project Idea",
        color: "6366F1",
        text: "Build a C++ engine that places students into classroom seats automatically, \
using a 2D array as the seating plan.",
    },
    ContextCard {
        title: "Main Goal",
        color: "22C55E",
        text: "Replace manual, error-prone seat distribution with a fast and predictable \
first-free-seat policy.",
    },
    ContextCard {
        title: "Scope",
        color: "A855F7",
        text: "A complete solution for lecture halls: initialization, availability checks, \
assignment and a printed seating map.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionStep {
    pub number: u8,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const SOLUTION_STEPS: [SolutionStep; 5] = [
    SolutionStep {
        number: 1,
        title: "Initialize",
        detail: "Create 2D array matrix\nFill all seats with \"EMPTY\"",
    },
    SolutionStep {
        number: 2,
        title: "Input",
        detail: "Receive student ID\nS_001",
    },
    SolutionStep {
        number: 3,
        title: "Search",
        detail: "Scan matrix for empty seat\nFound position: [0,0]",
    },
    SolutionStep {
        number: 4,
        title: "Assign",
        detail: "Reserve seat for student\nUpdate: classroom[0][0]",
    },
    SolutionStep {
        number: 5,
        title: "Display",
        detail: "Render visual map\nShow updated layout",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureItem {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FUTURE_SCOPE: [FutureItem; 3] = [
    FutureItem {
        title: "Data Persistence",
        desc: "Integration with File I/O (CSV) or SQLite to permanently store student records \
and seating arrangements between sessions, replacing the current volatile RAM storage.",
    },
    FutureItem {
        title: "Algorithmic Optimization",
        desc: "Implementing a Hash Map (std::unordered_map) for student lookups to reduce the \
search complexity from O(R*C) to O(1) for large-scale auditoriums.",
    },
    FutureItem {
        title: "GUI Integration",
        desc: "Developing a graphical interface using Qt or wxWidgets to provide an interactive, \
click-based seating management experience for end users.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub tool: &'static str,
}

pub const RESOURCES: [Resource; 6] = [
    Resource {
        name: "Logic Flowchart",
        tool: "draw.io",
    },
    Resource {
        name: "Report Design",
        tool: "Canva",
    },
    Resource {
        name: "Development IDE",
        tool: "VS Code",
    },
    Resource {
        name: "Learning Resources",
        tool: "GeeksforGeeks & cplusplus.com",
    },
    Resource {
        name: "Icon Library",
        tool: "Heroicons",
    },
    Resource {
        name: "Core Language",
        tool: "C++ (GCC)",
    },
];

/// Demonstration queue fed into `assignSeat`, in order
pub const STUDENT_QUEUE: [&str; 3] = ["S_001", "S_002", "S_003"];

/// Flowchart of `assignSeat`, in the mermaid `flowchart TD` dialect
pub const FLOWCHART_DEFINITION: &str = r#"
%% scan-and-place allocation
flowchart TD
  A([Start]):::start --> B[/Input Student ID/]:::proc
  B --> C[Loop i: 0 to ROWS]:::proc
  C --> D[Loop j: 0 to COLS]:::proc
  D --> E{Is Slot Empty?}:::decision
  E -- Yes --> F[Assign Seat]:::proc
  F --> G[/Return True/]:::proc
  E -- No --> D
  D -- End Row --> C
  C -- End Table --> H([Class Full]):::endnode
  H --> I([End]):::endnode
  G --> I

  classDef start fill:#d1fae5,stroke:#059669,stroke-width:2px;
  classDef proc fill:#eff6ff,stroke:#3b82f6,stroke-width:2px;
  classDef decision fill:#ffedd5,stroke:#ea580c,stroke-width:2px;
  classDef endnode fill:#fee2e2,stroke:#dc2626,stroke-width:2px;
"#;

/// Render the report as plain text, the terminal stand-in for printing the page.
pub fn report_text() -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(REPORT_SUBTITLE);
    out.push_str(" - ");
    out.push_str(REPORT_DATE);
    out.push_str("\n\nTEAM\n");
    for (i, member) in TEAM.iter().enumerate() {
        out.push_str(&format!("  {}. {} ({})\n", i + 1, member.name, member.role));
    }

    out.push_str("\nEXECUTIVE SUMMARY\n");
    out.push_str(SUMMARY);
    out.push('\n');

    out.push_str("\nPROJECT CONTEXT\n");
    for card in &CONTEXT_CARDS {
        out.push_str(&format!("  * {}: {}\n", card.title, card.text));
    }

    out.push_str("\nSOLUTION STEPS\n");
    for step in &SOLUTION_STEPS {
        out.push_str(&format!(
            "  {}. {} - {}\n",
            step.number,
            step.title,
            step.detail.replace('\n', "; ")
        ));
    }

    out.push_str("\nFUNCTION ANALYSIS\n");
    for sample in &FUNCTION_SAMPLES {
        out.push_str(&format!(
            "  {}  [{}]  returns {}\n",
            sample.name, sample.complexity, sample.return_type
        ));
    }

    out.push_str("\nSOURCE CODE\n");
    out.push_str(FULL_SOURCE);
    out.push_str("\nSAMPLE OUTPUT\n");
    out.push_str(SAMPLE_OUTPUT);
    out.push('\n');

    out.push_str("\nFUTURE SCOPE\n");
    for item in &FUTURE_SCOPE {
        out.push_str(&format!("  * {}: {}\n", item.title, item.desc));
    }

    out.push_str("\nRESOURCES\n");
    for res in &RESOURCES {
        out.push_str(&format!("  * {}: {}\n", res.name, res.tool));
    }
    out
}
