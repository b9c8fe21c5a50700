//! The three generation modes and their static descriptors.
//!
//! A mode determines the request path, the payload key the API expects,
//! the result key the API answers with, and all of the copy shown in the
//! UI (title, description, placeholder, example prompts).

use ratatui::style::Color;

/// One of the three fixed functional tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Plan,
    Blog,
    Research,
}

/// Immutable descriptor for a mode. Defined once, never mutated.
#[derive(Debug)]
pub struct ModeSpec {
    /// Stable identifier, also the request path segment.
    pub id: &'static str,
    /// Title shown in the tab bar and result header.
    pub title: &'static str,
    /// One-line description shown under the title.
    pub description: &'static str,
    /// Accent color for the tab and result header.
    pub accent: Color,
    /// Placeholder shown in the empty input field.
    pub placeholder: &'static str,
    /// Example prompts the user can pick to fill the input.
    pub examples: [&'static str; 4],
    /// JSON key the API expects the input under.
    pub payload_key: &'static str,
    /// JSON key the API returns the markdown result under.
    pub result_key: &'static str,
}

static MODE_SPECS: [ModeSpec; 3] = [
    ModeSpec {
        id: "plan",
        title: "Smart Planner",
        description: "Create personalized action plans with market insights",
        accent: Color::Cyan,
        placeholder: "Describe your goal or project you want to plan...",
        examples: [
            "Launch a tech startup in 2025",
            "Learn digital marketing and get certified",
            "Start a YouTube channel about cooking",
            "Build a mobile app for fitness tracking",
        ],
        payload_key: "goal",
        result_key: "plan",
    },
    ModeSpec {
        id: "blog",
        title: "Blog Writer",
        description: "Generate comprehensive blogs with market analysis",
        accent: Color::Magenta,
        placeholder: "Enter the topic you want to write a blog about...",
        examples: [
            "The Future of Artificial Intelligence in 2025",
            "Sustainable Living: Trends and Tips",
            "Remote Work: Best Practices and Tools",
            "Cryptocurrency Market Analysis",
        ],
        payload_key: "topic",
        result_key: "blog",
    },
    ModeSpec {
        id: "research",
        title: "Market Research",
        description: "Get latest market trends and insights",
        accent: Color::LightRed,
        placeholder: "What market or topic would you like to research...",
        examples: [
            "Electric vehicle market trends 2025",
            "Social media marketing statistics",
            "E-commerce growth in developing countries",
            "Renewable energy investment opportunities",
        ],
        payload_key: "query",
        result_key: "research",
    },
];

impl Mode {
    /// All modes in tab order.
    pub const ALL: [Mode; 3] = [Mode::Plan, Mode::Blog, Mode::Research];

    /// Position of this mode in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Mode::Plan => 0,
            Mode::Blog => 1,
            Mode::Research => 2,
        }
    }

    /// The static descriptor for this mode.
    pub fn spec(self) -> &'static ModeSpec {
        &MODE_SPECS[self.index()]
    }

    /// Next mode in tab order, wrapping around.
    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    /// Previous mode in tab order, wrapping around.
    pub fn prev(self) -> Mode {
        Mode::ALL[(self.index() + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }

    /// File name used when exporting this mode's result.
    pub fn export_filename(self) -> String {
        format!("{}-result.pdf", self.spec().id)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec().id)
    }
}
