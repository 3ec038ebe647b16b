/// A showcased project. Read-only; the cube and the hover popup only borrow it.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub stat: &'static str,
    pub link: &'static str,
    pub color: [f32; 3],
}

impl Project {
    /// `#rrggbb` form of the accent color, for the DOM popup.
    pub fn color_hex(&self) -> String {
        let [r, g, b] = self.color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "project-a",
        title: "Ideologies vs Economic Factors",
        description: "Analytics on how political ideologies impact country economies using multi-model comparative analysis.",
        tech: &["R Language", "XGBoost", "Random Forest", "Linear Regression"],
        stat: "Multi-model comparative analysis",
        link: "https://github.com/Schrodingerscat07/r-ideologies-vs-economic-factors",
        color: [0.259, 0.522, 0.957], // #4285F4
    },
    Project {
        id: "project-b",
        title: "Quantum Enhanced Radar",
        description: "Naval target detection using Grover's Algorithm and Phase Kickback. Implemented The Oracle for state marking.",
        tech: &["Python", "Qiskit", "AerSimulator", "NumPy"],
        stat: "O(√N) Search Speedup",
        link: "https://github.com/Schrodingerscat07/Quantum-Enhanced-Radar-Signal-Processing-for-Naval-Target-Detection",
        color: [0.918, 0.263, 0.208], // #EA4335
    },
    Project {
        id: "project-c",
        title: "AlgoArena",
        description: "A gamified e-learning platform for coding with real-time progress tracking.",
        tech: &["Flutter", "TypeScript", "Firebase"],
        stat: "Gamified Learning",
        link: "https://github.com/Schrodingerscat07/ALGOARENA",
        color: [0.984, 0.737, 0.020], // #FBBC05
    },
];
