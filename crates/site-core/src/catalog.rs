//! Read-only project reference data and id lookup.

use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub live_url: &'static str,
    pub year: &'static str,
}

pub static PROJECTS: [Project; 5] = [
    Project {
        id: "ar-interface",
        title: "Augmented Reality Interface",
        category: "Mixed Reality",
        description: "Spatial interfaces that blend digital and physical environments through gesture recognition and contextual awareness.",
        images: &[
            "/images/ar-interface-1.jpg",
            "/images/ar-interface-2.jpg",
            "/images/ar-interface-3.jpg",
        ],
        tools: &["Unity", "ARKit", "Figma", "Blender", "C#"],
        live_url: "https://example.com/ar-interface",
        year: "2023",
    },
    Project {
        id: "multimodal-dashboard",
        title: "Multimodal Dashboard",
        category: "Voice Interaction",
        description: "A dashboard combining visual, voice, and touch interactions into one accessible, efficient experience.",
        images: &[
            "/images/dashboard-1.jpg",
            "/images/dashboard-2.jpg",
            "/images/dashboard-3.jpg",
        ],
        tools: &["React", "D3.js", "TensorFlow.js", "Web Speech API", "Figma"],
        live_url: "https://example.com/multimodal-dashboard",
        year: "2022",
    },
    Project {
        id: "gesture-controller",
        title: "Gesture Control System",
        category: "Motion Sensing",
        description: "Camera-based hand tracking mapped onto media controls, tuned for low-light living rooms.",
        images: &[
            "/images/gesture-1.jpg",
            "/images/gesture-2.jpg",
            "/images/gesture-3.jpg",
        ],
        tools: &["MediaPipe", "TypeScript", "WebRTC"],
        live_url: "https://example.com/gesture-controller",
        year: "2022",
    },
    Project {
        id: "audio-visualization",
        title: "Audio Visualization Tool",
        category: "Sound Design",
        description: "Real-time spectral art driven by microphone input, with export to shareable loops.",
        images: &[
            "/images/audioviz-1.jpg",
            "/images/audioviz-2.jpg",
        ],
        tools: &["Web Audio API", "WebGL", "GLSL"],
        live_url: "https://example.com/audio-visualization",
        year: "2021",
    },
    Project {
        id: "haptic-feedback",
        title: "Haptic Feedback System",
        category: "Tactile Design",
        description: "A vibration grammar for mobile interfaces, pairing every visual state change with a tactile cue.",
        images: &[
            "/images/haptic-1.jpg",
            "/images/haptic-2.jpg",
            "/images/haptic-3.jpg",
        ],
        tools: &["Swift", "Core Haptics", "Principle"],
        live_url: "https://example.com/haptic-feedback",
        year: "2021",
    },
];

/// Id-indexed view over [`PROJECTS`].
pub struct Catalog {
    by_id: FnvHashMap<&'static str, &'static Project>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut by_id = FnvHashMap::default();
        for project in &PROJECTS {
            by_id.insert(project.id, project);
        }
        Self { by_id }
    }

    pub fn find(&self, id: &str) -> Option<&'static Project> {
        let found = self.by_id.get(id).copied();
        if found.is_none() {
            log::warn!("[catalog] unknown project id `{id}`");
        }
        found
    }

    pub fn all(&self) -> &'static [Project] {
        &PROJECTS
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
