//! Deck Data Model
//!
//! A deck is a fixed, ordered, non-empty sequence of slides built once at
//! startup and never mutated. Each slide kind carries exactly the fields its
//! layout template needs, so rendering dispatch is exhaustive and a template
//! cannot reach into another kind's content.

/// A feature highlight on the solution slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideKind {
    Title {
        heading: &'static str,
        subheading: &'static str,
        team: &'static str,
        event: &'static str,
        tagline: &'static str,
    },
    Problem {
        heading: &'static str,
        points: Vec<&'static str>,
    },
    Solution {
        heading: &'static str,
        features: Vec<Feature>,
    },
}

/// One discrete screen of content. `id` is informational only; position in
/// the deck is what navigation operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: usize,
    pub kind: SlideKind,
}

/// Fixed, ordered, non-empty sequence of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Panics on an empty slide list; decks are authored constants and an
    /// empty one is unpresentable.
    pub fn new(slides: Vec<Slide>) -> Self {
        assert!(!slides.is_empty(), "a deck must contain at least one slide");
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

/// The built-in SpaceGuard AI pitch deck.
pub fn spaceguard_deck() -> Deck {
    Deck::new(vec![
        Slide {
            id: 1,
            kind: SlideKind::Title {
                heading: "SPACEGUARD AI",
                subheading: "AI that keeps space stations safe",
                team: "Team Zentra - Vaibhav Kumar & Team",
                event: "CodeAlchemy Hackathon 2025 | Duality AI Challenge #2",
                tagline: "\"Detecting Safety. Securing Space.\"",
            },
        },
        Slide {
            id: 2,
            kind: SlideKind::Problem {
                heading: "Critical Safety Challenges in Space",
                points: vec![
                    "Astronauts manually inspect oxygen tanks, fire extinguishers, and safety equipment",
                    "Time-consuming process in mission-critical environments",
                    "Human error risks increase with poor lighting and difficult angles",
                    "Missing even one safety check can be catastrophic",
                    "Current systems lack real-time monitoring capabilities",
                ],
            },
        },
        Slide {
            id: 3,
            kind: SlideKind::Solution {
                heading: "SpaceGuard AI - Automated Safety Detection",
                features: vec![
                    Feature {
                        name: "Real-time Detection",
                        description: "7 types of safety equipment",
                    },
                    Feature {
                        name: "Adaptive Vision",
                        description: "Works in any lighting or camera angle",
                    },
                    Feature {
                        name: "Synthetic Training",
                        description: "Powered by Falcon's digital twin data",
                    },
                    Feature {
                        name: "Edge Computing",
                        description: "Optimized for space station deployment",
                    },
                ],
            },
        },
    ])
}
