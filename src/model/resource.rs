use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResourceKind {
    Grain,
    Horses,
    Stone,
    Iron,
    Gems,
    Wood,
    Herbs,
    Fish,
}

labelled_enum!(ResourceKind, "resource", {
    Grain => "grain",
    Horses => "horses",
    Stone => "stone",
    Iron => "iron",
    Gems => "gems",
    Wood => "wood",
    Herbs => "herbs",
    Fish => "fish",
});

impl ResourceKind {
    /// Baseline monthly yield range before terrain modifiers.
    pub fn base_quantity_range(self) -> (u32, u32) {
        match self {
            ResourceKind::Grain => (50, 150),
            ResourceKind::Horses => (5, 20),
            ResourceKind::Stone => (30, 100),
            ResourceKind::Iron => (10, 40),
            ResourceKind::Gems => (1, 5),
            ResourceKind::Wood => (40, 120),
            ResourceKind::Herbs => (5, 25),
            ResourceKind::Fish => (20, 80),
        }
    }
}
