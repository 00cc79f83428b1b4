//! Static description tables for types, identities and dimension poles

use crate::{BaseType, Dimension, Identity};

/// Human-readable name and summary for a four-letter type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescription {
    pub name: &'static str,
    pub summary: &'static str,
}

impl TypeDescription {
    const fn new(name: &'static str, summary: &'static str) -> Self {
        Self { name, summary }
    }
}

/// Canonical description of a four-letter type
pub fn describe(base: BaseType) -> TypeDescription {
    use BaseType::*;
    match base {
        INTJ => TypeDescription::new("The Architect", "Strategic, innovative, and independent thinkers with a plan for everything."),
        INTP => TypeDescription::new("The Logician", "Innovative inventors with an unquenchable thirst for knowledge."),
        ENTJ => TypeDescription::new("The Commander", "Bold, imaginative, and strong-willed leaders who find a way or make one."),
        ENTP => TypeDescription::new("The Debater", "Smart and curious thinkers who love intellectual challenges."),
        INFJ => TypeDescription::new("The Advocate", "Quiet and mystical, yet inspiring and idealistic."),
        INFP => TypeDescription::new("The Mediator", "Poetic, kind, and altruistic, always eager to help a good cause."),
        ENFJ => TypeDescription::new("The Protagonist", "Charismatic and inspiring leaders, able to mesmerize their listeners."),
        ENFP => TypeDescription::new("The Campaigner", "Enthusiastic, creative, and sociable free spirits."),
        ISTJ => TypeDescription::new("The Logistician", "Practical and fact-minded, reliable and dependable."),
        ISFJ => TypeDescription::new("The Defender", "Dedicated and warm protectors, always ready to defend loved ones."),
        ESTJ => TypeDescription::new("The Executive", "Excellent administrators, unsurpassed at managing things and people."),
        ESFJ => TypeDescription::new("The Consul", "Extraordinarily caring, social, and popular people, always eager to help."),
        ISTP => TypeDescription::new("The Virtuoso", "Bold and practical experimenters, masters of all kinds of tools."),
        ISFP => TypeDescription::new("The Adventurer", "Flexible and charming artists, always ready to explore and experience something new."),
        ESTP => TypeDescription::new("The Entrepreneur", "Smart, energetic, and perceptive, living on the edge."),
        ESFP => TypeDescription::new("The Entertainer", "Spontaneous, energetic, and enthusiastic people who love life around them."),
    }
}

/// One-sentence description of the Assertive/Turbulent modifier
pub fn identity_description(identity: Identity) -> &'static str {
    match identity {
        Identity::Assertive => "Assertive: Confident, emotionally stable, and resistant to stress.",
        Identity::Turbulent => "Turbulent: Self-conscious, sensitive to stress, and success-driven.",
    }
}

/// Label for the pole a score leans toward
pub fn pole_label(dimension: Dimension, score: i32) -> &'static str {
    let first = score >= 0;
    match (dimension, first) {
        (Dimension::EI, true) => "Extraversion (E)",
        (Dimension::EI, false) => "Introversion (I)",
        (Dimension::SN, true) => "Sensing (S)",
        (Dimension::SN, false) => "Intuition (N)",
        (Dimension::TF, true) => "Thinking (T)",
        (Dimension::TF, false) => "Feeling (F)",
        (Dimension::JP, true) => "Judging (J)",
        (Dimension::JP, false) => "Perceiving (P)",
        (Dimension::AT, true) => "Assertive (A)",
        (Dimension::AT, false) => "Turbulent (T)",
    }
}

/// Name of the axis as a whole, used in exports
pub fn axis_name(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::EI => "Extraversion / Introversion",
        Dimension::SN => "Sensing / Intuition",
        Dimension::TF => "Thinking / Feeling",
        Dimension::JP => "Judging / Perceiving",
        Dimension::AT => "Assertive / Turbulent",
    }
}
