//! Fixed reference tables: number profiles, plane texts, missing-number
//! effects, personality groups, number relationships and angel numbers.

use serde::Serialize;

use crate::planes::Plane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberProfile {
    pub number: u8,
    pub planet: &'static str,
    pub title: &'static str,
    pub characteristics: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub lucky_colors: &'static [&'static str],
    pub lucky_days: &'static [&'static str],
}

static NUMBER_PROFILES: [NumberProfile; 9] = [
    NumberProfile {
        number: 1,
        planet: "Sun",
        title: "The Leader",
        characteristics: &["Independent", "Ambitious", "Self-driven", "Original thinker"],
        strengths: &["Takes initiative", "Strong willpower", "Natural authority"],
        challenges: &["Can be stubborn", "Struggles to delegate", "Impatient with others"],
        careers: &["Entrepreneur", "Executive", "Politician", "Administrator"],
        lucky_colors: &["Gold", "Orange", "Yellow"],
        lucky_days: &["Sunday", "Monday"],
    },
    NumberProfile {
        number: 2,
        planet: "Moon",
        title: "The Peacemaker",
        characteristics: &["Sensitive", "Diplomatic", "Intuitive", "Cooperative"],
        strengths: &["Reads people well", "Builds harmony", "Patient listener"],
        challenges: &["Mood swings", "Indecisive under pressure", "Overly dependent on approval"],
        careers: &["Counsellor", "Mediator", "Artist", "Hospitality"],
        lucky_colors: &["White", "Cream", "Light green"],
        lucky_days: &["Monday", "Friday"],
    },
    NumberProfile {
        number: 3,
        planet: "Jupiter",
        title: "The Guide",
        characteristics: &["Wise", "Optimistic", "Disciplined", "Expressive"],
        strengths: &["Teaches and inspires", "Strong moral compass", "Good communicator"],
        challenges: &["Can be preachy", "Overconfident", "Dislikes being told what to do"],
        careers: &["Teacher", "Advisor", "Lawyer", "Writer"],
        lucky_colors: &["Yellow", "Purple", "Pink"],
        lucky_days: &["Thursday", "Tuesday"],
    },
    NumberProfile {
        number: 4,
        planet: "Rahu",
        title: "The Builder",
        characteristics: &["Practical", "Unconventional", "Hardworking", "Methodical"],
        strengths: &["Organises complex work", "Loyal", "Finds unusual solutions"],
        challenges: &["Sudden ups and downs", "Rebellious streak", "Prone to overwork"],
        careers: &["Engineer", "Technologist", "Researcher", "Planner"],
        lucky_colors: &["Blue", "Grey", "Khaki"],
        lucky_days: &["Saturday", "Sunday"],
    },
    NumberProfile {
        number: 5,
        planet: "Mercury",
        title: "The Communicator",
        characteristics: &["Versatile", "Quick-witted", "Curious", "Sociable"],
        strengths: &["Adapts fast", "Persuasive speaker", "Good with money and trade"],
        challenges: &["Restless", "Scattered focus", "Takes risks too lightly"],
        careers: &["Sales", "Media", "Trader", "Travel"],
        lucky_colors: &["Green", "Turquoise", "Light grey"],
        lucky_days: &["Wednesday", "Friday"],
    },
    NumberProfile {
        number: 6,
        planet: "Venus",
        title: "The Nurturer",
        characteristics: &["Caring", "Artistic", "Responsible", "Charming"],
        strengths: &["Creates beauty and comfort", "Devoted to family", "Strong sense of duty"],
        challenges: &["Indulgent", "Possessive", "Takes on others' burdens"],
        careers: &["Designer", "Healthcare", "Entertainment", "Luxury goods"],
        lucky_colors: &["Pink", "Sky blue", "White"],
        lucky_days: &["Friday", "Tuesday"],
    },
    NumberProfile {
        number: 7,
        planet: "Ketu",
        title: "The Seeker",
        characteristics: &["Spiritual", "Analytical", "Reserved", "Perceptive"],
        strengths: &["Deep thinker", "Strong intuition", "Independent research"],
        challenges: &["Withdrawn", "Sceptical of others", "Difficulty settling"],
        careers: &["Scientist", "Philosopher", "Healer", "Analyst"],
        lucky_colors: &["Light green", "White", "Smoky grey"],
        lucky_days: &["Monday", "Sunday"],
    },
    NumberProfile {
        number: 8,
        planet: "Saturn",
        title: "The Achiever",
        characteristics: &["Patient", "Serious", "Just", "Persistent"],
        strengths: &["Endures hardship", "Builds lasting wealth", "Fair in judgement"],
        challenges: &["Delayed results", "Pessimism", "Isolation"],
        careers: &["Banking", "Law", "Real estate", "Industry"],
        lucky_colors: &["Dark blue", "Black", "Purple"],
        lucky_days: &["Saturday", "Friday"],
    },
    NumberProfile {
        number: 9,
        planet: "Mars",
        title: "The Warrior",
        characteristics: &["Courageous", "Energetic", "Humanitarian", "Passionate"],
        strengths: &["Fearless in action", "Protective", "Completes what others start"],
        challenges: &["Short temper", "Impulsive", "Accident prone"],
        careers: &["Military", "Surgeon", "Athlete", "Social work"],
        lucky_colors: &["Red", "Crimson", "Pink"],
        lucky_days: &["Tuesday", "Thursday"],
    },
];

pub fn number_profile(number: u8) -> Option<&'static NumberProfile> {
    NUMBER_PROFILES.iter().find(|p| p.number == number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaneInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub balance_tip: Option<&'static str>,
}

pub fn plane_info(plane: Plane) -> &'static PlaneInfo {
    match plane {
        Plane::Mental => &MENTAL,
        Plane::Emotional => &EMOTIONAL,
        Plane::Practical => &PRACTICAL,
        Plane::Thought => &THOUGHT,
        Plane::Will => &WILL,
        Plane::Action => &ACTION,
        Plane::Diagonal1 => &DIAGONAL1,
        Plane::Diagonal2 => &DIAGONAL2,
    }
}

static MENTAL: PlaneInfo = PlaneInfo {
    name: "Mental Plane",
    description: "Top row (4, 9, 2). Intellect, memory and analytical ability.",
    characteristics: &["Sharp memory", "Logical reasoning", "Capacity for planning"],
    balance_tip: Some("Daily reading and puzzles strengthen a thin mental plane."),
};

static EMOTIONAL: PlaneInfo = PlaneInfo {
    name: "Emotional Plane",
    description: "Middle row (3, 5, 7). Feelings, empathy and spiritual sensitivity.",
    characteristics: &["Emotional depth", "Empathy", "Inner balance"],
    balance_tip: Some("Journaling and quiet reflection help settle the emotional plane."),
};

static PRACTICAL: PlaneInfo = PlaneInfo {
    name: "Practical Plane",
    description: "Bottom row (8, 1, 6). Material handling, money and physical work.",
    characteristics: &["Down to earth", "Skill with resources", "Physical stamina"],
    balance_tip: Some("Set concrete routines and budgets to ground ideas in practice."),
};

static THOUGHT: PlaneInfo = PlaneInfo {
    name: "Thought Plane",
    description: "Left column (4, 3, 8). Planning, ideas and organisation.",
    characteristics: &["Structured thinking", "Foresight", "Organising ability"],
    balance_tip: Some("Write plans down before acting on them."),
};

static WILL: PlaneInfo = PlaneInfo {
    name: "Will Plane",
    description: "Middle column (9, 5, 1). Determination and persistence.",
    characteristics: &["Determination", "Persistence", "Self-motivation"],
    balance_tip: Some("Small, finished commitments build willpower over time."),
};

static ACTION: PlaneInfo = PlaneInfo {
    name: "Action Plane",
    description: "Right column (2, 7, 6). Turning intentions into deeds.",
    characteristics: &["Follow-through", "Initiative", "Energy for execution"],
    balance_tip: Some("Break goals into first steps that can be done today."),
};

static DIAGONAL1: PlaneInfo = PlaneInfo {
    name: "Golden Yog (4-5-6)",
    description: "Diagonal from top left to bottom right. Prosperity and steady growth.",
    characteristics: &["Material success", "Stability", "Steady progress"],
    balance_tip: None,
};

static DIAGONAL2: PlaneInfo = PlaneInfo {
    name: "Silver Yog (2-5-8)",
    description: "Diagonal from top right to bottom left. Property, wealth and good fortune.",
    characteristics: &["Accumulated wealth", "Property gains", "Support from others"],
    balance_tip: None,
};

static MISSING_NUMBER_EFFECTS: [&str; 9] = [
    "Lack of self-confidence and difficulty expressing oneself; may depend on others for direction.",
    "Low sensitivity to others' feelings and impatience; intuition needs conscious development.",
    "Reduced imagination and trouble expressing ideas; may lack confidence in creative work.",
    "Disorganised habits and trouble with discipline; practical follow-through may suffer.",
    "Lack of balance and emotional steadiness; can struggle to adapt to change.",
    "Difficulty with home and family responsibilities; may neglect close relationships.",
    "Disappointments in personal life push lessons through experience; spiritual growth comes slowly.",
    "Carelessness with details and money; needs method to build lasting results.",
    "Lack of drive and compassion for wider causes; ambitions may remain unfinished.",
];

/// Effect text for a digit absent from the grid.
pub fn missing_number_effect(digit: u8) -> Option<&'static str> {
    match digit {
        1..=9 => Some(MISSING_NUMBER_EFFECTS[digit as usize - 1]),
        _ => None,
    }
}

pub const GROUP_A_DIGITS: [u8; 4] = [1, 3, 4, 9];
pub const GROUP_B_DIGITS: [u8; 4] = [2, 6, 7, 8];
pub const ADAPTER_DIGIT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupProfile {
    pub label: &'static str,
    pub traits: &'static [&'static str],
    pub behaviors: &'static [&'static str],
    pub description: &'static str,
    pub description_with_five: &'static str,
}

pub static GROUP_A: GroupProfile = GroupProfile {
    label: "Career-Focused Achiever",
    traits: &[
        "Goal oriented",
        "Ambitious",
        "Logical",
        "Disciplined",
        "Competitive",
        "Decisive",
        "Independent",
    ],
    behaviors: &[
        "Sets clear targets and tracks progress",
        "Prioritises work and recognition",
        "Prefers facts over feelings when deciding",
        "Takes charge in group settings",
    ],
    description: "Achievement numbers dominate the birth date. Drive, structure and public success come naturally, while emotional needs can be pushed aside.",
    description_with_five: "Achievement numbers dominate the birth date, and the presence of 5 adds flexibility. Ambition is steady but can change course when circumstances demand it.",
};

pub static GROUP_B: GroupProfile = GroupProfile {
    label: "Emotional & Creative Soul",
    traits: &[
        "Empathetic",
        "Imaginative",
        "Intuitive",
        "Caring",
        "Artistic",
        "Sensitive",
        "Family oriented",
    ],
    behaviors: &[
        "Decides by feeling and intuition",
        "Invests heavily in close relationships",
        "Expresses self through creative outlets",
        "Avoids open conflict",
    ],
    description: "Emotional and creative numbers dominate the birth date. Relationships, beauty and inner life matter most, while practical ambition may need encouragement.",
    description_with_five: "Emotional and creative numbers dominate the birth date, and the presence of 5 lends adaptability. Feelings run deep yet recover quickly from setbacks.",
};

pub const FLEXIBLE_TYPE: &str = "Flexible & Adaptive";
pub static FLEXIBLE_TRAITS: &[&str] = &["Adaptable", "Open minded", "Resourceful", "Calm under change"];
pub static FLEXIBLE_BEHAVIORS: &[&str] = &[
    "Adjusts quickly to new people and places",
    "Keeps options open instead of committing early",
    "Mediates between opposing views",
];
pub const FLEXIBLE_DESCRIPTION: &str = "Neither achievement nor emotional numbers appear in the birth date. The personality bends to circumstances and finds its footing wherever it lands.";

pub const BALANCED_TYPE: &str = "Balanced Personality";
pub static BALANCED_BEHAVIORS: &[&str] = &[
    "Weighs both logic and feeling before deciding",
    "Moves between leading and supporting roles",
    "Keeps work and family in proportion",
    "Relates easily to very different people",
];
pub const BALANCED_DESCRIPTION: &str = "Achievement and emotional numbers are nearly even. Ambition is tempered by empathy, giving a well rounded temperament that can succeed in varied settings.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberRelationship {
    pub number: u8,
    pub role: &'static str,
    pub friends: &'static [u8],
    pub enemies: &'static [u8],
    pub neutrals: &'static [u8],
}

// Entries are literal: 8 names itself as friend and enemy, and 7 twice.
static RELATIONSHIPS: [NumberRelationship; 9] = [
    NumberRelationship {
        number: 1,
        role: "Sun - King",
        friends: &[1, 2, 3, 9],
        enemies: &[6, 8],
        neutrals: &[4, 5, 7],
    },
    NumberRelationship {
        number: 2,
        role: "Moon - Queen",
        friends: &[1, 2, 3, 5],
        enemies: &[4, 8, 9],
        neutrals: &[6, 7],
    },
    NumberRelationship {
        number: 3,
        role: "Jupiter - Teacher",
        friends: &[1, 2, 3, 9],
        enemies: &[5, 6],
        neutrals: &[4, 7, 8],
    },
    NumberRelationship {
        number: 4,
        role: "Rahu - Rebel",
        friends: &[1, 5, 6, 7, 8],
        enemies: &[2, 4, 9],
        neutrals: &[3],
    },
    NumberRelationship {
        number: 5,
        role: "Mercury - Prince",
        friends: &[1, 4, 5, 6],
        enemies: &[2],
        neutrals: &[3, 7, 8, 9],
    },
    NumberRelationship {
        number: 6,
        role: "Venus - Advisor",
        friends: &[4, 5, 6, 7, 8],
        enemies: &[1, 2, 3],
        neutrals: &[9],
    },
    NumberRelationship {
        number: 7,
        role: "Ketu - Mystic",
        friends: &[1, 4, 5, 6],
        enemies: &[9],
        neutrals: &[2, 3, 7, 8],
    },
    NumberRelationship {
        number: 8,
        role: "Saturn - Judge",
        friends: &[5, 6, 7, 7, 8],
        enemies: &[1, 2, 8],
        neutrals: &[3, 4, 9],
    },
    NumberRelationship {
        number: 9,
        role: "Mars - Commander",
        friends: &[1, 2, 3, 9],
        enemies: &[4, 5],
        neutrals: &[6, 7, 8],
    },
];

pub fn relationship(number: u8) -> Option<&'static NumberRelationship> {
    RELATIONSHIPS.iter().find(|r| r.number == number)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AngelNumber {
    pub number: u16,
    pub theme: &'static str,
    pub meaning: &'static str,
}

static ANGEL_NUMBERS: [AngelNumber; 10] = [
    AngelNumber {
        number: 0,
        theme: "Fresh start",
        meaning: "A cycle has closed. Potential is wide open and guidance is close at hand.",
    },
    AngelNumber {
        number: 111,
        theme: "Manifestation",
        meaning: "Thoughts are turning into reality quickly. Keep intentions positive and clear.",
    },
    AngelNumber {
        number: 222,
        theme: "Balance",
        meaning: "Trust the process. Partnerships and patience will carry the plan forward.",
    },
    AngelNumber {
        number: 333,
        theme: "Support",
        meaning: "Help is present. Express yourself and let creativity lead.",
    },
    AngelNumber {
        number: 444,
        theme: "Protection",
        meaning: "The foundation is solid. Keep working steadily; the effort is noticed.",
    },
    AngelNumber {
        number: 555,
        theme: "Change",
        meaning: "Major change is arriving. Let go of what no longer fits.",
    },
    AngelNumber {
        number: 666,
        theme: "Realignment",
        meaning: "Refocus on balance between material concerns and inner life.",
    },
    AngelNumber {
        number: 777,
        theme: "Luck",
        meaning: "Spiritual growth is rewarded. Keep learning and trust intuition.",
    },
    AngelNumber {
        number: 888,
        theme: "Abundance",
        meaning: "Financial and personal abundance is flowing in as a result of past effort.",
    },
    AngelNumber {
        number: 999,
        theme: "Completion",
        meaning: "A chapter is ending. Prepare to serve a larger purpose in the next one.",
    },
];

pub fn angel_number(number: u16) -> Option<&'static AngelNumber> {
    ANGEL_NUMBERS.iter().find(|a| a.number == number)
}

pub fn angel_numbers() -> &'static [AngelNumber] {
    &ANGEL_NUMBERS
}
