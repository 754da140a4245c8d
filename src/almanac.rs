use crate::tzolkin::TzolkinDayName;

/// Symbol shown for each day sign, in cyclic order starting at Imix
const GLYPHS: [&str; 20] = [
    "🐊", "💨", "🌑", "🌽", "🐍", "💀", "🦌", "⭐", "💧", "🐕", "🐒", "🦷", "🌽", "🐆", "🦅", "🦉",
    "🌎", "🔪", "🌩️", "☀️",
];

/// Traditional reading of each day sign, in cyclic order starting at Imix
const SIGNIFICANCE: [&str; 20] = [
    "Imix represents primordial earth and nurturing energy. A good day for new beginnings and maternal activities.",
    "Ik represents wind, breath, and spirit. A good day for communication and inspiration.",
    "Akbal represents darkness, the night, and the dreamworld. A good day for introspection and dream work.",
    "Kan represents seed, abundance, and lizard. A good day for planting seeds and starting projects.",
    "Chicchan represents serpent and life force energy. A good day for spiritual work and healing.",
    "Cimi represents death, transformation, and letting go. A good day for releasing what no longer serves you.",
    "Manik represents deer, hand, and grasping knowledge. A good day for skilled work and healing with hands.",
    "Lamat represents star, abundance, and rabbit. A good day for fertility and harmony.",
    "Muluc represents water, offering, and moon. A good day for emotional work and making offerings.",
    "Oc represents dog, loyalty, and guidance. A good day for friendship and working with communities.",
    "Chuen represents monkey, artistry, and weaving. A good day for creative work and play.",
    "Eb represents the human journey and road of life. A good day for making travel plans and community endeavors.",
    "Ben represents corn, abundance, and personal growth. A good day for home and family matters.",
    "Ix represents jaguar, shaman, and earth magic. A good day for working with sacred energies.",
    "Men represents eagle, vision, and higher perspective. A good day for seeing the bigger picture.",
    "Cib represents owl, wisdom, and introspection. A good day for seeking inner wisdom.",
    "Caban represents earth, movement, and synchronicity. A good day for connection with earth energies.",
    "Etznab represents mirror, flint, and truth-telling. A good day for clarity and honest reflection.",
    "Cauac represents storm, thunder, and purification. A good day for cleansing and renewal.",
    "Ahau represents sun, enlightenment, and completion. A good day for celebration and spiritual awareness.",
];

impl TzolkinDayName {
    /// Pictographic stand-in for the day sign
    pub const fn glyph(self) -> &'static str {
        GLYPHS[self.index()]
    }

    /// One-paragraph description of the day's energy
    pub const fn significance(self) -> &'static str {
        SIGNIFICANCE[self.index()]
    }
}
