/// Operator classes as encoded by the upstream character table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profession {
    Pioneer,
    Warrior,
    Sniper,
    Caster,
    Medic,
    Support,
    Special,
    Tank,
}

const ALL_PROFESSIONS: &[Profession] = &[
    Profession::Pioneer,
    Profession::Warrior,
    Profession::Sniper,
    Profession::Caster,
    Profession::Medic,
    Profession::Support,
    Profession::Special,
    Profession::Tank,
];

impl Profession {
    /// Upstream code (e.g. `"WARRIOR"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pioneer => "PIONEER",
            Self::Warrior => "WARRIOR",
            Self::Sniper => "SNIPER",
            Self::Caster => "CASTER",
            Self::Medic => "MEDIC",
            Self::Support => "SUPPORT",
            Self::Special => "SPECIAL",
            Self::Tank => "TANK",
        }
    }

    /// Public class name (e.g. `"Guard"`).
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pioneer => "Vanguard",
            Self::Warrior => "Guard",
            Self::Sniper => "Sniper",
            Self::Caster => "Caster",
            Self::Medic => "Medic",
            Self::Support => "Supporter",
            Self::Special => "Specialist",
            Self::Tank => "Defender",
        }
    }

    pub fn all() -> &'static [Profession] {
        ALL_PROFESSIONS
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string is not a known profession code.
#[derive(Debug, Clone)]
pub struct ProfessionParseError(pub String);

impl std::fmt::Display for ProfessionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown profession: '{}'", self.0)
    }
}

impl std::error::Error for ProfessionParseError {}

impl std::str::FromStr for Profession {
    type Err = ProfessionParseError;

    /// Parse an upstream profession code. Codes are upper-case and matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PROFESSIONS
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| ProfessionParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_8_variants() {
        assert_eq!(Profession::all().len(), 8);
    }

    #[test]
    fn codes_round_trip() {
        for &profession in Profession::all() {
            let parsed: Profession = profession.code().parse().unwrap();
            assert_eq!(parsed, profession);
        }
    }

    #[test]
    fn display_names() {
        let cases = [
            ("PIONEER", "Vanguard"),
            ("WARRIOR", "Guard"),
            ("SNIPER", "Sniper"),
            ("CASTER", "Caster"),
            ("MEDIC", "Medic"),
            ("SUPPORT", "Supporter"),
            ("SPECIAL", "Specialist"),
            ("TANK", "Defender"),
        ];
        for (code, name) in cases {
            let profession: Profession = code.parse().unwrap();
            assert_eq!(profession.display_name(), name);
            assert_eq!(profession.to_string(), name);
        }
    }

    #[test]
    fn unknown_and_lowercase_codes_rejected() {
        assert!("TRAP".parse::<Profession>().is_err());
        assert!("warrior".parse::<Profession>().is_err());
    }
}
