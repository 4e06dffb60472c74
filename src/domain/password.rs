//! Password strength meter shown on the sign-up form.

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Moderate,
    Fair,
    Strong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Strong => "Strong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    /// 0..=100
    pub score: u8,
    pub level: StrengthLevel,
    pub feedback: Vec<&'static str>,
}

pub fn password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let mut score = 0u32;
    let mut feedback = Vec::new();

    let mut check = |passed: bool, points: u32, hint: &'static str| {
        if passed {
            score += points;
        } else {
            feedback.push(hint);
        }
    };

    check(length >= 8, 25, "At least 8 characters");
    check(
        password.chars().any(|c| c.is_ascii_lowercase()),
        15,
        "Add lowercase letters",
    );
    check(
        password.chars().any(|c| c.is_ascii_uppercase()),
        15,
        "Add uppercase letters",
    );
    check(
        password.chars().any(|c| c.is_ascii_digit()),
        15,
        "Add numbers",
    );
    check(
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        15,
        "Add special characters",
    );

    if length >= 12 {
        score += 15;
    } else if length >= 10 {
        score += 10;
    }

    let level = match score {
        s if s >= 80 => StrengthLevel::Strong,
        s if s >= 60 => StrengthLevel::Fair,
        s if s >= 40 => StrengthLevel::Moderate,
        _ => StrengthLevel::Weak,
    };

    PasswordStrength {
        score: score.min(100) as u8,
        level,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_weak_with_all_hints() {
        let strength = password_strength("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.level, StrengthLevel::Weak);
        assert_eq!(strength.feedback.len(), 5);
    }

    #[test]
    fn long_mixed_password_caps_at_100() {
        let strength = password_strength("Correct-Horse9!");
        assert_eq!(strength.score, 100);
        assert_eq!(strength.level, StrengthLevel::Strong);
        assert!(strength.feedback.is_empty());
    }

    #[test]
    fn lowercase_and_digits_only() {
        // 25 + 15 + 15 = 55
        let strength = password_strength("abcdefg1");
        assert_eq!(strength.score, 55);
        assert_eq!(strength.level, StrengthLevel::Moderate);
        assert_eq!(
            strength.feedback,
            vec!["Add uppercase letters", "Add special characters"]
        );
    }

    #[test]
    fn ten_characters_earn_partial_bonus() {
        // 25 + 15 + 15 + 15 + 10 = 80
        let strength = password_strength("Abcdefgh12");
        assert_eq!(strength.score, 80);
        assert_eq!(strength.level, StrengthLevel::Strong);
    }
}
