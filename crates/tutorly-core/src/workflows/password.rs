//! Client-side password policy.
//!
//! Two checks exist on the registration pages:
//! - a live checklist, one flag per rule, updated as the user types
//! - the submit gate, which additionally restricts symbols to `@$!%*?&`

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_LENGTH: usize = 8;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| compile(r"[A-Z]"));
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-z]"));
// ASCII classes: accented letters count as symbols, non-ASCII digits do not.
static DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"[0-9]"));
static ANY_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[^A-Za-z0-9]"));
static ALLOWED_SYMBOL: LazyLock<Regex> = LazyLock::new(|| compile(r"[@$!%*?&]"));
static ALLOWED_CHARSET: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9@$!%*?&]+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static password pattern is valid")
}

/// Per-rule result of the live checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecklist {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecklist {
    pub fn check(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_LENGTH,
            uppercase: UPPERCASE.is_match(password),
            lowercase: LOWERCASE.is_match(password),
            digit: DIGIT.is_match(password),
            symbol: ANY_SYMBOL.is_match(password),
        }
    }

    pub fn all_met(&self) -> bool {
        self.length && self.uppercase && self.lowercase && self.digit && self.symbol
    }

    /// Labels of the rules that are not met yet.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.length, "mínimo de 8 caracteres"),
            (self.uppercase, "uma letra maiúscula"),
            (self.lowercase, "uma letra minúscula"),
            (self.digit, "um número"),
            (self.symbol, "um símbolo"),
        ]
        .into_iter()
        .filter_map(|(met, label)| (!met).then_some(label))
        .collect()
    }
}

/// Submit-time gate used before registration is sent.
pub fn is_acceptable(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
        && ALLOWED_CHARSET.is_match(password)
        && UPPERCASE.is_match(password)
        && LOWERCASE.is_match(password)
        && DIGIT.is_match(password)
        && ALLOWED_SYMBOL.is_match(password)
}
