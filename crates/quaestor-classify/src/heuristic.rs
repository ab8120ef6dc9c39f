use std::sync::LazyLock;

use regex::Regex;

use quaestor_core::{ClassificationResult, EntityType};

static TICKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{1,5}\.?$").unwrap());

static TWO_CAP_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+$").unwrap());

static MIDDLE_INITIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z]\.? [A-Z][a-z]+$").unwrap());

static TITLED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:mr|mrs|ms|dr|prof|sen|rep|gov|pres|vice) [A-Z]").unwrap()
});

static MULTI_UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z].*[A-Z]").unwrap());

static AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}\s*(years old|yr old|yrs old)").unwrap());

const COMPANY_SUFFIXES: &[&str] = &[
    "inc",
    "corporation",
    "corp",
    "llc",
    "ltd",
    "limited",
    "group",
    "systems",
    "labs",
    "co.",
    "company",
    "technologies",
    "tech",
    "ventures",
    "capital",
    "partners",
    "holdings",
];

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sen", "rep", "gov", "pres", "vice",
];

const POLITICAL_KEYWORDS: &[&str] = &[
    "senator",
    "sen.",
    "representative",
    "rep.",
    "governor",
    "gov.",
    "mayor",
    "congressman",
    "congresswoman",
    "president",
    "vice president",
    "secretary",
    "attorney general",
    "assemblyman",
];

const ORG_KEYWORDS: &[&str] = &["committee", "foundation", "fund"];

/// Does the term look like a capitalized person name? Guards the
/// branding rule below: "John Smith", "Jane Q. Public" and
/// "Dr John Smith" all carry multiple capitals but must fall through
/// to the person rules.
fn looks_like_person_name(t: &str) -> bool {
    TWO_CAP_WORDS_RE.is_match(t) || MIDDLE_INITIAL_RE.is_match(t) || TITLED_NAME_RE.is_match(t)
}

/// Lexical person/company classifier. Pure and total: every term maps
/// to a result with confidence in [0, 1]. The cascade order is a
/// contract — later rules are tie-breaks for cases earlier rules miss.
pub fn classify(term: &str) -> ClassificationResult {
    let t = term.trim();
    let t_lower = t.to_lowercase();
    let words: Vec<&str> = t.split_whitespace().collect();

    // 1. Stock-ticker shape: 1-5 uppercase letters, optional trailing dot.
    if TICKER_RE.is_match(t) {
        return ClassificationResult::new(
            EntityType::Company,
            0.70,
            "Uppercase pattern matches stock ticker format",
        );
    }

    // 2. Company suffix token.
    if COMPANY_SUFFIXES.iter().any(|s| t_lower.ends_with(s)) {
        return ClassificationResult::new(
            EntityType::Company,
            0.75,
            "Contains typical company suffix",
        );
    }

    // 3. Multiple capitals suggest branding ("McDonalds"), unless the
    // term reads as a person name.
    if MULTI_UPPER_RE.is_match(t) && !looks_like_person_name(t) {
        return ClassificationResult::new(
            EntityType::Company,
            0.65,
            "Multiple capital letters suggest company branding",
        );
    }

    // 4. Person-name shapes: 2-4 words, at least 80% capitalized.
    if (2..=4).contains(&words.len()) {
        let capitalized = words
            .iter()
            .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
            .count();

        if capitalized as f64 >= words.len() as f64 * 0.8 {
            if TITLES.contains(&words[0].to_lowercase().as_str()) {
                return ClassificationResult::new(EntityType::Person, 0.85, "Title prefix detected");
            }

            if MIDDLE_INITIAL_RE.is_match(t) {
                return ClassificationResult::new(
                    EntityType::Person,
                    0.80,
                    "Middle initial pattern typical of person names",
                );
            }

            if words.len() <= 3 {
                return ClassificationResult::new(
                    EntityType::Person,
                    0.70,
                    "Proper capitalization suggests person name",
                );
            }
        }
    }

    // 5. Political role keyword.
    if POLITICAL_KEYWORDS.iter().any(|k| t_lower.contains(k)) {
        return ClassificationResult::new(
            EntityType::Person,
            0.80,
            "Contains political position keyword",
        );
    }

    // 6. Age expression.
    if AGE_RE.is_match(&t_lower) {
        return ClassificationResult::new(EntityType::Person, 0.75, "Age indicator suggests person");
    }

    // 7. Organization keyword.
    if ORG_KEYWORDS.iter().any(|k| t_lower.contains(k)) {
        return ClassificationResult::new(
            EntityType::Company,
            0.60,
            "Contains organization indicator",
        );
    }

    // 8. Nothing matched.
    ClassificationResult::new(EntityType::Company, 0.50, "Default assumption: company")
}
