//! Field-shaped fake values.
//!
//! Every helper takes the RNG explicitly so a seeded generator yields the same
//! sequence of values run after run.

use chrono::Duration;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;

use fakeapi_domain::time::Timestamp;

use crate::words;

const DAY_SECONDS: i64 = 24 * 60 * 60;
const YEAR_SECONDS: i64 = 365 * DAY_SECONDS;

fn pick<R: Rng>(rng: &mut R, list: &[&'static str]) -> &'static str {
    list.choose(rng).copied().unwrap_or_default()
}

/// Replace every `#` in `pattern` with a random digit.
pub fn replace_digits<R: Rng>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == '#' {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}

/// A numeric string of exactly `len` digits.
pub fn digits<R: Rng>(rng: &mut R, len: usize) -> String {
    replace_digits(rng, &"#".repeat(len))
}

/// Individual taxpayer number (CPF), 11 digits.
pub fn cpf<R: Rng>(rng: &mut R) -> String {
    digits(rng, 11)
}

/// Company taxpayer number (CNPJ), 14 digits.
pub fn cnpj<R: Rng>(rng: &mut R) -> String {
    digits(rng, 14)
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        pick(rng, words::FIRST_NAMES),
        pick(rng, words::LAST_NAMES)
    )
}

/// Lowercase ASCII address built from a fresh first and last name.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let local = format!(
        "{}.{}{}",
        pick(rng, words::FIRST_NAMES),
        pick(rng, words::LAST_NAMES),
        rng.gen_range(1..100)
    );
    let local: String = local
        .to_lowercase()
        .chars()
        .map(fold_accent)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    format!("{local}@{}", pick(rng, words::EMAIL_PROVIDERS))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        other => other,
    }
}

/// 15 random alphanumerics.
pub fn password<R: Rng>(rng: &mut R) -> String {
    std::iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
        .take(15)
        .collect()
}

pub fn department<R: Rng>(rng: &mut R) -> String {
    pick(rng, words::DEPARTMENTS).to_string()
}

pub fn company_name<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!(
            "{} {}",
            pick(rng, words::LAST_NAMES),
            pick(rng, words::COMPANY_SUFFIXES)
        ),
        1 => format!(
            "{}-{}",
            pick(rng, words::LAST_NAMES),
            pick(rng, words::LAST_NAMES)
        ),
        _ => format!(
            "{}, {} e {}",
            pick(rng, words::LAST_NAMES),
            pick(rng, words::LAST_NAMES),
            pick(rng, words::LAST_NAMES)
        ),
    }
}

/// Capitalized lorem-ipsum sentence of 3 to 10 words ending with a period.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=10);
    let picked: Vec<&str> = (0..count).map(|_| pick(rng, words::LOREM)).collect();
    let text = picked.join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}, {} - {}",
        pick(rng, words::STREET_SUFFIXES),
        pick(rng, words::FIRST_NAMES),
        pick(rng, words::LAST_NAMES),
        rng.gen_range(1..5000),
        pick(rng, words::CITIES)
    )
}

pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let format = pick(rng, words::PHONE_FORMATS);
    replace_digits(rng, format)
}

pub fn job_title<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {}",
        pick(rng, words::JOB_DESCRIPTORS),
        pick(rng, words::JOB_AREAS)
    )
}

pub fn avatar_url<R: Rng>(rng: &mut R) -> String {
    format!(
        "https://avatars.githubusercontent.com/u/{}",
        rng.gen_range(1..100_000_000)
    )
}

/// An instant within the year before `now`.
pub fn past<R: Rng>(rng: &mut R, now: Timestamp) -> Timestamp {
    now - Duration::seconds(rng.gen_range(1..=YEAR_SECONDS))
}

/// An instant within the day before `now`.
pub fn recent<R: Rng>(rng: &mut R, now: Timestamp) -> Timestamp {
    now - Duration::seconds(rng.gen_range(1..=DAY_SECONDS))
}

/// A reference uniformly drawn from `1..=upper`, or `None` when the range is empty.
pub fn reference<R: Rng>(rng: &mut R, upper: usize) -> Option<usize> {
    (upper > 0).then(|| rng.gen_range(1..=upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn should_generate_eleven_digit_cpf() {
        let value = cpf(&mut rng());
        assert_eq!(value.len(), 11);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn should_generate_fourteen_digit_cnpj() {
        let value = cnpj(&mut rng());
        assert_eq!(value.len(), 14);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn should_keep_non_placeholder_characters() {
        let value = replace_digits(&mut rng(), "(##) ####-####");
        assert_eq!(value.len(), 14);
        assert!(value.starts_with('('));
        assert_eq!(&value[9..10], "-");
    }

    #[test]
    fn should_generate_ascii_email() {
        let mut rng = rng();
        for _ in 0..50 {
            let value = email(&mut rng);
            assert!(value.is_ascii());
            assert_eq!(value.matches('@').count(), 1);
        }
    }

    #[test]
    fn should_generate_fifteen_character_password() {
        let value = password(&mut rng());
        assert_eq!(value.len(), 15);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn should_capitalize_sentence_and_end_with_period() {
        let value = sentence(&mut rng());
        assert!(value.ends_with('.'));
        assert!(value.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn should_place_past_dates_within_the_last_year() {
        let now = chrono::Utc::now();
        let mut rng = rng();
        for _ in 0..50 {
            let date = past(&mut rng, now);
            assert!(date < now);
            assert!(now - date <= Duration::days(365));
        }
    }

    #[test]
    fn should_place_recent_dates_within_the_last_day() {
        let now = chrono::Utc::now();
        let date = recent(&mut rng(), now);
        assert!(date < now);
        assert!(now - date <= Duration::days(1));
    }

    #[test]
    fn should_draw_reference_within_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let value = reference(&mut rng, 5).unwrap();
            assert!((1..=5).contains(&value));
        }
        assert_eq!(reference(&mut rng, 0), None);
    }

    #[test]
    fn should_repeat_values_for_same_seed() {
        assert_eq!(full_name(&mut rng()), full_name(&mut rng()));
    }
}
