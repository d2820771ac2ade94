use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered person. Owns zero or more [`Pet`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub happiness: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// First and last name joined by a space and title-cased.
    /// Absent or blank parts are dropped.
    pub fn full_name(&self) -> String {
        let parts = [Some(self.first_name.as_str()), self.last_name.as_deref()];
        title_case(parts.into_iter().flatten())
    }

    pub fn set_happiness(&mut self, happiness: i32) {
        self.happiness = happiness;
    }
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
}

/// An animal owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: Uuid,
    pub name: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new pet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPet {
    pub name: Option<String>,
}

/// Capitalize the first letter of every word and lower-case the rest.
/// Words are whitespace separated; runs of whitespace collapse to one space.
pub fn title_case<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .flat_map(str::split_whitespace)
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::nil(),
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            email: "homer@example.com".to_string(),
            happiness: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn full_name_title_cases_first_and_last() {
        assert_eq!(user("homer", Some("simpson")).full_name(), "Homer Simpson");
    }

    #[test]
    fn full_name_without_last_name() {
        assert_eq!(user("homer", None).full_name(), "Homer");
        assert_eq!(user("homer", Some("")).full_name(), "Homer");
    }

    #[test]
    fn full_name_normalizes_shouting() {
        assert_eq!(user("HOMER", Some("SIMPSON")).full_name(), "Homer Simpson");
        assert_eq!(user("hOMER", Some("sImPsOn")).full_name(), "Homer Simpson");
    }

    #[test]
    fn full_name_handles_multi_word_and_unicode_parts() {
        assert_eq!(
            user("mary  ann", Some("van houten")).full_name(),
            "Mary Ann Van Houten"
        );
        assert_eq!(user("élodie", Some("ÅSTRÖM")).full_name(), "Élodie Åström");
    }

    #[test]
    fn set_happiness_overwrites() {
        let mut u = user("homer", None);
        u.set_happiness(20);
        u.set_happiness(20);
        assert_eq!(u.happiness, 20);
    }
}
