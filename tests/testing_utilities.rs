//! Patterns for testing code built on the containers
//!
//! Demonstrates the assertion macros against a small user directory.

use monad_maniac::prelude::*;
use monad_maniac::{assert_absent, assert_left, assert_present, assert_right};

#[derive(Debug, Clone, PartialEq)]
struct User {
    email: String,
    age: i32,
}

struct Directory {
    users: Vec<User>,
}

impl Directory {
    fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    fn find(&self, email: &str) -> Optional<User> {
        Optional::from_option(self.users.iter().find(|u| u.email == email).cloned())
    }
}

fn validate_email(email: &str) -> Disjunction<String, String> {
    if email.contains('@') && email.contains('.') {
        Disjunction::right(email.to_string())
    } else {
        Disjunction::left("Email must contain @ and .".to_string())
    }
}

fn validate_age(age: i32) -> Disjunction<String, i32> {
    if age >= 18 {
        Disjunction::right(age)
    } else {
        Disjunction::left("Must be 18 or older".to_string())
    }
}

fn register(email: &str, age: i32) -> Disjunction<String, User> {
    validate_email(email).chain(|email| validate_age(age).map(|age| User { email, age }))
}

fn sample_directory() -> Directory {
    Directory::with_users(vec![User {
        email: "jake@example.com".to_string(),
        age: 30,
    }])
}

#[test]
fn test_lookup_present() {
    let dir = sample_directory();
    assert_present!(dir.find("jake@example.com"));
    assert_present!(dir.find("jake@example.com").map(|u| u.age), 30);
}

#[test]
fn test_lookup_absent() {
    let dir = sample_directory();
    assert_absent!(dir.find("nobody@example.com"));
}

#[test]
fn test_register_valid() {
    assert_right!(register("amy@example.com", 25));
    assert_right!(
        register("amy@example.com", 25).map(|u| u.email),
        "amy@example.com".to_string()
    );
}

#[test]
fn test_register_reports_first_failure() {
    assert_left!(
        register("not-an-email", 10),
        "Email must contain @ and .".to_string()
    );
    assert_left!(
        register("amy@example.com", 10),
        "Must be 18 or older".to_string()
    );
}

#[test]
fn test_lookup_feeds_registration() {
    let dir = sample_directory();
    let renewed = dir
        .find("jake@example.com")
        .to_either("unknown user".to_string())
        .chain(|u| register(&u.email, u.age));
    assert_right!(renewed);

    let missing = dir
        .find("ghost@example.com")
        .to_either("unknown user".to_string())
        .chain(|u| register(&u.email, u.age));
    assert_left!(missing, "unknown user".to_string());
}

#[test]
#[should_panic(expected = "Expected Right, got Left")]
fn test_assert_right_reports_left() {
    assert_right!(register("bad", 30));
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_get_or_else_on_any_optional(maybe in any::<Optional<i32>>(), d: i32) {
            let expected = maybe.into_option().unwrap_or(d);
            prop_assert_eq!(maybe.get_or_else(d), expected);
        }

        #[test]
        fn prop_case_of_visits_one_side(d in any::<Disjunction<u8, i32>>()) {
            let visited = d.case_of(|_| "left", |_| "right");
            prop_assert_eq!(visited == "left", d.is_left());
        }
    }
}
