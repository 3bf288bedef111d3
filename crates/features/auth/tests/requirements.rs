use portal_auth::{ErrorKey, FieldErrors, PasswordRequirements, Requirement};
use proptest::prelude::*;

proptest! {
    #[test]
    fn requirements_are_a_function_of_the_password(password in ".{0,160}") {
        let requirements = PasswordRequirements::evaluate(&password);
        let length = password.chars().count();

        prop_assert_eq!(requirements.min_length, (8..=128).contains(&length));
        prop_assert_eq!(requirements.has_uppercase, password.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(requirements.has_lowercase, password.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(requirements.has_digit, password.chars().any(|c| c.is_ascii_digit()));
        prop_assert_eq!(requirements.has_special_char, password.chars().any(|c| "!@#$%^&*".contains(c)));
        prop_assert_eq!(requirements, PasswordRequirements::evaluate(&password));
    }

    #[test]
    fn checklist_mirrors_the_flags(password in "[A-Za-z0-9!@#$%^&*()_ ]{0,40}") {
        let requirements = PasswordRequirements::evaluate(&password);
        let all = requirements.checklist().all(|(_, met)| met);

        prop_assert_eq!(all, requirements.all_met());
        for (requirement, met) in requirements.checklist() {
            prop_assert_eq!(met, requirements.is_met(requirement));
        }
    }

    #[test]
    fn every_server_message_is_kept_exactly_once(messages in proptest::collection::vec("[a-zA-Z ]{0,30}", 0..12)) {
        let errors = FieldErrors::from_server_messages(messages.clone());
        let total: usize = errors.iter().map(|(_, bucket)| bucket.len()).sum();

        prop_assert_eq!(total, messages.len());
        prop_assert!(errors.get(ErrorKey::General).is_empty());
        for (key, bucket) in errors.iter() {
            for message in bucket {
                prop_assert_eq!(ErrorKey::classify(message), key);
            }
        }
    }
}

#[test]
fn labels_are_the_romanian_checklist() {
    assert_eq!(Requirement::MinLength.label(), "Cel puțin 8 caractere.");
    assert_eq!(Requirement::Digit.label(), "Cel puțin o cifră.");
    assert!(Requirement::SpecialChar.label().contains("!@#$%^&*"));
}
