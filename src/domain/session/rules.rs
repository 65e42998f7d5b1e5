//! Session scoping rules: a session's stack, languages and level derive
//! from the project it belongs to.

use crate::domain::catalog::{LanguageSet, Stack};

use super::errors::ALLOWED_STACKS_REASON;
use super::SessionError;

/// Parse a raw stack name supplied for a session.
///
/// # Errors
///
/// - `InvalidStack` listing the allowed stacks when the name is unknown
pub fn parse_session_stack(raw: &str) -> Result<Stack, SessionError> {
    raw.parse::<Stack>()
        .map_err(|_| SessionError::invalid_stack(ALLOWED_STACKS_REASON))
}

/// Check a session stack against its project's stack.
///
/// # Errors
///
/// - `InvalidStack` naming the project stack when they are incompatible
pub fn validate_stack_assignment(
    project_stack: Stack,
    session_stack: Stack,
) -> Result<(), SessionError> {
    if project_stack.permits(session_stack) {
        Ok(())
    } else {
        Err(SessionError::invalid_stack(format!(
            "Invalid stack. For this project, the session must use stack {}.",
            project_stack
        )))
    }
}

/// Every session language must be one of the project's languages.
///
/// # Errors
///
/// - `InvalidLanguages` naming the first language outside the project
pub fn validate_languages(
    project_languages: &LanguageSet,
    session_languages: &LanguageSet,
) -> Result<(), SessionError> {
    match session_languages.missing_from(project_languages) {
        Some(language) => Err(SessionError::invalid_languages(format!(
            "Language {} is not part of the project.",
            language.name
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ProgLanguage;
    use crate::domain::foundation::LanguageId;
    use proptest::prelude::*;

    fn any_stack() -> impl Strategy<Value = Stack> {
        prop_oneof![
            Just(Stack::Fullstack),
            Just(Stack::Backend),
            Just(Stack::Frontend)
        ]
    }

    #[test]
    fn mismatch_names_project_stack() {
        let err = validate_stack_assignment(Stack::Backend, Stack::Frontend).unwrap_err();
        assert_eq!(
            err,
            SessionError::invalid_stack(
                "Invalid stack. For this project, the session must use stack Backend."
            )
        );
    }

    #[test]
    fn unknown_stack_name_lists_allowed_values() {
        let err = parse_session_stack("DevOps").unwrap_err();
        assert_eq!(err, SessionError::invalid_stack(ALLOWED_STACKS_REASON));
        assert_eq!(parse_session_stack("backend").unwrap(), Stack::Backend);
    }

    #[test]
    fn language_outside_project_is_rejected() {
        let python = ProgLanguage::new(LanguageId::new(), "Python");
        let rust = ProgLanguage::new(LanguageId::new(), "Rust");
        let project: LanguageSet = vec![python.clone()].into();
        let session: LanguageSet = vec![python, rust].into();

        let err = validate_languages(&project, &session).unwrap_err();
        assert_eq!(
            err,
            SessionError::invalid_languages("Language Rust is not part of the project.")
        );
    }

    #[test]
    fn empty_session_languages_are_a_subset() {
        let project: LanguageSet = vec![ProgLanguage::new(LanguageId::new(), "Go")].into();
        assert!(validate_languages(&project, &LanguageSet::new()).is_ok());
    }

    proptest! {
        #[test]
        fn non_fullstack_project_rejects_other_stacks(
            project in any_stack(),
            session in any_stack(),
        ) {
            prop_assume!(project != Stack::Fullstack);
            let result = validate_stack_assignment(project, session);
            prop_assert_eq!(result.is_ok(), project == session);
        }

        #[test]
        fn fullstack_project_accepts_every_stack(session in any_stack()) {
            prop_assert!(validate_stack_assignment(Stack::Fullstack, session).is_ok());
        }
    }
}
