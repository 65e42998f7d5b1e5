//! Suggestion algorithms.
//!
//! Both directions are pure filters over a candidate pool. The pool usually
//! comes pre-narrowed by stack from storage, but the full criteria are
//! applied here regardless so the result never depends on the adapter.

use std::collections::HashSet;

use crate::domain::developer::Developer;
use crate::domain::session::Session;

use super::MatchCriteria;

/// Developers matching `session` on stack, languages (any shared) and level.
///
/// Deduplicated by id; order of first appearance in `pool` is kept.
pub fn suggest_developers_for(
    session: &Session,
    pool: impl IntoIterator<Item = Developer>,
) -> Vec<Developer> {
    let criteria = MatchCriteria::for_session(session);
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|dev| criteria.accepts(dev.stack, dev.level.as_ref(), &dev.languages))
        .filter(|dev| seen.insert(dev.id.clone()))
        .collect()
}

/// Sessions matching `developer` on stack, languages (any shared) and level.
///
/// Deduplicated by id; order of first appearance in `pool` is kept.
pub fn suggest_sessions_for(
    developer: &Developer,
    pool: impl IntoIterator<Item = Session>,
) -> Vec<Session> {
    let criteria = MatchCriteria::for_developer(developer);
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|s| criteria.accepts(Some(s.stack()), s.level(), s.languages()))
        .filter(|s| seen.insert(*s.id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{LanguageSet, Level, ProgLanguage, Stack};
    use crate::domain::foundation::{
        LanguageId, LevelId, ProjectId, SessionId, Timestamp, UserId,
    };
    use crate::domain::project::{NewProject, Project};
    use crate::domain::session::{NewSession, ParticipantLimit};
    use proptest::prelude::*;

    struct Catalog {
        js: ProgLanguage,
        ts: ProgLanguage,
        python: ProgLanguage,
        mid: Level,
        senior: Level,
    }

    fn catalog() -> Catalog {
        Catalog {
            js: ProgLanguage::new(LanguageId::new(), "JavaScript"),
            ts: ProgLanguage::new(LanguageId::new(), "TypeScript"),
            python: ProgLanguage::new(LanguageId::new(), "Python"),
            mid: Level::new(LevelId::new(), "Mid"),
            senior: Level::new(LevelId::new(), "Senior"),
        }
    }

    fn developer(
        id: &str,
        stack: Option<Stack>,
        level: Option<Level>,
        languages: Vec<ProgLanguage>,
    ) -> Developer {
        Developer {
            id: UserId::new(id).unwrap(),
            username: id.to_string(),
            name: String::new(),
            email: format!("{id}@example.com"),
            stack,
            level,
            languages: languages.into(),
        }
    }

    fn session(stack: Stack, level: Level, project_languages: LanguageSet, languages: LanguageSet) -> Session {
        let owner = UserId::new("host").unwrap();
        let project = Project::new(
            ProjectId::new(),
            owner.clone(),
            NewProject {
                name: "Project".to_string(),
                description: None,
                image_url: None,
                stack,
                languages: project_languages,
                level,
                active: true,
            },
        )
        .unwrap();
        Session::create(
            SessionId::new(),
            &project,
            &owner,
            NewSession {
                description: "Pairing".to_string(),
                schedule_date_time: Timestamp::now(),
                duration_minutes: 120,
                session_link: None,
                participant_limit: ParticipantLimit::UNLIMITED,
                active: true,
                public: true,
                stack,
                languages,
            },
        )
        .unwrap()
    }

    #[test]
    fn developer_suggestions_require_all_three_filters() {
        let c = catalog();
        let s = session(
            Stack::Frontend,
            c.mid.clone(),
            vec![c.js.clone(), c.ts.clone()].into(),
            vec![c.js.clone()].into(),
        );

        let pool = vec![
            developer("match", Some(Stack::Frontend), Some(c.mid.clone()), vec![c.js.clone(), c.python.clone()]),
            developer("no-overlap", Some(Stack::Frontend), Some(c.mid.clone()), vec![c.python.clone()]),
            developer("wrong-level", Some(Stack::Frontend), Some(c.senior.clone()), vec![c.js.clone()]),
            developer("wrong-stack", Some(Stack::Backend), Some(c.mid.clone()), vec![c.js.clone()]),
            developer("no-stack", None, Some(c.mid.clone()), vec![c.js.clone()]),
        ];

        let ids: Vec<_> = suggest_developers_for(&s, pool)
            .into_iter()
            .map(|d| d.id.to_string())
            .collect();
        assert_eq!(ids, vec!["match".to_string()]);
    }

    #[test]
    fn session_without_languages_skips_language_filter() {
        let c = catalog();
        let s = session(
            Stack::Backend,
            c.senior.clone(),
            vec![c.python.clone()].into(),
            LanguageSet::new(),
        );
        let pool = vec![developer("a", Some(Stack::Backend), Some(c.senior.clone()), vec![])];
        assert_eq!(suggest_developers_for(&s, pool).len(), 1);
    }

    #[test]
    fn developer_suggestions_are_deduplicated() {
        let c = catalog();
        let s = session(
            Stack::Backend,
            c.senior.clone(),
            vec![c.python.clone()].into(),
            vec![c.python.clone()].into(),
        );
        let dev = developer("dup", Some(Stack::Backend), Some(c.senior.clone()), vec![c.python.clone()]);
        let result = suggest_developers_for(&s, vec![dev.clone(), dev]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn session_suggestions_are_symmetric() {
        let c = catalog();
        let frontend = session(
            Stack::Frontend,
            c.mid.clone(),
            vec![c.js.clone()].into(),
            vec![c.js.clone()].into(),
        );
        let backend = session(
            Stack::Backend,
            c.mid.clone(),
            vec![c.js.clone()].into(),
            vec![c.js.clone()].into(),
        );
        let senior_only = session(
            Stack::Frontend,
            c.senior.clone(),
            vec![c.js.clone()].into(),
            vec![c.js.clone()].into(),
        );
        let expected = *frontend.id();

        let dev = developer("dev", Some(Stack::Frontend), Some(c.mid.clone()), vec![c.js.clone()]);
        let result = suggest_sessions_for(&dev, vec![frontend, backend, senior_only]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), &expected);
    }

    #[test]
    fn developer_without_level_or_languages_matches_on_stack_only() {
        let c = catalog();
        let s = session(
            Stack::Backend,
            c.senior.clone(),
            vec![c.python.clone()].into(),
            vec![c.python.clone()].into(),
        );
        let dev = developer("fresh", Some(Stack::Backend), None, vec![]);
        assert_eq!(suggest_sessions_for(&dev, vec![s]).len(), 1);
    }

    #[test]
    fn developer_without_stack_gets_no_sessions() {
        let c = catalog();
        let s = session(
            Stack::Backend,
            c.senior.clone(),
            vec![c.python.clone()].into(),
            LanguageSet::new(),
        );
        let dev = developer("fresh", None, None, vec![]);
        assert!(suggest_sessions_for(&dev, vec![s]).is_empty());
    }

    proptest! {
        #[test]
        fn every_suggested_developer_satisfies_the_filters(
            picks in proptest::collection::vec((0usize..3, 0usize..2, 0u8..8), 0..20)
        ) {
            let c = catalog();
            let stacks = [Stack::Fullstack, Stack::Backend, Stack::Frontend];
            let levels = [c.mid.clone(), c.senior.clone()];
            let langs = [c.js.clone(), c.python.clone(), c.ts.clone()];

            let s = session(
                Stack::Backend,
                c.mid.clone(),
                vec![c.js.clone(), c.python.clone()].into(),
                vec![c.js.clone()].into(),
            );

            let pool: Vec<Developer> = picks
                .iter()
                .enumerate()
                .map(|(i, (stack, level, mask))| {
                    let languages = langs
                        .iter()
                        .enumerate()
                        .filter(|(bit, _)| mask & (1 << bit) != 0)
                        .map(|(_, l)| l.clone())
                        .collect();
                    developer(&format!("dev-{i}"), Some(stacks[*stack]), Some(levels[*level].clone()), languages)
                })
                .collect();

            for dev in suggest_developers_for(&s, pool.clone()) {
                prop_assert_eq!(dev.stack, Some(Stack::Backend));
                prop_assert_eq!(dev.level.as_ref().map(|l| l.id), Some(c.mid.id));
                prop_assert!(dev.languages.contains(&c.js.id));
            }

            let expected = pool
                .iter()
                .filter(|d| d.stack == Some(Stack::Backend)
                    && d.level.as_ref().map(|l| l.id) == Some(c.mid.id)
                    && d.languages.contains(&c.js.id))
                .count();
            prop_assert_eq!(suggest_developers_for(&s, pool).len(), expected);
        }
    }
}
