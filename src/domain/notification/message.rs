//! Notification composition.
//!
//! Messages are plain text. Delivery mechanics live behind the
//! `MailTransport` port; this module only decides who receives what.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::developer::Developer;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::Session;

const SIGNATURE: &str = "Cheers,\nThe Pair Connect team";

/// Lifecycle transition that produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Invitation,
    Interest,
    Confirmation,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Invitation => "invitation",
            NotificationKind::Interest => "interest",
            NotificationKind::Confirmation => "confirmation",
        };
        f.write_str(s)
    }
}

/// A composed message ready for a mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub session_id: SessionId,
    pub recipient_id: UserId,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// Host invites `developer` to `session`. Sent to the developer.
    pub fn invitation(session: &Session, host: &Developer, developer: &Developer) -> Self {
        let host_name = host.display_name();
        let body = format!(
            "Hi {developer}!\n\n\
             {host_name} has invited you to join the session '{description}' \
             scheduled for {schedule}. We are going to code and learn together!\n\n\
             You can find everything about the session here: {link}.\n\n\
             See you there!\n\n{SIGNATURE}",
            developer = developer.display_name(),
            description = session.description(),
            schedule = session.schedule_date_time(),
            link = link_or_placeholder(session),
        );
        Self {
            kind: NotificationKind::Invitation,
            session_id: *session.id(),
            recipient_id: developer.id.clone(),
            recipient_email: developer.email.clone(),
            subject: format!("{host_name} invites you to a pair programming session!"),
            body,
        }
    }

    /// `interested` recorded interest in `session`. Sent to the host.
    pub fn interest(session: &Session, host: &Developer, interested: &Developer) -> Self {
        let body = format!(
            "Hi {host}!\n\n\
             {interested} ({username}) is interested in your session '{description}' \
             scheduled for {schedule}.\n\n\
             You can confirm them as a participant from the session page.\n\n{SIGNATURE}",
            host = host.display_name(),
            interested = interested.display_name(),
            username = interested.username,
            description = session.description(),
            schedule = session.schedule_date_time(),
        );
        Self {
            kind: NotificationKind::Interest,
            session_id: *session.id(),
            recipient_id: host.id.clone(),
            recipient_email: host.email.clone(),
            subject: format!("{} is interested in your session", interested.display_name()),
            body,
        }
    }

    /// `developer` was confirmed into `session`. Sent to the developer.
    pub fn confirmation(session: &Session, host: &Developer, developer: &Developer) -> Self {
        let host_name = host.display_name();
        let body = format!(
            "Hi {developer}!\n\n\
             {host_name} has confirmed your spot in the session '{description}' \
             scheduled for {schedule} ({duration} minutes).\n\n\
             Join here: {link}.\n\n{SIGNATURE}",
            developer = developer.display_name(),
            description = session.description(),
            schedule = session.schedule_date_time(),
            duration = session.duration_minutes(),
            link = link_or_placeholder(session),
        );
        Self {
            kind: NotificationKind::Confirmation,
            session_id: *session.id(),
            recipient_id: developer.id.clone(),
            recipient_email: developer.email.clone(),
            subject: "You have been confirmed for a pair programming session".to_string(),
            body,
        }
    }
}

fn link_or_placeholder(session: &Session) -> &str {
    session.session_link().unwrap_or("(link to be announced)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{LanguageSet, Level, Stack};
    use crate::domain::foundation::{LevelId, ProjectId, Timestamp};
    use crate::domain::project::{NewProject, Project};
    use crate::domain::session::{NewSession, ParticipantLimit};

    fn person(id: &str, name: &str) -> Developer {
        Developer {
            id: UserId::new(id).unwrap(),
            username: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            stack: Some(Stack::Backend),
            level: None,
            languages: LanguageSet::new(),
        }
    }

    fn session(host: &Developer, link: Option<&str>) -> Session {
        let project = Project::new(
            ProjectId::new(),
            host.id.clone(),
            NewProject {
                name: "Project".to_string(),
                description: None,
                image_url: None,
                stack: Stack::Backend,
                languages: vec![crate::domain::catalog::ProgLanguage::new(
                    crate::domain::foundation::LanguageId::new(),
                    "Go",
                )]
                .into(),
                level: Level::new(LevelId::new(), "Mid"),
                active: true,
            },
        )
        .unwrap();
        Session::create(
            SessionId::new(),
            &project,
            &host.id,
            NewSession {
                description: "Ship the API".to_string(),
                schedule_date_time: Timestamp::now(),
                duration_minutes: 90,
                session_link: link.map(str::to_string),
                participant_limit: ParticipantLimit::UNLIMITED,
                active: true,
                public: true,
                stack: Stack::Backend,
                languages: LanguageSet::new(),
            },
        )
        .unwrap()
    }

    #[test]
    fn invitation_goes_to_developer_with_session_details() {
        let host = person("host", "Ada");
        let dev = person("dev", "Linus");
        let s = session(&host, Some("https://meet.example.com/xyz"));

        let n = Notification::invitation(&s, &host, &dev);
        assert_eq!(n.kind, NotificationKind::Invitation);
        assert_eq!(n.recipient_email, "dev@example.com");
        assert!(n.subject.contains("Ada"));
        assert!(n.body.contains("Hi Linus!"));
        assert!(n.body.contains("Ship the API"));
        assert!(n.body.contains("https://meet.example.com/xyz"));
        assert!(n.body.contains(&s.schedule_date_time().to_string()));
        assert!(n.body.ends_with("The Pair Connect team"));
    }

    #[test]
    fn interest_goes_to_host() {
        let host = person("host", "Ada");
        let dev = person("dev", "");
        let s = session(&host, None);

        let n = Notification::interest(&s, &host, &dev);
        assert_eq!(n.recipient_id, host.id);
        assert!(n.subject.starts_with("dev is interested"));
    }

    #[test]
    fn confirmation_without_link_uses_placeholder() {
        let host = person("host", "Ada");
        let dev = person("dev", "Linus");
        let s = session(&host, None);

        let n = Notification::confirmation(&s, &host, &dev);
        assert_eq!(n.recipient_id, dev.id);
        assert!(n.body.contains("(link to be announced)"));
        assert!(n.body.contains("90 minutes"));
    }
}
