//! Paths of the endpoints the dashboard consumes.

use std::fmt;

/// One GET endpoint of the `/api/v1` surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `[{user_id, name}]`
    Users,
    /// `[{user_id, name, avatar}]`
    UsersData,
    MeanTimeWeekday(u32),
    PresenceWeekday(u32),
    PresenceStartEnd(u32),
    PresenceDays(u32),
}

impl Endpoint {
    pub const PREFIX: &'static str = "/api/v1";

    pub fn path(&self) -> String {
        match self {
            Endpoint::Users => format!("{}/users", Self::PREFIX),
            Endpoint::UsersData => format!("{}/users_data", Self::PREFIX),
            Endpoint::MeanTimeWeekday(id) => format!("{}/mean_time_weekday/{id}", Self::PREFIX),
            Endpoint::PresenceWeekday(id) => format!("{}/presence_weekday/{id}", Self::PREFIX),
            Endpoint::PresenceStartEnd(id) => format!("{}/presence_start_end/{id}", Self::PREFIX),
            Endpoint::PresenceDays(id) => format!("{}/presence_days/{id}", Self::PREFIX),
        }
    }

    /// User the endpoint is scoped to, if any.
    pub fn user_id(&self) -> Option<u32> {
        match self {
            Endpoint::Users | Endpoint::UsersData => None,
            Endpoint::MeanTimeWeekday(id)
            | Endpoint::PresenceWeekday(id)
            | Endpoint::PresenceStartEnd(id)
            | Endpoint::PresenceDays(id) => Some(*id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_scoped_paths_carry_the_id() {
        assert_eq!(
            Endpoint::MeanTimeWeekday(3).path(),
            "/api/v1/mean_time_weekday/3"
        );
        assert_eq!(Endpoint::PresenceDays(7).path(), "/api/v1/presence_days/7");
        assert_eq!(Endpoint::PresenceDays(7).user_id(), Some(7));
    }

    #[test]
    fn directory_paths() {
        assert_eq!(Endpoint::Users.to_string(), "/api/v1/users");
        assert_eq!(Endpoint::UsersData.path(), "/api/v1/users_data");
        assert_eq!(Endpoint::UsersData.user_id(), None);
    }
}
