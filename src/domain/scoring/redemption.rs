//! Outcome of a keyword redemption

use crate::domain::user::User;

/// Points awarded for each distinct keyword when nothing else is configured
pub const DEFAULT_KEYWORD_POINTS: u64 = 100;

/// Result of redeeming a keyword against a user record
#[derive(Debug, Clone)]
pub struct Redemption {
    /// The user after the redemption, `None` if the user no longer exists
    pub user: Option<User>,
    /// The keyword had been redeemed before; no points were awarded
    pub already_used: bool,
}

impl Redemption {
    pub fn missing_user() -> Self {
        Self {
            user: None,
            already_used: false,
        }
    }

    pub fn awarded(user: User) -> Self {
        Self {
            user: Some(user),
            already_used: false,
        }
    }

    pub fn already_used(user: User) -> Self {
        Self {
            user: Some(user),
            already_used: true,
        }
    }

    /// Apply the redemption rules to a user record in place
    pub fn apply(user: &mut User, keyword: &super::Keyword, points: u64) -> Self {
        if user.redeem(keyword, points) {
            Self::awarded(user.clone())
        } else {
            Self::already_used(user.clone())
        }
    }

    /// Whether points were added by this redemption
    pub fn is_awarded(&self) -> bool {
        self.user.is_some() && !self.already_used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Keyword;
    use crate::domain::user::UserId;

    #[test]
    fn test_apply_twice() {
        let mut user = User::new(UserId::new(1), "bob", "hash");
        let keyword = Keyword::new("treasure").unwrap();

        let first = Redemption::apply(&mut user, &keyword, 100);
        assert!(first.is_awarded());
        assert_eq!(first.user.as_ref().unwrap().score(), 100);

        let second = Redemption::apply(&mut user, &keyword, 100);
        assert!(second.already_used);
        assert!(!second.is_awarded());
        assert_eq!(second.user.unwrap().score(), 100);
    }

    #[test]
    fn test_missing_user() {
        let redemption = Redemption::missing_user();
        assert!(redemption.user.is_none());
        assert!(!redemption.already_used);
        assert!(!redemption.is_awarded());
    }
}
