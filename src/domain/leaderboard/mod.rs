//! Leaderboard domain
//!
//! Pure ranking of user records into public standings.

use std::cmp::Ordering;

use crate::domain::user::{PublicUser, User};

/// Order public users by score descending, then username ascending.
///
/// Usernames compare byte-wise; the user ID settles any remaining tie so the
/// order is total.
pub fn compare_standings(a: &PublicUser, b: &PublicUser) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.username.cmp(&b.username))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank users into public standings
pub fn rank_users<'a, I>(users: I) -> Vec<PublicUser>
where
    I: IntoIterator<Item = &'a User>,
{
    let mut standings: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();
    standings.sort_by(compare_standings);
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Keyword;
    use crate::domain::user::UserId;

    fn user_with_score(id: u64, username: &str, redemptions: &[&str]) -> User {
        let mut user = User::new(UserId::new(id), username, "hash");
        for keyword in redemptions {
            user.redeem(&Keyword::new(keyword).unwrap(), 100);
        }
        user
    }

    #[test]
    fn test_rank_by_score_then_username() {
        let users = vec![
            user_with_score(1, "A", &["anchor"]),
            user_with_score(2, "B", &["anchor", "treasure"]),
            user_with_score(3, "C", &["compass"]),
        ];

        let standings = rank_users(&users);
        let names: Vec<&str> = standings.iter().map(|u| u.username.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(standings[0].score, 200);
    }

    #[test]
    fn test_tie_break_is_case_sensitive() {
        let users = vec![
            user_with_score(1, "bob", &[]),
            user_with_score(2, "Zed", &[]),
            user_with_score(3, "alice", &[]),
        ];

        let standings = rank_users(&users);
        let names: Vec<&str> = standings.iter().map(|u| u.username.as_str()).collect();

        // Uppercase sorts before lowercase byte-wise
        assert_eq!(names, vec!["Zed", "alice", "bob"]);
    }

    #[test]
    fn test_empty_leaderboard() {
        let users: Vec<User> = Vec::new();
        assert!(rank_users(&users).is_empty());
    }
}
