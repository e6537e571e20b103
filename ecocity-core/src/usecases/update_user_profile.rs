use super::prelude::*;

/// Partial profile update. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

pub fn update_user_profile<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    update: UserProfileUpdate,
) -> Result<User> {
    let mut user = repo.get_user_by_email(email)?;
    let UserProfileUpdate {
        name,
        bio,
        photo_url,
    } = update;
    // A blank name would render the profile anonymous, so it is ignored.
    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        user.name = name.trim().to_string();
    }
    if let Some(bio) = bio {
        user.bio = bio.trim().to_string();
    }
    if let Some(photo_url) = photo_url {
        let photo_url = photo_url.trim();
        user.photo_url = if photo_url.is_empty() {
            None
        } else {
            Some(photo_url.to_string())
        };
    }
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn user() -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked("maria@example.org".to_string()),
            email_confirmed: true,
            password: "secret".parse::<Password>().unwrap(),
            role: Role::User,
            name: "Maria".to_string(),
            bio: "Old bio".to_string(),
            photo_url: Some("https://example.org/old.jpg".to_string()),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn update_bio_and_photo() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user());
        let email = "maria@example.org".parse().unwrap();
        let updated = update_user_profile(
            &db,
            &email,
            UserProfileUpdate {
                name: None,
                bio: Some("Recicladora desde 2020".into()),
                photo_url: Some(String::new()),
            },
        )
        .unwrap();
        assert_eq!("Maria", updated.name);
        assert_eq!("Recicladora desde 2020", updated.bio);
        assert!(updated.photo_url.is_none());
        assert_eq!("Recicladora desde 2020", db.users.borrow()[0].bio);
    }

    #[test]
    fn blank_name_keeps_current_name() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user());
        let email = "maria@example.org".parse().unwrap();
        let updated = update_user_profile(
            &db,
            &email,
            UserProfileUpdate {
                name: Some("   ".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("Maria", updated.name);
    }

    #[test]
    fn clearing_bio_is_allowed() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user());
        let email = "maria@example.org".parse().unwrap();
        let updated = update_user_profile(
            &db,
            &email,
            UserProfileUpdate {
                bio: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(updated.bio.is_empty());
        assert!(!updated.profile_complete());
    }
}
