#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vita_core::domain::{
        ConnectionStatus, EntityId, NewConnection, NewForumCategory, NewForumComment,
        NewForumPost, NewProfessional, NewProfessionalSpecialty, NewUser, User, UserPatch, Vote,
    };
    use vita_core::error::RepoError;
    use vita_core::geo::Coordinates;
    use vita_core::ports::{
        ConnectionRepository, ForumRepository, ProfessionalRepository, UserRepository,
    };
    use vita_core::search::{LocationFilter, ProfessionalQuery};

    use crate::store::InMemoryStore;

    async fn add_user(store: &InMemoryStore, username: &str, coords: Option<(f64, f64)>) -> User {
        store
            .create_user(NewUser {
                username: username.to_string(),
                name: username.to_string(),
                age: 30,
                latitude: coords.map(|c| c.0),
                longitude: coords.map(|c| c.1),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn connect(
        store: &InMemoryStore,
        from: EntityId,
        to: EntityId,
        status: ConnectionStatus,
    ) -> Result<vita_core::domain::Connection, RepoError> {
        store
            .create_connection(NewConnection {
                user_id: from,
                target_user_id: to,
                status,
            })
            .await
    }

    async fn forum_with_post(store: &InMemoryStore) -> (User, EntityId) {
        let author = add_user(store, "author", None).await;
        let category = store
            .create_forum_category(NewForumCategory {
                name: "Gravidanza".to_string(),
                description: "Discussioni".to_string(),
                icon: "baby-carriage".to_string(),
            })
            .await
            .unwrap();
        let post = store
            .create_post(NewForumPost {
                title: "Domanda".to_string(),
                content: "...".to_string(),
                user_id: author.id,
                category_id: category.id,
            })
            .await
            .unwrap();
        (author, post.id)
    }

    #[tokio::test]
    async fn test_user_ids_are_sequential() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = InMemoryStore::new();
        add_user(&store, "alessia32", None).await;

        let result = store
            .create_user(NewUser {
                username: "alessia32".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store = InMemoryStore::new();
        let created = add_user(&store, "marina_mom", None).await;

        let found = store.find_by_username("marina_mom").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repeated_reads_return_equal_snapshots() {
        let store = InMemoryStore::new();
        let created = add_user(&store, "giulia_45", Some((45.4668, 9.1905))).await;

        let first = store.find_user(created.id).await.unwrap();
        let second = store.find_user(created.id).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Some(created));
    }

    #[tokio::test]
    async fn test_update_user_patches_fields() {
        let store = InMemoryStore::new();
        let user = add_user(&store, "sofia_mom", None).await;

        let updated = store
            .update_user(
                user.id,
                UserPatch {
                    latitude: Some(45.47),
                    longitude: Some(9.193),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.coordinates(), Some(Coordinates::new(45.47, 9.193)));
        assert_eq!(updated.username, "sofia_mom");
        assert!(store.update_user(99, UserPatch::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_user_rejects_taken_username() {
        let store = InMemoryStore::new();
        add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;

        let result = store
            .update_user(
                b.id,
                UserPatch {
                    username: Some("a".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(RepoError::Conflict(_))));

        // Keeping one's own username is fine.
        let same = store
            .update_user(
                b.id,
                UserPatch {
                    username: Some("b".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(same.is_some());
    }

    #[tokio::test]
    async fn test_update_unknown_user_wins_over_taken_username() {
        let store = InMemoryStore::new();
        add_user(&store, "taken", None).await;

        let result = store
            .update_user(
                99,
                UserPatch {
                    username: Some("taken".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_mutual_likes_become_a_match() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;

        let first = connect(&store, a.id, b.id, ConnectionStatus::Liked).await.unwrap();
        assert_eq!(first.status, ConnectionStatus::Liked);

        let second = connect(&store, b.id, a.id, ConnectionStatus::Liked).await.unwrap();
        assert_eq!(second.status, ConnectionStatus::Matched);

        let forward = store.find_connection(a.id, b.id).await.unwrap().unwrap();
        let backward = store.find_connection(b.id, a.id).await.unwrap().unwrap();
        assert_eq!(forward.status, ConnectionStatus::Matched);
        assert_eq!(backward.status, ConnectionStatus::Matched);

        let a_matches = store.find_matches(a.id).await.unwrap();
        let b_matches = store.find_matches(b.id).await.unwrap();
        assert_eq!(a_matches, vec![b.clone()]);
        assert_eq!(b_matches, vec![a.clone()]);
    }

    #[tokio::test]
    async fn test_one_sided_like_stays_liked() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;

        connect(&store, a.id, b.id, ConnectionStatus::Liked).await.unwrap();

        let forward = store.find_connection(a.id, b.id).await.unwrap().unwrap();
        assert_eq!(forward.status, ConnectionStatus::Liked);
        assert!(store.find_connection(b.id, a.id).await.unwrap().is_none());
        assert!(store.find_matches(a.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejection_never_promotes() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;

        connect(&store, a.id, b.id, ConnectionStatus::Liked).await.unwrap();
        let reply = connect(&store, b.id, a.id, ConnectionStatus::Rejected).await.unwrap();

        assert_eq!(reply.status, ConnectionStatus::Rejected);
        let forward = store.find_connection(a.id, b.id).await.unwrap().unwrap();
        assert_eq!(forward.status, ConnectionStatus::Liked);
    }

    #[tokio::test]
    async fn test_duplicate_connection_conflicts() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;
        let b = add_user(&store, "b", None).await;

        connect(&store, a.id, b.id, ConnectionStatus::Rejected).await.unwrap();
        let again = connect(&store, a.id, b.id, ConnectionStatus::Liked).await;
        assert!(matches!(again, Err(RepoError::Conflict(_))));

        let stored = store.find_connection(a.id, b.id).await.unwrap().unwrap();
        assert_eq!(stored.status, ConnectionStatus::Rejected);
    }

    #[tokio::test]
    async fn test_connection_endpoints_are_checked() {
        let store = InMemoryStore::new();
        let a = add_user(&store, "a", None).await;

        let to_self = connect(&store, a.id, a.id, ConnectionStatus::Liked).await;
        assert!(matches!(to_self, Err(RepoError::Validation(_))));

        let to_ghost = connect(&store, a.id, 42, ConnectionStatus::Liked).await;
        assert!(matches!(to_ghost, Err(RepoError::NotFound { id: 42, .. })));
    }

    #[tokio::test]
    async fn test_concurrent_mutual_likes_always_match() {
        for _ in 0..20 {
            let store = Arc::new(InMemoryStore::new());
            let a = add_user(&store, "a", None).await.id;
            let b = add_user(&store, "b", None).await.id;

            let (s1, s2) = (store.clone(), store.clone());
            let h1 = tokio::spawn(async move { connect(&s1, a, b, ConnectionStatus::Liked).await });
            let h2 = tokio::spawn(async move { connect(&s2, b, a, ConnectionStatus::Liked).await });
            h1.await.unwrap().unwrap();
            h2.await.unwrap().unwrap();

            for (from, to) in [(a, b), (b, a)] {
                let edge = store.find_connection(from, to).await.unwrap().unwrap();
                assert_eq!(edge.status, ConnectionStatus::Matched);
            }
        }
    }

    #[tokio::test]
    async fn test_nearby_excludes_self_connected_and_far_users() {
        let store = InMemoryStore::new();
        let me = add_user(&store, "me", Some((45.4642, 9.1900))).await;
        let near = add_user(&store, "near", Some((45.4706, 9.1982))).await;
        let liked = add_user(&store, "liked", Some((45.4668, 9.1905))).await;
        let rejected = add_user(&store, "rejected", Some((45.4700, 9.1930))).await;
        add_user(&store, "nowhere", None).await;
        add_user(&store, "rome", Some((41.9028, 12.4964))).await;

        connect(&store, me.id, liked.id, ConnectionStatus::Liked).await.unwrap();
        connect(&store, me.id, rejected.id, ConnectionStatus::Rejected).await.unwrap();

        let found = store.find_nearby(me.id, 10.0).await.unwrap();
        assert_eq!(found, vec![near]);
    }

    #[tokio::test]
    async fn test_nearby_is_empty_without_coordinates_or_user() {
        let store = InMemoryStore::new();
        let me = add_user(&store, "me", None).await;
        add_user(&store, "other", Some((45.4706, 9.1982))).await;

        assert!(store.find_nearby(me.id, 1000.0).await.unwrap().is_empty());
        assert!(store.find_nearby(99, 1000.0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_post_starts_without_votes() {
        let store = InMemoryStore::new();
        let (_, post_id) = forum_with_post(&store).await;

        let post = store.find_post(post_id).await.unwrap().unwrap();
        assert_eq!((post.upvotes, post.downvotes), (0, 0));
    }

    #[tokio::test]
    async fn test_votes_accumulate_without_dedup() {
        let store = InMemoryStore::new();
        let (author, post_id) = forum_with_post(&store).await;

        for _ in 0..3 {
            store.vote(post_id, author.id, Vote::Up).await.unwrap();
        }
        let post = store.vote(post_id, author.id, Vote::Down).await.unwrap();

        assert_eq!(post.upvotes, 3);
        assert_eq!(post.downvotes, 1);
        assert_eq!(post.score(), 2);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_post_is_not_found() {
        let store = InMemoryStore::new();
        let result = store.vote(7, 1, Vote::Up).await;
        assert!(matches!(result, Err(RepoError::NotFound { id: 7, .. })));
    }

    #[tokio::test]
    async fn test_concurrent_votes_are_not_lost() {
        let store = Arc::new(InMemoryStore::new());
        let (author, post_id) = forum_with_post(&store).await;
        let voter = author.id;

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.vote(post_id, voter, Vote::from(i % 5 != 0)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let post = store.find_post(post_id).await.unwrap().unwrap();
        assert_eq!(post.upvotes, 40);
        assert_eq!(post.downvotes, 10);
    }

    #[tokio::test]
    async fn test_popularity_and_recency_ordering() {
        let store = InMemoryStore::new();
        let (author, first) = forum_with_post(&store).await;
        let second = store
            .create_post(NewForumPost {
                title: "Seconda".to_string(),
                content: "...".to_string(),
                user_id: author.id,
                category_id: 1,
            })
            .await
            .unwrap()
            .id;

        for _ in 0..2 {
            store.vote(first, author.id, Vote::Up).await.unwrap();
        }
        for _ in 0..5 {
            store.vote(second, author.id, Vote::Up).await.unwrap();
        }

        let popular: Vec<_> = store
            .list_posts_by_popularity()
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.id, p.score()))
            .collect();
        assert_eq!(popular, vec![(second, 5), (first, 2)]);

        let recent: Vec<_> = store
            .list_posts(Some(1))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(recent, vec![second, first]);
        assert!(store.list_posts(Some(2)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_post_and_comment_references_are_checked() {
        let store = InMemoryStore::new();
        let (author, post_id) = forum_with_post(&store).await;

        let orphan = store
            .create_post(NewForumPost {
                title: "x".to_string(),
                content: "x".to_string(),
                user_id: author.id,
                category_id: 9,
            })
            .await;
        assert!(matches!(orphan, Err(RepoError::NotFound { id: 9, .. })));

        let comment = store
            .create_comment(NewForumComment {
                content: "Anche io!".to_string(),
                user_id: author.id,
                post_id,
            })
            .await
            .unwrap();
        assert_eq!(comment.upvotes, 0);
        assert_eq!(store.list_comments(post_id).await.unwrap(), vec![comment]);

        let dangling = store
            .create_comment(NewForumComment {
                content: "?".to_string(),
                user_id: author.id,
                post_id: 99,
            })
            .await;
        assert!(matches!(dangling, Err(RepoError::NotFound { id: 99, .. })));
    }

    #[tokio::test]
    async fn test_professional_search_by_location() {
        let store = InMemoryStore::new();
        let specialty = store
            .create_specialty(NewProfessionalSpecialty {
                name: "Ostetrica".to_string(),
            })
            .await
            .unwrap();

        for (name, coords) in [
            ("far", Some((45.4706, 9.1982))),
            ("close", Some((45.4642, 9.1900))),
            ("unknown", None),
        ] {
            let created = store
                .create_professional(NewProfessional {
                    name: name.to_string(),
                    specialty_id: specialty.id,
                    latitude: coords.map(|c| c.0),
                    longitude: coords.map(|c| c.1),
                    ..Default::default()
                })
                .await
                .unwrap();
            assert_eq!(created.rating, 0.0);
            assert_eq!(created.rating_count, 0);
        }

        let query = ProfessionalQuery {
            specialty_id: Some(specialty.id),
            location: Some(LocationFilter {
                center: Coordinates::new(45.4642, 9.1900),
                radius_km: 5.0,
            }),
        };
        let names: Vec<_> = store
            .search_professionals(query)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["close", "far"]);

        let everyone = store
            .search_professionals(ProfessionalQuery::default())
            .await
            .unwrap();
        assert_eq!(everyone.len(), 3);
    }

    #[tokio::test]
    async fn test_professional_requires_known_specialty() {
        let store = InMemoryStore::new();
        let result = store
            .create_professional(NewProfessional {
                name: "x".to_string(),
                specialty_id: 3,
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(RepoError::NotFound { id: 3, .. })));
    }

    #[cfg(feature = "seed")]
    #[tokio::test]
    async fn test_seed_data_set() {
        use vita_core::ports::{ClinicalRepository, CourseRepository};

        let store = InMemoryStore::seeded().await.unwrap();

        assert_eq!(store.list_clinical_categories().await.unwrap().len(), 4);
        assert_eq!(store.list_conditions(None).await.unwrap().len(), 7);
        assert_eq!(store.list_conditions(Some(2)).await.unwrap().len(), 2);
        assert_eq!(store.list_forum_categories().await.unwrap().len(), 3);
        assert_eq!(store.list_course_categories().await.unwrap().len(), 5);
        assert_eq!(store.list_courses(None).await.unwrap().len(), 4);
        assert_eq!(store.list_featured().await.unwrap().len(), 1);
        assert_eq!(store.list_specialties().await.unwrap().len(), 5);

        let matches: Vec<_> = store
            .find_matches(1)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(matches, vec!["marina_mom", "amara_wellness"]);
        assert_eq!(store.find_matches(2).await.unwrap().len(), 1);

        // Matched users are hidden from the nearby feed.
        let nearby: Vec<_> = store
            .find_nearby(1, 10.0)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(nearby, vec!["giulia_45", "sofia_mom"]);

        let popular: Vec<_> = store
            .list_posts_by_popularity()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.upvotes)
            .collect();
        assert_eq!(popular, vec![214, 128, 86]);
    }
}
