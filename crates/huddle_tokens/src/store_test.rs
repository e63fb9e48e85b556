#[cfg(test)]
mod tests {
    use crate::store::TokenStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_then_get_returns_token() {
        let store = TokenStore::new();
        store.set("alice", "tok-A");
        assert_eq!(store.get("alice"), Some("tok-A".to_string()));
    }

    #[test]
    fn test_get_unknown_user_is_none() {
        let store = TokenStore::new();
        assert_eq!(store.get("nobody"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = TokenStore::new();
        store.set("alice", "old");
        store.set("alice", "new");
        assert_eq!(store.get("alice"), Some("new".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_token_is_stored_as_is() {
        let store = TokenStore::new();
        store.set("alice", "");
        assert_eq!(store.get("alice"), Some(String::new()));
    }

    #[test]
    fn test_distinct_users_do_not_interfere() {
        let store = TokenStore::new();
        store.set("u1", "t1");
        store.set("u2", "t2");
        store.set("u1", "t1-rotated");
        assert_eq!(store.get("u2"), Some("t2".to_string()));
        assert_eq!(store.get("u1"), Some("t1-rotated".to_string()));
    }

    #[test]
    fn test_alice_bob_carol() {
        let store = TokenStore::new();
        store.set("alice", "tok-A");
        store.set("bob", "tok-B");
        assert_eq!(store.get("alice"), Some("tok-A".to_string()));
        assert_eq!(store.get("carol"), None);
    }

    #[test]
    fn test_concurrent_writers_same_key_leave_one_written_value() {
        let store = TokenStore::new();
        let written: Vec<String> = (0..16)
            .map(|i| format!("token-{i}-{}", "x".repeat(i * 64)))
            .collect();

        thread::scope(|s| {
            for token in &written {
                let store = &store;
                s.spawn(move || {
                    for _ in 0..100 {
                        store.set("shared", token.clone());
                    }
                });
            }
        });

        let last = store.get("shared").unwrap();
        assert!(written.contains(&last));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_readers_never_observe_torn_values() {
        let store = TokenStore::new();
        let old = "a".repeat(4096);
        let new = "b".repeat(4096);
        store.set("alice", old.clone());

        thread::scope(|s| {
            s.spawn(|| {
                for i in 0..500 {
                    let value = if i % 2 == 0 { new.clone() } else { old.clone() };
                    store.set("alice", value);
                }
            });
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..500 {
                        let seen = store.get("alice").unwrap();
                        assert!(seen == old || seen == new, "torn read of {} bytes", seen.len());
                    }
                });
            }
        });
    }

    #[test]
    fn test_concurrent_writers_distinct_keys() {
        let store = TokenStore::new();
        thread::scope(|s| {
            for i in 0..8 {
                let store = &store;
                s.spawn(move || store.set(format!("user-{i}"), format!("tok-{i}")));
            }
        });
        assert_eq!(store.len(), 8);
        for i in 0..8 {
            assert_eq!(store.get(&format!("user-{i}")), Some(format!("tok-{i}")));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shared_store_across_tasks() {
        let store = Arc::new(TokenStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.set(format!("user-{}", i % 4), format!("tok-{i}"));
                    store.get(&format!("user-{}", i % 4))
                })
            })
            .collect();

        for handle in handles {
            let seen = handle.await.unwrap();
            assert!(seen.is_some_and(|t| t.starts_with("tok-")));
        }
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_isolated_instances() {
        let a = TokenStore::new();
        let b = TokenStore::new();
        a.set("alice", "tok-A");
        assert_eq!(b.get("alice"), None);
    }
}
