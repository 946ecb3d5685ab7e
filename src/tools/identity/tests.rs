#[cfg(test)]
mod tests {
    use crate::tools::identity::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = IdentityRotator::seeded(42);
        let b = IdentityRotator::seeded(42);
        let seq_a: Vec<String> = (0..10).map(|_| a.next()).collect();
        let seq_b: Vec<String> = (0..10).map(|_| b.next()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn picks_only_from_pool() {
        let pool = vec!["agent-a".to_string(), "agent-b".to_string()];
        let rotator = IdentityRotator::new(pool.clone(), Some(7));
        for _ in 0..50 {
            assert!(pool.contains(&rotator.next()));
        }
    }

    #[test]
    fn empty_pool_falls_back() {
        let rotator = IdentityRotator::new(vec![], Some(1));
        assert_eq!(rotator.next(), FALLBACK_USER_AGENT);
    }

    #[test]
    fn default_pool_is_browser_like() {
        let rotator = IdentityRotator::default();
        assert_eq!(rotator.pool().len(), DEFAULT_USER_AGENTS.len());
        assert!(rotator.next().starts_with("Mozilla/5.0"));
    }
}
