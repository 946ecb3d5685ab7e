#[cfg(test)]
mod tests {
    use crate::tools::fetch::*;
    use crate::tools::identity::IdentityRotator;
    use std::time::Duration;

    #[test]
    fn block_hint_amazon_robot_check() {
        let html = r#"<html><body><h4>Enter the characters you see below</h4>
            <p>Sorry, we just need to make sure you're not a robot.</p></body></html>"#;
        assert_eq!(block_hint(html), Some("enter the characters you see below"));
    }

    #[test]
    fn block_hint_cloudflare_challenge() {
        let html = r#"<html><body>Checking your browser... cf-browser-verification</body></html>"#;
        assert_eq!(block_hint(html), Some("cf-browser-verification"));
    }

    #[test]
    fn block_hint_normal_page() {
        let html = r#"<html><body><div data-hook="review">Great kettle</div></body></html>"#;
        assert_eq!(block_hint(html), None);
    }

    #[test]
    fn fetch_result_helpers() {
        let ok = FetchResult::new(200, "<html></html>");
        assert!(ok.is_ok());
        assert_eq!(ok.text(), "<html></html>");

        let missing = FetchResult::status_only(404);
        assert!(!missing.is_ok());
        assert_eq!(missing.text(), "");

        // Redirect-ish success codes are not "200" for the paginator.
        assert!(!FetchResult::new(204, "").is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_failure() {
        let fetcher = HttpFetcher::new(IdentityRotator::seeded(1), DEFAULT_ACCEPT_LANGUAGE)
            .expect("client builds");
        let result = fetcher
            .fetch("http://127.0.0.1:1/reviews", Duration::from_secs(2))
            .await;
        assert!(matches!(
            result,
            Err(FetchError::Network(_)) | Err(FetchError::Timeout(_))
        ));
    }

    #[test]
    fn default_fetch_works_from_separate_runtimes() {
        for _ in 0..2 {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            let result = runtime.block_on(fetch(
                "http://127.0.0.1:1/reviews",
                Duration::from_secs(2),
            ));
            assert!(matches!(
                result,
                Err(FetchError::Network(_)) | Err(FetchError::Timeout(_))
            ));
        }
    }
}
