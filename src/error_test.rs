use super::*;

#[test]
fn config_error_wraps_serde_message() {
    let err = serde_json::from_str::<serde_json::Value>("{").map_err(PortfolioError::from);
    let Err(err) = err else {
        panic!("expected parse failure");
    };
    assert!(matches!(err, PortfolioError::Config(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn window_errors_have_stable_messages() {
    assert_eq!(PortfolioError::NoWindow.to_string(), "no window available");
    assert_eq!(PortfolioError::NoDocument.to_string(), "no document available");
    assert_eq!(PortfolioError::Js("boom".into()).to_string(), "js call failed: boom");
}
