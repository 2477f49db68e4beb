//! Dashboard page. The page itself polls `/api/info`; the server only embeds
//! the refresh interval.

const TEMPLATE: &str = include_str!("../../assets/index.html");
const INTERVAL_PLACEHOLDER: &str = "{{REFRESH_INTERVAL}}";

pub fn render(refresh_interval_secs: u64) -> String {
    TEMPLATE.replace(INTERVAL_PLACEHOLDER, &refresh_interval_secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_embedded() {
        let html = render(45);
        assert!(html.contains("data-refresh-interval=\"45\""));
        assert!(!html.contains(INTERVAL_PLACEHOLDER));
    }
}
