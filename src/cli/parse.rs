use rota_core::graph::Strategy;

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}
