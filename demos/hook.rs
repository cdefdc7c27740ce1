fn main() {
    affirm::hook::install();

    let config: Option<&str> = Some("stale");
    affirm::is_nil!(config, "config {:?} was never cleared", config);
}
