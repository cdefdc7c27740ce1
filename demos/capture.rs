use affirm::{Cause, Reason};

fn parse_percent(input: &str) -> Result<u8, Cause> {
    affirm::catch(|| {
        let value = input.trim_end_matches('%').parse::<u8>();
        affirm::error_is_nil(value.as_ref().err().cloned());
        let value = value.unwrap_or_default();
        affirm::is(
            value <= 100,
            Reason::configure(|o| o.set_reason(format!("{}% is over 100%", value))),
        );
        value
    })
}

fn main() {
    for input in ["42%", "120%", "ten%"] {
        match parse_percent(input) {
            Ok(value) => println!("{} -> {}", input, value),
            Err(cause) => println!("{} -> {}", input, cause),
        }
    }
}
