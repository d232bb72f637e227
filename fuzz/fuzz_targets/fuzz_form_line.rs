#![no_main]

use libfuzzer_sys::fuzz_target;

use bmicalc_cli::session::{FormCommand, FormSession};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let mut session = FormSession::default();
    // Should not panic; a valid result must be finite and on the gauge
    if let Ok(FormCommand::Submit(input)) = session.parse(line) {
        if let Ok(a) = session.submit(&input) {
            assert!(a.bmi.is_finite());
            assert!((0.0..=100.0).contains(&a.gauge_percent));
            assert!(session.view().is_visible());
        } else {
            assert!(!session.view().is_visible());
        }
    }
});
