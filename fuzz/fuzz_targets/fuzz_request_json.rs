#![no_main]

use libfuzzer_sys::fuzz_target;
use wavegen_spec::{validate_request, Request};

/// Validation already caps buffers; this keeps each fuzz run fast.
const MAX_FUZZ_SAMPLES: usize = 1 << 14;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = Request::from_json(text) else {
        return;
    };

    let result = validate_request(&request);
    if !result.is_ok() || request.total_samples() > MAX_FUZZ_SAMPLES {
        return;
    }

    // Huge amplitudes may overflow to a synthesis error, but parameter
    // errors must all be caught by validation.
    let buffer = match wavegen_backend::generate(&request) {
        Ok(buffer) => buffer,
        Err(e) if e.is_invalid_parameter() => {
            panic!("validated request rejected by generate: {}", e)
        }
        Err(_) => return,
    };
    assert!(buffer.len() <= request.total_samples());
    assert!(buffer.iter().all(|s| s.is_finite()));

    let reparsed = Request::from_value(serde_json::to_value(&request).unwrap()).unwrap();
    assert_eq!(reparsed, request);
});
