mod roundtrip;
mod validate_cases;
