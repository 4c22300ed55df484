// Both scoring engines are pure: same input, same report.
// Profile scoring takes `today` as an argument so recency stays testable.

pub mod profile;
pub mod resume;
