use ulid::Ulid;

/// Generates a fresh id, retrying while `is_taken` reports a clash with an existing record.
pub fn generate(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = Ulid::new().to_string();
        if !is_taken(&id) {
            return id;
        }
    }
}
