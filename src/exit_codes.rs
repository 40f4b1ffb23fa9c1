//! Exit code constants for the `huggle-parse` CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (the document is not valid YAML)
//! - 3: Fetch failure (the configuration source could not be retrieved)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or input that cannot be used at all.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a YAML document could not be loaded into a tree.
pub const PARSE_FAILURE: i32 = 2;

/// Fetch failure: the remote or local configuration source was unavailable.
pub const FETCH_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, FETCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
