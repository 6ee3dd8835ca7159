/// Asserts a caller contract.
///
/// Always checked with the `checked` feature, otherwise only in debug builds.
macro_rules! contract_assert {
    ($($arg:tt)*) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($($arg)*);
        }
    };
}
