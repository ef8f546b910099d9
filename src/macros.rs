// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Anything that converts into a String
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
