// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! text {
    // Value::Text shorthand for cells we write ourselves
    ($expr:expr) => {
        $crate::store::Value::Text(::std::string::String::from($expr))
    };
}
