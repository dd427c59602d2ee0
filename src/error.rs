// Errors that users can run into live next to the code that produces them
// (`loader::LoadError`, `assigner::AssignError`). This is only for broken invariants.
#[macro_export]
macro_rules! internal_error {
    () => {
        panic!("Internal error at {}:{}.", file!(), line!())
    };
    ($($arg:tt)+) => {
        panic!("Internal error at {}:{}: {}.", file!(), line!(), format!($($arg)*))
    };
}
