pub mod resource;

#[macro_export]
macro_rules! next_random_bool {
    ($seed_resource:expr) => {
        $seed_resource.next_bool()
    };
}

#[macro_export]
macro_rules! next_random_ratio {
    ($seed_resource:expr, $probability:expr) => {
        $seed_resource.next_bool_with_probability($probability)
    };
}

#[macro_export]
macro_rules! next_random_range {
    // Inklusive Range: min..=max
    ($seed_resource:expr, $min:tt ..= $max:tt) => {
        $seed_resource.next_f64_in_inclusive_range($min, $max)
    };
}
