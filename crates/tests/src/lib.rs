#[cfg(test)]
mod common;

#[cfg(test)]
mod profile_get_tests;

#[cfg(test)]
mod profile_user_type_tests;
