pub mod height;
pub mod status;

#[cfg(test)]
pub(crate) mod test_utils;
