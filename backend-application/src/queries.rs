pub mod home_queries;
pub mod item_queries;
pub mod status_queries;

#[cfg(test)]
pub(crate) mod test_support;
